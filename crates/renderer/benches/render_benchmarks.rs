//! Benchmarks for the renderer crate - chart layout, scales and serialisation.
//!
//! Run with: cargo bench --package renderer -- layout
//! Or: cargo bench --package renderer --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use renderer::{Chart, ChartConfig, ColorDomain, QuantileScale};
use test_utils::create_dataset;

/// Year spans to benchmark; the reference dataset covers 263 years.
const YEAR_SPANS: [i32; 3] = [50, 263, 1000];

// =============================================================================
// LAYOUT BENCHMARKS
// =============================================================================

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");

    for years in YEAR_SPANS {
        let dataset = create_dataset(1753, 1753 + years - 1, 8.66);
        group.throughput(Throughput::Elements(dataset.len() as u64));

        for domain in [ColorDomain::Extent, ColorDomain::Samples] {
            let chart = Chart::new(ChartConfig::default().with_color_domain(domain));
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", domain), years),
                &dataset,
                |b, dataset| b.iter(|| chart.render(black_box(dataset))),
            );
        }
    }

    group.finish();
}

// =============================================================================
// SCALE BENCHMARKS
// =============================================================================

fn bench_quantile_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantile_scale");

    for years in YEAR_SPANS {
        let temps = create_dataset(1753, 1753 + years - 1, 8.66).temperatures();
        group.throughput(Throughput::Elements(temps.len() as u64));

        group.bench_with_input(BenchmarkId::new("build", years), &temps, |b, temps| {
            b.iter(|| QuantileScale::new(black_box(temps), (0..11).collect::<Vec<_>>()))
        });
    }

    group.finish();
}

// =============================================================================
// SERIALISATION BENCHMARKS
// =============================================================================

fn bench_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");
    let dataset = create_dataset(1753, 2015, 8.66);
    let rendered = Chart::default().render(&dataset).expect("render reference dataset");

    group.throughput(Throughput::Elements(rendered.cells.len() as u64));
    group.bench_function("svg", |b| b.iter(|| black_box(&rendered).to_svg()));
    group.bench_function("html", |b| b.iter(|| black_box(&rendered).to_html()));

    group.finish();
}

criterion_group!(benches, bench_layout, bench_quantile_scale, bench_serialize);
criterion_main!(benches);
