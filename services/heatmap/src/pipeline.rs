//! Load, render and write in one pass.

use anyhow::{Context, Result};
use heatmap_common::HeatmapError;
use renderer::Chart;
use tracing::info;

use crate::config::HeatmapConfig;
use crate::loader::DatasetLoader;
use crate::output::{encode, write_output};

/// Exit code for errors that carry no [`HeatmapError`].
const GENERIC_EXIT_CODE: i32 = 1;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub records: usize,
    pub year_range: (i32, i32),
    pub bytes_written: usize,
}

/// Run every stage. Each failure is wrapped with the stage it happened in;
/// the underlying [`HeatmapError`] stays reachable through `downcast_ref`.
pub async fn run(config: &HeatmapConfig) -> Result<RunSummary> {
    let loader =
        DatasetLoader::new(config.request_timeout).context("Failed to create dataset loader")?;
    let dataset = loader
        .load(&config.source)
        .await
        .with_context(|| format!("Failed to load dataset from {}", config.source))?;

    let rendered = Chart::new(config.chart.clone())
        .render(&dataset)
        .context("Failed to render heat map")?;
    let bytes = encode(&rendered, config.format)
        .with_context(|| format!("Failed to encode {} output", config.format.as_str()))?;
    write_output(&config.output, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    info!(
        cells = rendered.cells.len(),
        first_year = rendered.year_range.0,
        last_year = rendered.year_range.1,
        format = config.format.as_str(),
        "Heat map generated"
    );

    Ok(RunSummary {
        records: rendered.cells.len(),
        year_range: rendered.year_range,
        bytes_written: bytes.len(),
    })
}

/// Process exit code for a failed run.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<HeatmapError>()
        .map_or(GENERIC_EXIT_CODE, HeatmapError::exit_code)
}
