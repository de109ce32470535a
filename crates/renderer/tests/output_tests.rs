//! Tests for SVG, HTML and PNG output.
//!
//! These check the rendered-output contract: element ids, the `cell` class and
//! the per-cell data attributes.

use renderer::raster::rasterize_svg;
use renderer::{to_fixed, Chart, RenderedChart, SvgMode};
use test_utils::{create_dataset, create_partial_dataset, two_month_dataset};

/// Every `<rect class="cell" ...>` start tag in the document.
fn cell_tags(doc: &str) -> Vec<&str> {
    doc.match_indices("<rect class=\"cell\"")
        .map(|(start, _)| {
            let end = start + doc[start..].find('>').expect("unterminated rect");
            &doc[start..end]
        })
        .collect()
}

/// Value of attribute `name` in a start tag.
fn attr<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!(" {}=\"", name);
    let start = tag.find(&needle)? + needle.len();
    let len = tag[start..].find('"')?;
    Some(&tag[start..start + len])
}

fn render_two_months() -> RenderedChart {
    Chart::default().render(&two_month_dataset()).unwrap()
}

// ============================================================================
// SVG tests
// ============================================================================

#[test]
fn test_svg_has_fixed_ids() {
    let svg = render_two_months().to_svg();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("id=\"x-axis\""));
    assert!(svg.contains("id=\"y-axis\""));
    assert!(svg.contains("id=\"legend\""));
    assert!(svg.contains("width=\"1000\" height=\"500\""));
    assert!(svg.contains("transform=\"translate(100,60)\""));
}

#[test]
fn test_svg_two_month_cells() {
    let svg = render_two_months().to_svg();
    let cells = cell_tags(&svg);
    assert_eq!(cells.len(), 2);

    assert_eq!(attr(cells[0], "data-temp"), Some("6.5"));
    assert_eq!(attr(cells[1], "data-temp"), Some("8.3"));
    assert_eq!(attr(cells[0], "data-month"), Some("0"));
    assert_eq!(attr(cells[1], "data-month"), Some("1"));
    assert_eq!(attr(cells[0], "data-year"), Some("1900"));
    assert_eq!(attr(cells[0], "y"), Some("0"));
}

#[test]
fn test_svg_data_attributes_for_all_records() {
    let dataset = create_partial_dataset(1900, 4, 1960, 8, 8.66);
    let svg = Chart::default().render(&dataset).unwrap().to_svg();
    let cells = cell_tags(&svg);
    assert_eq!(cells.len(), dataset.len());

    for (tag, record) in cells.iter().zip(&dataset.monthly_variance) {
        let temp: f64 = attr(tag, "data-temp").unwrap().parse().unwrap();
        assert_eq!(temp, dataset.base_temperature + record.variance);

        let month: u32 = attr(tag, "data-month").unwrap().parse().unwrap();
        assert_eq!(month, record.month - 1);
        assert!(month <= 11);

        let year: i32 = attr(tag, "data-year").unwrap().parse().unwrap();
        assert_eq!(year, record.year);
    }
}

#[test]
fn test_svg_cell_fill_is_palette_color() {
    let rendered = render_two_months();
    let svg = rendered.to_svg();
    for (tag, cell) in cell_tags(&svg).iter().zip(&rendered.cells) {
        assert_eq!(attr(tag, "fill"), Some(cell.fill.to_hex().as_str()));
    }
}

#[test]
fn test_svg_standalone_uses_titles() {
    let svg = render_two_months().to_svg();
    assert!(svg.contains("<title>1900 - January\nTemperature: 6.50°C\nVariance: -1.50°C</title>"));
    assert!(!svg.contains("data-tooltip"));
    assert!(!svg.contains("<script"));
}

#[test]
fn test_svg_inline_escapes_tooltip_markup() {
    let svg = render_two_months().svg(SvgMode::Inline);
    assert!(svg.contains("data-tooltip=\"&lt;strong&gt;1900 - January&lt;/strong&gt;"));
    assert!(!svg.contains("<title>"));
    assert!(!svg.starts_with("<?xml"));
}

#[test]
fn test_svg_x_axis_ticks_are_decades() {
    let dataset = create_dataset(1895, 1932, 8.0);
    let svg = Chart::default().render(&dataset).unwrap().to_svg();
    let start = svg.find("id=\"x-axis\"").unwrap();
    let end = svg.find("id=\"y-axis\"").unwrap();
    let x_axis = &svg[start..end];

    assert_eq!(x_axis.matches("class=\"tick\"").count(), 4);
    for year in ["1900", "1910", "1920", "1930"] {
        assert!(x_axis.contains(&format!(">{}</text>", year)));
    }
    assert!(!x_axis.contains(">1895</text>"));
    assert!(!x_axis.contains(">1901</text>"));
}

#[test]
fn test_svg_legend_swatches_and_ticks() {
    let rendered = Chart::default().render(&create_dataset(1900, 1950, 8.0)).unwrap();
    let svg = rendered.to_svg();
    let start = svg.find("id=\"legend\"").unwrap();
    let legend = &svg[start..];

    for color in rendered.color_scale.range() {
        assert!(legend.contains(&format!("fill=\"{}\"", color)));
    }
    for threshold in rendered.thresholds() {
        assert!(legend.contains(&format!(">{}</text>", to_fixed(*threshold, 1))));
    }
}

// ============================================================================
// HTML tests
// ============================================================================

#[test]
fn test_html_page_structure() {
    let html = render_two_months().to_html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<h1 id=\"title\">"));
    assert!(html.contains("<p id=\"description\">1900 - 1900: base temperature 8°C</p>"));
    assert!(html.contains("<div id=\"tooltip\" style=\"opacity: 0\"></div>"));
    assert!(html.contains("id=\"chart-container\""));
    assert_eq!(cell_tags(&html).len(), 2);
}

#[test]
fn test_html_script_uses_tooltip_constants() {
    let html = render_two_months().to_html();
    assert!(html.contains("tooltip.style.opacity = 0.9;"));
    assert!(html.contains("event.pageX + 10"));
    assert!(html.contains("event.pageY + -28"));
    assert!(html.contains("tooltip.style.opacity = 0;"));
    assert!(html.contains("data-tooltip"));
}

// ============================================================================
// PNG tests
// ============================================================================

#[test]
fn test_png_signature() {
    let png = render_two_months().to_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn test_png_dimensions() {
    let png = render_two_months().to_png().unwrap();
    // IHDR width and height, big-endian, right after the chunk header
    let width = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
    let height = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
    assert_eq!((width, height), (1000, 500));
}

#[test]
fn test_rasterize_rejects_invalid_svg() {
    assert!(rasterize_svg("not svg at all").is_err());
}
