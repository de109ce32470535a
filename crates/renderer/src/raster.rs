//! PNG output by rasterising the chart SVG.

use tracing::debug;

use heatmap_common::{HeatmapError, HeatmapResult};

use crate::chart::RenderedChart;

impl RenderedChart {
    /// Render the standalone SVG to PNG bytes at its natural size.
    pub fn to_png(&self) -> HeatmapResult<Vec<u8>> {
        rasterize_svg(&self.to_svg())
    }
}

/// Rasterise an SVG document onto a white background and encode it as PNG.
///
/// System fonts are loaded so axis and legend labels render.
pub fn rasterize_svg(svg: &str) -> HeatmapResult<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| HeatmapError::Render(format!("SVG parse failed: {}", e)))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        HeatmapError::Render(format!(
            "invalid canvas size {}x{}",
            size.width(),
            size.height()
        ))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let png = pixmap
        .encode_png()
        .map_err(|e| HeatmapError::Render(format!("PNG encoding failed: {}", e)))?;

    debug!(
        width = size.width(),
        height = size.height(),
        bytes = png.len(),
        "Rasterised chart"
    );

    Ok(png)
}
