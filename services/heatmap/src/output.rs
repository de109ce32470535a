//! Serialising a rendered chart and writing it to disk.

use std::path::Path;

use heatmap_common::{HeatmapError, HeatmapResult};
use renderer::RenderedChart;
use tracing::info;

use crate::config::OutputFormat;

/// Serialise the chart in the requested format.
pub fn encode(rendered: &RenderedChart, format: OutputFormat) -> HeatmapResult<Vec<u8>> {
    match format {
        OutputFormat::Html => Ok(rendered.to_html().into_bytes()),
        OutputFormat::Svg => Ok(rendered.to_svg().into_bytes()),
        OutputFormat::Png => rendered.to_png(),
    }
}

/// Write `bytes` to `path`, creating missing parent directories.
pub async fn write_output(path: &Path, bytes: &[u8]) -> HeatmapResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            HeatmapError::Io(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| HeatmapError::Io(format!("Failed to write {}: {}", path.display(), e)))?;

    info!(path = %path.display(), bytes = bytes.len(), "Wrote output");
    Ok(())
}
