//! Command-line arguments and the resolved pipeline configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use heatmap_common::DATASET_URL;
use renderer::{ChartConfig, ColorDomain};

use crate::loader::DatasetSource;

#[derive(Parser, Debug)]
#[command(name = "heatmap")]
#[command(about = "Render the monthly global land-surface temperature heat map")]
pub struct Args {
    /// Dataset URL
    #[arg(long, env = "HEATMAP_DATASET_URL", default_value = DATASET_URL)]
    pub url: String,

    /// Local dataset file (overrides --url)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = "heatmap.html")]
    pub output: PathBuf,

    /// Output format (default: inferred from the output extension)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Values the colour quantiles are computed over
    #[arg(long, value_enum, default_value = "extent")]
    pub color_domain: ColorDomainArg,

    /// HTTP request timeout in seconds
    #[arg(long, env = "HEATMAP_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Emit JSON log lines
    #[arg(long)]
    pub log_json: bool,
}

/// Rendered file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Svg,
    Png,
}

impl OutputFormat {
    /// Infer the format from a file extension. Unknown extensions give `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "html" | "htm" => Some(OutputFormat::Html),
            "svg" => Some(OutputFormat::Svg),
            "png" => Some(OutputFormat::Png),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorDomainArg {
    Extent,
    Samples,
}

impl From<ColorDomainArg> for ColorDomain {
    fn from(arg: ColorDomainArg) -> Self {
        match arg {
            ColorDomainArg::Extent => ColorDomain::Extent,
            ColorDomainArg::Samples => ColorDomain::Samples,
        }
    }
}

/// Everything the pipeline needs, resolved from [`Args`].
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    pub source: DatasetSource,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub chart: ChartConfig,
    pub request_timeout: Duration,
}

impl From<Args> for HeatmapConfig {
    fn from(args: Args) -> Self {
        let source = match args.input {
            Some(path) => DatasetSource::File(path),
            None => DatasetSource::Url(args.url),
        };
        let format = args
            .format
            .or_else(|| OutputFormat::from_path(&args.output))
            .unwrap_or(OutputFormat::Html);

        Self {
            source,
            output: args.output,
            format,
            chart: ChartConfig::default().with_color_domain(args.color_domain.into()),
            request_timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}
