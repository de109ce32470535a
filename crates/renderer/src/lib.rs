//! Heat map rendering for monthly temperature data.
//!
//! - Scales: band, quantile and linear
//! - Axes and colour legend
//! - Tooltip state for hover events
//! - SVG, HTML and PNG output

pub mod axis;
pub mod chart;
pub mod format;
pub mod legend;
pub mod page;
pub mod raster;
pub mod scale;
pub mod svg;
pub mod tooltip;

pub use chart::{Cell, Chart, ChartConfig, ColorDomain, Margin, RenderedChart};
pub use format::{to_fixed, to_fixed_signed};
pub use scale::{quantile_scale, BandScale, LinearScale, QuantileScale};
pub use svg::SvgMode;
pub use tooltip::{on_enter, on_leave, Pointer, TooltipState};
