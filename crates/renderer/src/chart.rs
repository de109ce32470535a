//! Heat map layout.
//!
//! [`Chart::render`] turns a dataset into a [`RenderedChart`]: the scales,
//! axes, one [`Cell`] per record, and the legend. Serialising the result to
//! SVG, HTML or PNG is done by the `svg`, `page` and `raster` modules.

use serde::{Deserialize, Serialize};
use tracing::debug;

use heatmap_common::{
    Color, HeatmapError, HeatmapResult, MonthlyRecord, Palette, TemperatureDataset,
    MONTHS_PER_YEAR,
};

use crate::axis::Axis;
use crate::legend::Legend;
use crate::scale::{BandScale, LinearScale, QuantileScale};

/// Space around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 60.0,
            bottom: 100.0,
            left: 100.0,
        }
    }
}

/// Which temperatures the colour scale's quantiles are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorDomain {
    /// Only the minimum and maximum: buckets split the extent evenly.
    #[default]
    Extent,
    /// Every record's temperature: buckets hold equal numbers of cells.
    Samples,
}

/// Layout and colouring options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Outer SVG width including margins
    pub width: f64,
    /// Outer SVG height including margins
    pub height: f64,
    pub margin: Margin,
    pub legend_width: f64,
    pub legend_height: f64,
    /// Distance from the bottom of the plot area to the top of the legend
    pub legend_gap: f64,
    pub palette: Palette,
    pub color_domain: ColorDomain,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            margin: Margin::default(),
            legend_width: 400.0,
            legend_height: 30.0,
            legend_gap: 50.0,
            palette: Palette::heat(),
            color_domain: ColorDomain::default(),
        }
    }
}

impl ChartConfig {
    /// Width of the plot area.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn with_color_domain(mut self, color_domain: ColorDomain) -> Self {
        self.color_domain = color_domain;
        self
    }
}

/// One rectangle of the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
    pub year: i32,
    /// Zero-based month (0 = January)
    pub month_index: usize,
    pub variance: f64,
    /// Base temperature plus variance
    pub temperature: f64,
}

impl Cell {
    /// The record this cell was drawn from.
    pub fn record(&self) -> MonthlyRecord {
        MonthlyRecord::new(self.year, self.month_index as u32 + 1, self.variance)
    }
}

/// A fully laid out chart.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub config: ChartConfig,
    pub base_temperature: f64,
    pub year_range: (i32, i32),
    pub temperature_extent: (f64, f64),
    pub year_scale: BandScale<i32>,
    pub month_scale: BandScale<usize>,
    pub color_scale: QuantileScale<Color>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub cells: Vec<Cell>,
    pub legend: Legend,
}

/// Renders datasets with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    config: ChartConfig,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Lay out the heat map for `dataset`.
    ///
    /// Fails on an empty dataset or a month outside 1..=12; both leave the
    /// grid undefined.
    pub fn render(&self, dataset: &TemperatureDataset) -> HeatmapResult<RenderedChart> {
        dataset.validate()?;

        let extent = dataset
            .temperature_extent()
            .ok_or(HeatmapError::EmptyDataset)?;
        let year_range = dataset.year_range().ok_or(HeatmapError::EmptyDataset)?;

        let width = self.config.inner_width();
        let height = self.config.inner_height();

        let year_scale = BandScale::new(dataset.distinct_years(), (0.0, width));
        let month_scale = BandScale::new(0..MONTHS_PER_YEAR, (0.0, height));

        let color_values = match self.config.color_domain {
            ColorDomain::Extent => vec![extent.0, extent.1],
            ColorDomain::Samples => dataset.temperatures(),
        };
        let color_scale = QuantileScale::new(&color_values, self.config.palette.colors().to_vec())
            .ok_or_else(|| HeatmapError::Render("no finite temperatures for colour scale".into()))?;

        let cells = dataset
            .monthly_variance
            .iter()
            .map(|record| self.layout_cell(dataset, record, &year_scale, &month_scale, &color_scale))
            .collect::<HeatmapResult<Vec<_>>>()?;

        let legend = Legend::new(
            &color_scale,
            extent,
            self.config.legend_width,
            self.config.legend_height,
            (
                (width - self.config.legend_width) / 2.0,
                height + self.config.legend_gap,
            ),
        );

        debug!(
            cells = cells.len(),
            years = year_scale.domain().len(),
            min_temp = extent.0,
            max_temp = extent.1,
            "Chart laid out"
        );

        Ok(RenderedChart {
            config: self.config.clone(),
            base_temperature: dataset.base_temperature,
            year_range,
            temperature_extent: extent,
            x_axis: Axis::years(&year_scale),
            y_axis: Axis::months(&month_scale),
            year_scale,
            month_scale,
            color_scale,
            cells,
            legend,
        })
    }

    fn layout_cell(
        &self,
        dataset: &TemperatureDataset,
        record: &MonthlyRecord,
        year_scale: &BandScale<i32>,
        month_scale: &BandScale<usize>,
        color_scale: &QuantileScale<Color>,
    ) -> HeatmapResult<Cell> {
        let invalid = || HeatmapError::InvalidMonth {
            year: record.year,
            month: record.month,
        };

        let x = year_scale
            .scale(record.year)
            .ok_or_else(|| HeatmapError::Render(format!("year {} has no band", record.year)))?;
        let y = month_scale.scale(record.month_index()).ok_or_else(invalid)?;
        let temperature = dataset.temperature(record);

        Ok(Cell {
            x,
            y,
            width: year_scale.bandwidth(),
            height: month_scale.bandwidth(),
            fill: *color_scale.scale(temperature),
            year: record.year,
            month_index: record.month_index(),
            variance: record.variance,
            temperature,
        })
    }
}

impl RenderedChart {
    /// Colour-scale thresholds, as shown on the legend axis.
    pub fn thresholds(&self) -> &[f64] {
        self.color_scale.thresholds()
    }

    /// Title line for the page.
    pub fn title(&self) -> &'static str {
        "Monthly Global Land-Surface Temperature"
    }

    /// Subtitle describing the data range and baseline.
    pub fn description(&self) -> String {
        format!(
            "{} - {}: base temperature {}°C",
            self.year_range.0, self.year_range.1, self.base_temperature
        )
    }
}
