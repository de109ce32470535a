//! Colour legend: one swatch per palette colour with an axis of the
//! quantile thresholds underneath.

use heatmap_common::Color;

use crate::axis::Axis;
use crate::scale::{LinearScale, QuantileScale};

/// A single legend swatch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub x: f64,
    pub width: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub width: f64,
    pub height: f64,
    /// Translation of the legend group inside the plot area
    pub offset: (f64, f64),
    pub swatches: Vec<Swatch>,
    /// Axis drawn at the bottom edge of the swatches
    pub axis: Axis,
}

impl Legend {
    /// Lay out the legend for a colour scale.
    ///
    /// Swatches split `width` evenly in colour-scale order. Ticks sit at the
    /// scale's thresholds, positioned by `extent` mapped linearly onto the
    /// legend width.
    pub fn new(
        color_scale: &QuantileScale<Color>,
        extent: (f64, f64),
        width: f64,
        height: f64,
        offset: (f64, f64),
    ) -> Self {
        let colors = color_scale.range();
        let swatch_width = width / colors.len() as f64;
        let swatches = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| Swatch {
                x: i as f64 * swatch_width,
                width: swatch_width,
                color,
            })
            .collect();

        let scale = LinearScale::new(extent, (0.0, width));
        let axis = Axis::values(&scale, color_scale.thresholds());

        Self {
            width,
            height,
            offset,
            swatches,
            axis,
        }
    }
}
