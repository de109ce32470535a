//! Hover tooltip state.
//!
//! The page has a single tooltip node. Entering a cell replaces its content
//! and position; leaving hides it. Both transitions are pure functions of the
//! hovered record so they can be checked without a browser.

use serde::Serialize;

use heatmap_common::{month_name, MonthlyRecord};

use crate::format::{to_fixed, to_fixed_signed};

/// Opacity of a visible tooltip.
pub const TOOLTIP_OPACITY: f64 = 0.9;

/// Tooltip offset from the pointer, in pixels.
pub const TOOLTIP_OFFSET_X: f64 = 10.0;
pub const TOOLTIP_OFFSET_Y: f64 = -28.0;

/// Pointer position in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Everything the tooltip node displays.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TooltipState {
    pub opacity: f64,
    /// Inner HTML
    pub html: String,
    pub left: f64,
    pub top: f64,
    pub data_year: Option<i32>,
}

impl TooltipState {
    /// The initial state: empty and invisible.
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// State after the pointer enters the cell for `record`.
pub fn on_enter(record: &MonthlyRecord, base_temperature: f64, pointer: Pointer) -> TooltipState {
    TooltipState {
        opacity: TOOLTIP_OPACITY,
        html: tooltip_html(record, base_temperature),
        left: pointer.x + TOOLTIP_OFFSET_X,
        top: pointer.y + TOOLTIP_OFFSET_Y,
        data_year: Some(record.year),
    }
}

/// State after the pointer leaves a cell. Only the opacity changes.
pub fn on_leave(previous: &TooltipState) -> TooltipState {
    TooltipState {
        opacity: 0.0,
        ..previous.clone()
    }
}

/// Tooltip body as HTML.
pub fn tooltip_html(record: &MonthlyRecord, base_temperature: f64) -> String {
    let (heading, temperature, variance) = tooltip_lines(record, base_temperature);
    format!(
        "<strong>{}</strong><br/>{}<br/>{}",
        heading, temperature, variance
    )
}

/// Tooltip body as plain text, one line per field.
pub fn tooltip_text(record: &MonthlyRecord, base_temperature: f64) -> String {
    let (heading, temperature, variance) = tooltip_lines(record, base_temperature);
    format!("{}\n{}\n{}", heading, temperature, variance)
}

fn tooltip_lines(record: &MonthlyRecord, base_temperature: f64) -> (String, String, String) {
    let month = month_name(record.month_index()).unwrap_or("Unknown");
    (
        format!("{} - {}", record.year, month),
        format!("Temperature: {}°C", to_fixed(base_temperature + record.variance, 2)),
        format!("Variance: {}°C", to_fixed_signed(record.variance, 2)),
    )
}
