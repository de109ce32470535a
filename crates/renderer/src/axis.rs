//! Axis tick generation.
//!
//! An [`Axis`] is plain data: where the ticks go and what they say. The SVG
//! writer turns it into a domain path, tick lines and labels.

use heatmap_common::month_name;

use crate::format::to_fixed;
use crate::scale::{BandScale, LinearScale};

/// Length of tick lines in pixels.
pub const TICK_SIZE: f64 = 6.0;

/// Gap between the end of a tick line and its label.
pub const TICK_PADDING: f64 = 3.0;

/// Years are labelled only on multiples of this.
pub const YEAR_LABEL_INTERVAL: i32 = 10;

/// Which side of the plot the axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Offset along the axis in pixels
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    pub ticks: Vec<Tick>,
    /// Pixel extent covered by the domain line
    pub range: (f64, f64),
}

impl Axis {
    /// Bottom axis for the year bands, labelled every ten years.
    pub fn years(scale: &BandScale<i32>) -> Self {
        let ticks = scale
            .domain()
            .iter()
            .filter(|year| year.rem_euclid(YEAR_LABEL_INTERVAL) == 0)
            .filter_map(|&year| {
                scale.center(year).map(|position| Tick {
                    position,
                    label: year.to_string(),
                })
            })
            .collect();

        Self {
            orientation: Orientation::Bottom,
            ticks,
            range: scale.range(),
        }
    }

    /// Left axis for the month bands, one tick per month with its full name.
    pub fn months(scale: &BandScale<usize>) -> Self {
        let ticks = scale
            .domain()
            .iter()
            .filter_map(|&index| {
                let position = scale.center(index)?;
                let label = month_name(index)?.to_string();
                Some(Tick { position, label })
            })
            .collect();

        Self {
            orientation: Orientation::Left,
            ticks,
            range: scale.range(),
        }
    }

    /// Bottom axis with ticks at explicit values, labelled to one decimal.
    pub fn values(scale: &LinearScale, values: &[f64]) -> Self {
        let ticks = values
            .iter()
            .map(|&value| Tick {
                position: scale.scale(value),
                label: to_fixed(value, 1),
            })
            .collect();

        Self {
            orientation: Orientation::Bottom,
            ticks,
            range: scale.range(),
        }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_ticks_only_on_decades() {
        let scale = BandScale::new(1755..=1781, (0.0, 270.0));
        let axis = Axis::years(&scale);
        assert_eq!(axis.labels(), vec!["1760", "1770", "1780"]);
        assert_eq!(axis.orientation, Orientation::Bottom);
    }

    #[test]
    fn test_year_tick_centered_in_band() {
        let scale = BandScale::new(1900..=1909, (0.0, 100.0));
        let axis = Axis::years(&scale);
        assert_eq!(axis.ticks.len(), 1);
        assert_eq!(axis.ticks[0].position, 5.0);
    }

    #[test]
    fn test_month_ticks() {
        let scale = BandScale::new(0..12usize, (0.0, 120.0));
        let axis = Axis::months(&scale);
        assert_eq!(axis.ticks.len(), 12);
        assert_eq!(axis.ticks[0].label, "January");
        assert_eq!(axis.ticks[11].label, "December");
        assert_eq!(axis.ticks[1].position, 15.0);
    }

    #[test]
    fn test_value_ticks_one_decimal() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 400.0));
        let axis = Axis::values(&scale, &[2.5, 7.26]);
        assert_eq!(axis.labels(), vec!["2.5", "7.3"]);
        assert_eq!(axis.ticks[0].position, 100.0);
    }

    #[test]
    fn test_value_ticks_round_ties_up() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 400.0));
        let axis = Axis::values(&scale, &[7.25, 8.75, 0.05]);
        // 0.05 is stored just above the tie
        assert_eq!(axis.labels(), vec!["7.3", "8.8", "0.1"]);
    }
}
