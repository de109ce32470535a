//! Synthetic dataset generators.
//!
//! These generators create predictable, verifiable datasets that can be used
//! across the test suite.

use heatmap_common::{MonthlyRecord, TemperatureDataset};

/// Creates a full dataset covering every month of `first_year..=last_year`.
///
/// The variance of each record is `(year - first_year) * 0.01 + (month - 1) * 0.1`,
/// so every record is distinct and the warmest cell is December of the last
/// year.
///
/// # Example
///
/// ```
/// use test_utils::create_dataset;
///
/// let dataset = create_dataset(1900, 1909, 8.0);
/// assert_eq!(dataset.len(), 120);
/// assert_eq!(dataset.distinct_years().len(), 10);
/// ```
pub fn create_dataset(first_year: i32, last_year: i32, base_temperature: f64) -> TemperatureDataset {
    let mut records = Vec::new();
    for year in first_year..=last_year {
        for month in 1..=12u32 {
            records.push(MonthlyRecord::new(
                year,
                month,
                pattern_variance(year - first_year, month),
            ));
        }
    }
    TemperatureDataset::new(base_temperature, records)
}

/// Like [`create_dataset`] but the first and last years are partial: the
/// first year starts in `first_month` and the last year stops at `last_month`.
pub fn create_partial_dataset(
    first_year: i32,
    first_month: u32,
    last_year: i32,
    last_month: u32,
    base_temperature: f64,
) -> TemperatureDataset {
    let mut dataset = create_dataset(first_year, last_year, base_temperature);
    dataset.monthly_variance.retain(|r| {
        let before_start = r.year == first_year && r.month < first_month;
        let after_end = r.year == last_year && r.month > last_month;
        !(before_start || after_end)
    });
    dataset
}

/// Creates a dataset with `count` records of evenly spaced variance in one
/// year group per 12 records, spanning `[-spread, spread]`.
pub fn create_linear_dataset(count: usize, spread: f64, base_temperature: f64) -> TemperatureDataset {
    let records = (0..count)
        .map(|i| {
            let t = if count > 1 {
                i as f64 / (count - 1) as f64
            } else {
                0.5
            };
            MonthlyRecord::new(
                2000 + (i / 12) as i32,
                (i % 12) as u32 + 1,
                -spread + 2.0 * spread * t,
            )
        })
        .collect();
    TemperatureDataset::new(base_temperature, records)
}

fn pattern_variance(year_offset: i32, month: u32) -> f64 {
    year_offset as f64 * 0.01 + (month - 1) as f64 * 0.1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dataset_size() {
        let dataset = create_dataset(1753, 2015, 8.66);
        assert_eq!(dataset.len(), (2015 - 1753 + 1) * 12);
    }

    #[test]
    fn test_partial_dataset_trims_edges() {
        let dataset = create_partial_dataset(1753, 3, 1755, 9, 8.66);
        assert_eq!(dataset.len(), 10 + 12 + 9);
        assert_eq!(dataset.monthly_variance[0].month, 3);
        assert_eq!(dataset.monthly_variance.last().unwrap().month, 9);
    }

    #[test]
    fn test_linear_dataset_spans_spread() {
        let dataset = create_linear_dataset(24, 2.0, 10.0);
        let (min, max) = dataset.temperature_extent().unwrap();
        assert!((min - 8.0).abs() < 1e-9);
        assert!((max - 12.0).abs() < 1e-9);
    }
}
