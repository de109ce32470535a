//! Global monthly temperature dataset.
//!
//! The dataset is a baseline temperature plus one variance record per
//! (year, month). Actual temperatures are always derived as
//! `base_temperature + variance` and never stored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::{HeatmapError, HeatmapResult};
use crate::month::MONTHS_PER_YEAR;

/// Location of the reference global temperature dataset.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// A single month's deviation from the baseline temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub year: i32,
    /// Calendar month, 1-based (1 = January)
    pub month: u32,
    /// Degrees Celsius relative to the baseline
    pub variance: f64,
}

impl MonthlyRecord {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        Self { year, month, variance }
    }

    /// Zero-based month index used for the y axis.
    pub fn month_index(&self) -> usize {
        self.month.saturating_sub(1) as usize
    }
}

/// The full dataset as served by the remote JSON endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyRecord>,
}

impl TemperatureDataset {
    pub fn new(base_temperature: f64, monthly_variance: Vec<MonthlyRecord>) -> Self {
        Self {
            base_temperature,
            monthly_variance,
        }
    }

    /// Parse a dataset from a JSON document.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        serde_json::from_str(json).map_err(|e| HeatmapError::Parse(e.to_string()))
    }

    /// Parse a dataset from raw response bytes.
    pub fn from_slice(bytes: &[u8]) -> HeatmapResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| HeatmapError::Parse(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// Actual temperature for a record.
    pub fn temperature(&self, record: &MonthlyRecord) -> f64 {
        self.base_temperature + record.variance
    }

    /// All derived temperatures, in record order.
    pub fn temperatures(&self) -> Vec<f64> {
        self.monthly_variance
            .iter()
            .map(|r| self.temperature(r))
            .collect()
    }

    /// Minimum and maximum derived temperature, or `None` when empty.
    pub fn temperature_extent(&self) -> Option<(f64, f64)> {
        self.monthly_variance.iter().fold(None, |acc, record| {
            let t = self.temperature(record);
            match acc {
                None => Some((t, t)),
                Some((min, max)) => Some((min.min(t), max.max(t))),
            }
        })
    }

    /// Distinct years present in the data, ascending.
    pub fn distinct_years(&self) -> Vec<i32> {
        self.monthly_variance
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First and last year present, or `None` when empty.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let years = self.distinct_years();
        Some((*years.first()?, *years.last()?))
    }

    /// Check the properties rendering depends on: at least one record and
    /// every month within 1..=12.
    pub fn validate(&self) -> HeatmapResult<()> {
        if self.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }

        if let Some(bad) = self
            .monthly_variance
            .iter()
            .find(|r| r.month == 0 || r.month as usize > MONTHS_PER_YEAR)
        {
            return Err(HeatmapError::InvalidMonth {
                year: bad.year,
                month: bad.month,
            });
        }

        Ok(())
    }
}
