//! Common test fixtures for heat map tests.
//!
//! Small, hand-checkable datasets covering the scenarios the chart must
//! handle.

use std::io::Write;

use heatmap_common::{MonthlyRecord, TemperatureDataset};
use tempfile::NamedTempFile;

/// Two records in January and February 1900 around a base of 8.0°C.
///
/// Temperatures are 6.5 and 8.3.
pub fn two_month_dataset() -> TemperatureDataset {
    TemperatureDataset::new(
        8.0,
        vec![
            MonthlyRecord::new(1900, 1, -1.5),
            MonthlyRecord::new(1900, 2, 0.3),
        ],
    )
}

/// JSON text of [`two_month_dataset`] in the remote wire format.
pub const TWO_MONTH_JSON: &str = r#"{
    "baseTemperature": 8.0,
    "monthlyVariance": [
        {"year": 1900, "month": 1, "variance": -1.5},
        {"year": 1900, "month": 2, "variance": 0.3}
    ]
}"#;

/// A single record; every scale collapses to one band or one value.
pub fn single_record_dataset() -> TemperatureDataset {
    TemperatureDataset::new(8.66, vec![MonthlyRecord::new(1753, 1, -1.366)])
}

/// A dataset with no records.
pub fn empty_dataset() -> TemperatureDataset {
    TemperatureDataset::new(8.66, Vec::new())
}

/// Records whose variance is identical, so every temperature is the same.
pub fn constant_dataset() -> TemperatureDataset {
    TemperatureDataset::new(
        10.0,
        (1..=12).map(|m| MonthlyRecord::new(2000, m, 0.25)).collect(),
    )
}

/// A record with a month outside 1..=12.
pub fn invalid_month_dataset() -> TemperatureDataset {
    TemperatureDataset::new(
        8.0,
        vec![
            MonthlyRecord::new(1900, 1, 0.0),
            MonthlyRecord::new(1900, 13, 0.0),
        ],
    )
}

/// Write JSON text to a temporary file that lives as long as the handle.
pub fn write_json_fixture(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp fixture");
    file.write_all(json.as_bytes()).expect("write temp fixture");
    file.flush().expect("flush temp fixture");
    file
}
