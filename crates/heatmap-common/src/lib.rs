//! Common types shared by the temperature heat map crates.

pub mod dataset;
pub mod error;
pub mod month;
pub mod palette;

pub use dataset::{MonthlyRecord, TemperatureDataset, DATASET_URL};
pub use error::{HeatmapError, HeatmapResult};
pub use month::{month_name, MONTHS_PER_YEAR};
pub use palette::{Color, Palette, HEAT_COLORS};
