//! Error types for the heat map crates.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for loading and rendering.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Data Errors ===
    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    #[error("Dataset contains no monthly records")]
    EmptyDataset,

    #[error("Invalid month {month} for year {year} (expected 1-12)")]
    InvalidMonth { year: i32, month: u32 },

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    Render(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(String),
}

impl HeatmapError {
    /// Process exit code for this error when it ends the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            HeatmapError::Fetch(_) => 2,
            HeatmapError::Parse(_)
            | HeatmapError::EmptyDataset
            | HeatmapError::InvalidMonth { .. } => 3,
            HeatmapError::Render(_) => 4,
            HeatmapError::Io(_) => 5,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::Parse(format!("JSON error: {}", err))
    }
}
