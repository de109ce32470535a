//! Heat map generator library.
//!
//! This module exposes the internal modules for testing purposes.

pub mod config;
pub mod loader;
pub mod output;
pub mod pipeline;

pub use config::{Args, HeatmapConfig, OutputFormat};
pub use loader::{DatasetLoader, DatasetSource};
pub use pipeline::{exit_code, run, RunSummary};
