//! Dataset loading over HTTP or from a local file.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use heatmap_common::{HeatmapError, HeatmapResult, TemperatureDataset};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Connect timeout for the dataset request.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    File(PathBuf),
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Url(url) => write!(f, "{}", url),
            DatasetSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and parses the temperature dataset.
///
/// A single GET with no retry: a transport failure or a non-2xx status is
/// returned as [`HeatmapError::Fetch`].
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    client: Client,
}

impl DatasetLoader {
    pub fn new(request_timeout: Duration) -> HeatmapResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| HeatmapError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Load and parse the dataset. Validation is left to the renderer.
    #[instrument(skip(self, source), fields(source = %source))]
    pub async fn load(&self, source: &DatasetSource) -> HeatmapResult<TemperatureDataset> {
        let body = match source {
            DatasetSource::Url(url) => self.fetch(url).await?,
            DatasetSource::File(path) => tokio::fs::read(path).await.map_err(|e| {
                HeatmapError::Io(format!("Failed to read {}: {}", path.display(), e))
            })?,
        };

        let dataset = TemperatureDataset::from_slice(&body)?;

        info!(
            records = dataset.len(),
            base_temperature = dataset.base_temperature,
            bytes = body.len(),
            "Loaded dataset"
        );

        Ok(dataset)
    }

    async fn fetch(&self, url: &str) -> HeatmapResult<Vec<u8>> {
        debug!(url = %url, "Requesting dataset");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HeatmapError::Fetch(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HeatmapError::Fetch(format!("HTTP {} from {}", status, url)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HeatmapError::Fetch(format!("Failed to read response body: {}", e)))?;

        Ok(bytes.to_vec())
    }
}
