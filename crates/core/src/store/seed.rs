//! Seed resource providers.
//!
//! The seed is a static JSON list in the persisted shape, read when the
//! persisted slot is empty.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{SeedError, SeedSource};
use crate::product::Catalog;

/// Reads the seed catalog from a local JSON file.
pub struct FileSeedSource {
    path: PathBuf,
}

impl FileSeedSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SeedSource for FileSeedSource {
    async fn fetch(&self) -> Result<Catalog, SeedError> {
        debug!("Reading seed catalog from {:?}", self.path);
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SeedError::Io(format!("{}: {}", self.path.display(), e)))?;
        parse_seed(&body)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Fetches the seed catalog over HTTP.
pub struct HttpSeedSource {
    client: Client,
    url: String,
}

impl HttpSeedSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SeedError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SeedError::Http(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> Result<Catalog, SeedError> {
        debug!("Fetching seed catalog from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SeedError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SeedError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SeedError::Http(e.to_string()))?;
        parse_seed(&body)
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

fn parse_seed(body: &str) -> Result<Catalog, SeedError> {
    serde_json::from_str(body).map_err(|e| SeedError::Parse(e.to_string()))
}
