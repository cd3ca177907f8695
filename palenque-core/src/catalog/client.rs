//! HTTP catalog client

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use shared::models::{Business, Service};

use crate::catalog::dto::{RawBusiness, RawService};
use crate::config::StoreConfig;

/// Catalog fetch error type
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Request failed (connection, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),
}

/// HTTP client for the marketplace catalog endpoints
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    api_base: String,
    media_base: String,
}

impl CatalogClient {
    /// Create a new catalog client from store configuration
    pub fn new(config: &StoreConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            media_base: config.media_base.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch services, optionally narrowed by a search query.
    pub async fn fetch_services(&self, query: Option<&str>) -> Result<Vec<Service>, CatalogError> {
        let url = format!("{}/catalog/{}", self.api_base, query.unwrap_or(""));
        tracing::debug!(url = %url, "Fetching services");

        let raw: Vec<RawService> = self.get_json(&url).await?;
        Ok(raw
            .into_iter()
            .map(|r| r.into_service(&self.media_base))
            .collect())
    }

    /// Fetch business profiles.
    pub async fn fetch_businesses(&self) -> Result<Vec<Business>, CatalogError> {
        let url = format!("{}/stores/list/", self.api_base);
        tracing::debug!(url = %url, "Fetching businesses");

        let raw: Vec<RawBusiness> = self.get_json(&url).await?;
        Ok(raw
            .into_iter()
            .map(|r| r.into_business(&self.media_base))
            .collect())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}
