//! restcountries.com adapter for [`CountryFetcher`]

use async_trait::async_trait;
use legislation_application::{CountryFetcher, FetchError};
use serde::Deserialize;
use tracing::{debug, info};

/// Endpoint returning only the `name` field of every country
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name";

#[derive(Debug, Deserialize)]
struct CountryEntry {
    name: CountryName,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

/// Fetches common country names from the restcountries API
pub struct RestCountriesFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl RestCountriesFetcher {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for RestCountriesFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract `name.common` from a restcountries response body.
fn decode_names(body: &str) -> Result<Vec<String>, FetchError> {
    let entries: Vec<CountryEntry> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(entries.into_iter().map(|e| e.name.common).collect())
}

#[async_trait]
impl CountryFetcher for RestCountriesFetcher {
    async fn fetch_countries(&self) -> Result<Vec<String>, FetchError> {
        info!(endpoint = %self.endpoint, "Fetching country list");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        debug!(bytes = body.len(), "Received country list");

        decode_names(&body)
    }
}
