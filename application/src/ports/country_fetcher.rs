//! Country fetcher port.
//!
//! Refreshes the country list from an external source (e.g. a public REST
//! API). Implemented in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from fetching the country list
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Remote source of country names.
#[async_trait]
pub trait CountryFetcher: Send + Sync {
    /// Fetch all country names, in whatever order the source returns them.
    async fn fetch_countries(&self) -> Result<Vec<String>, FetchError>;
}
