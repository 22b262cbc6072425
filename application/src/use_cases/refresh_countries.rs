//! Refresh Countries use case
//!
//! Pulls the country list from a [`CountryFetcher`] and normalizes it into
//! the form the catalog expects: trimmed, non-empty, sorted, unique.

use crate::ports::country_fetcher::{CountryFetcher, FetchError};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for refreshing the country list
pub struct RefreshCountriesUseCase<F: CountryFetcher + 'static> {
    fetcher: Arc<F>,
}

impl<F: CountryFetcher + 'static> RefreshCountriesUseCase<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    pub async fn execute(&self) -> Result<Vec<String>, FetchError> {
        let raw = self.fetcher.fetch_countries().await?;
        let fetched = raw.len();
        let countries = normalize(raw);

        if countries.is_empty() {
            warn!("Country source returned no usable names");
            return Err(FetchError::Decode("no country names in response".into()));
        }

        info!(fetched, kept = countries.len(), "Refreshed country list");
        Ok(countries)
    }
}

fn normalize(raw: Vec<String>) -> Vec<String> {
    let mut countries: Vec<String> = raw
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    countries.sort();
    countries.dedup();
    countries
}
