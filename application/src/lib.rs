//! Application layer for legislation
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DisplayConfig;
pub use ports::{
    country_catalog::{CountryCatalog, InMemoryCountryCatalog},
    country_fetcher::{CountryFetcher, FetchError},
};
pub use use_cases::build_layouts::BuildChamberLayoutsUseCase;
pub use use_cases::edit_composition::{
    EditCommand, EditCompositionError, EditCompositionUseCase, EditOutcome,
};
pub use use_cases::refresh_countries::RefreshCountriesUseCase;
