//! Infrastructure layer for legislation
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod countries;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDisplayConfig, FileLogConfig,
};
pub use countries::{CatalogError, JsonCountryCatalog};
#[cfg(feature = "fetch-countries")]
pub use countries::RestCountriesFetcher;
