//! Country data adapters
//!
//! - [`JsonCountryCatalog`] implements `CountryCatalog` from a JSON array of
//!   names (the bundled list or a user-supplied file)
//! - [`RestCountriesFetcher`] implements `CountryFetcher` against the public
//!   restcountries.com API (feature `fetch-countries`)

mod catalog;
#[cfg(feature = "fetch-countries")]
mod rest_countries;

pub use catalog::{CatalogError, JsonCountryCatalog};
#[cfg(feature = "fetch-countries")]
pub use rest_countries::RestCountriesFetcher;
