//! JSON-backed country catalog

use legislation_application::CountryCatalog;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Country list shipped with the binary
const BUNDLED_COUNTRIES: &str = include_str!("../../data/countries.json");

/// Errors loading a country list
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid country list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Country catalog read from a JSON array of names
#[derive(Debug, Clone)]
pub struct JsonCountryCatalog {
    countries: Vec<String>,
}

impl JsonCountryCatalog {
    /// The list bundled at build time
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_COUNTRIES) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Bundled country list is unreadable: {}", e);
                Self {
                    countries: Vec::new(),
                }
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let countries: Vec<String> = serde_json::from_str(json)?;
        Ok(Self { countries })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            count = catalog.countries.len(),
            "Loaded country list"
        );
        Ok(catalog)
    }

    /// Load `path` when given, falling back to the bundled list on error.
    pub fn load_or_bundled(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::from_file(path).unwrap_or_else(|e| {
                warn!("{}; using bundled country list", e);
                Self::bundled()
            }),
            None => Self::bundled(),
        }
    }

    /// Write `countries` as a pretty-printed JSON array.
    pub fn write_json(path: impl AsRef<Path>, countries: &[String]) -> Result<(), CatalogError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| CatalogError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(countries)?;
        fs::write(path, json).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl CountryCatalog for JsonCountryCatalog {
    fn countries(&self) -> &[String] {
        &self.countries
    }
}
