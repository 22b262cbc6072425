//! Country catalog port.
//!
//! The editor offers a country picker; the list of names comes from an
//! adapter implementing [`CountryCatalog`].
//!
//! # Built-in Implementations
//!
//! - [`InMemoryCountryCatalog`] - holds a fixed list, used by tests and as a
//!   fallback when no data file can be read
//!
//! The JSON-backed catalog lives in the infrastructure layer.

/// Source of selectable country names.
pub trait CountryCatalog: Send + Sync {
    /// All names, in display order.
    fn countries(&self) -> &[String];

    /// Whether `name` is a known country (exact match).
    fn contains(&self, name: &str) -> bool {
        self.countries().iter().any(|c| c == name)
    }

    /// Names containing `query`, ignoring case. An empty query matches all.
    fn search(&self, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        self.countries()
            .iter()
            .filter(|c| query.is_empty() || c.to_lowercase().contains(&query))
            .map(String::as_str)
            .collect()
    }
}

/// Catalog backed by a list held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCountryCatalog {
    countries: Vec<String>,
}

impl InMemoryCountryCatalog {
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
        }
    }
}

impl CountryCatalog for InMemoryCountryCatalog {
    fn countries(&self) -> &[String] {
        &self.countries
    }
}
