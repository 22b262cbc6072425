//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod display;
mod logging;

pub use display::FileDisplayConfig;
pub use logging::FileLogConfig;

use legislation_domain::{
    Composition, DomainError, MAX_CHAMBER_SEATS, MAX_MEMBERS, PartyRecord, check_chamber_totals,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("{0} cannot be empty")]
    EmptyGlyph(&'static str),

    #[error("{field} must be a single character, got {value:?}")]
    MultiCharGlyph { field: &'static str, value: String },

    #[error("invalid log level {level:?}: {reason}")]
    InvalidLogLevel { level: String, reason: String },

    #[error("party #{index} has {members} members (limit {limit})", limit = MAX_MEMBERS)]
    TooManyMembers { index: usize, members: u32 },

    #[error("chamber {chamber:?} has {total} seats (limit {limit})", limit = MAX_CHAMBER_SEATS)]
    TooManySeats { chamber: String, total: u64 },
}

/// Complete file configuration (raw TOML structure)
///
/// # Example
///
/// ```toml
/// country = "United States"
/// countries_file = "data/countries.json"
///
/// [display]
/// show_legend = false
///
/// [[parties]]
/// chamber = "Senate"
/// party = "Republicans"
/// members = 53
/// color = "#FF0000"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Country shown above the chambers; with no `[[parties]]` the seed's
    /// country is used when unset
    pub country: Option<String>,
    /// JSON array of country names; the bundled list is used when unset
    pub countries_file: Option<String>,
    /// Display settings
    pub display: FileDisplayConfig,
    /// Log settings
    pub log: FileLogConfig,
    /// Initial party records; the United States seed is used when empty
    pub parties: Vec<PartyRecord>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            country: None,
            countries_file: None,
            display: FileDisplayConfig::default(),
            log: FileLogConfig::default(),
            parties: Vec::new(),
        }
    }
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.display.to_display_config()?;

        if let Err(e) = EnvFilter::try_new(&self.log.level) {
            return Err(ConfigValidationError::InvalidLogLevel {
                level: self.log.level.clone(),
                reason: e.to_string(),
            });
        }

        for (index, party) in self.parties.iter().enumerate() {
            if party.members > MAX_MEMBERS {
                return Err(ConfigValidationError::TooManyMembers {
                    index,
                    members: party.members,
                });
            }
        }

        if let Err(DomainError::TooManySeats { chamber, total }) =
            check_chamber_totals(&self.parties)
        {
            return Err(ConfigValidationError::TooManySeats { chamber, total });
        }

        Ok(())
    }

    /// Starting composition: configured parties, or the seed data.
    ///
    /// Call after [`FileConfig::validate`].
    pub fn composition(&self) -> Composition {
        if self.parties.is_empty() {
            let seed = Composition::united_states();
            let country = self.country.clone().or(seed.country.clone());
            return Composition::new(country, seed.records().to_vec());
        }
        Composition::new(self.country.clone(), self.parties.clone())
    }
}
