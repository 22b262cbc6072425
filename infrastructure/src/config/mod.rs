//! Configuration file loading for legislation
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LEGISLATION_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./legislation.toml` or `./.legislation.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/legislation/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileDisplayConfig, FileLogConfig};
pub use loader::ConfigLoader;
