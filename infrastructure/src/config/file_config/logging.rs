//! Logging configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Log output options
///
/// # Example
///
/// ```toml
/// [log]
/// level = "legislation=debug,info"
/// directory = "/tmp/legislation-logs"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// `EnvFilter` directive used when no `-v` flag is given
    pub level: String,
    /// Directory for the TUI log file (default: `<data dir>/legislation/logs`)
    pub directory: Option<String>,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl FileLogConfig {
    /// Directory the TUI writes its log file to
    pub fn log_directory(&self) -> Option<PathBuf> {
        match &self.directory {
            Some(dir) => Some(PathBuf::from(dir)),
            None => dirs::data_dir().map(|d| d.join("legislation").join("logs")),
        }
    }
}
