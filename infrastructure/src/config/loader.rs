//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["legislation.toml", ".legislation.toml"];

/// Environment variable prefix (`LEGISLATION_DISPLAY__SHOW_LEGEND=false`)
const ENV_PREFIX: &str = "LEGISLATION_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `LEGISLATION_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./legislation.toml` or `./.legislation.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/legislation/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let global = Self::global_config_path().filter(|p| p.exists());
        let project = Self::project_config_path();
        Self::figment(global.as_deref(), project.as_deref(), config_path.map(PathBuf::as_path))
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(global: Option<&Path>, project: Option<&Path>, explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project, explicit].into_iter().flatten() {
            debug!(path = %path.display(), "Merging config file");
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/legislation/config.toml if set,
    /// otherwise falls back to ~/.config/legislation/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("legislation").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_config_sources() -> String {
        let mut out = String::from("Configuration sources (in priority order):\n");
        out.push_str(&format!("  [ENV  ] Variables: {ENV_PREFIX}*\n"));

        match Self::project_config_path() {
            Some(path) => out.push_str(&format!("  [FOUND] Project: {}\n", path.display())),
            None => out.push_str("  [     ] Project: ./legislation.toml or ./.legislation.toml\n"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            out.push_str(&format!("  [{mark}] Global:  {}\n", path.display()));
        }

        out.push_str("  [     ] Default: built-in defaults\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.parties.is_empty());
        assert!(config.display.show_marker);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("legislation"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "legislation.toml",
                r#"
country = "Japan"

[display]
show_legend = false
"#,
            )?;

            let config = ConfigLoader::figment(None, Some(Path::new("legislation.toml")), None)
                .extract::<FileConfig>()?;
            assert_eq!(config.country.as_deref(), Some("Japan"));
            assert!(!config.display.show_legend);
            assert!(config.display.show_marker);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project() {
        Jail::expect_with(|jail| {
            jail.create_file("legislation.toml", r#"country = "Japan""#)?;
            jail.create_file("other.toml", r#"country = "Chile""#)?;

            let config = ConfigLoader::figment(
                None,
                Some(Path::new("legislation.toml")),
                Some(Path::new("other.toml")),
            )
            .extract::<FileConfig>()?;
            assert_eq!(config.country.as_deref(), Some("Chile"));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("legislation.toml", r#"country = "Japan""#)?;
            jail.set_env("LEGISLATION_COUNTRY", "Peru");
            jail.set_env("LEGISLATION_DISPLAY__SHOW_MARKER", "false");

            let config = ConfigLoader::figment(None, Some(Path::new("legislation.toml")), None)
                .extract::<FileConfig>()?;
            assert_eq!(config.country.as_deref(), Some("Peru"));
            assert!(!config.display.show_marker);
            Ok(())
        });
    }

    #[test]
    fn test_parties_from_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "legislation.toml",
                r##"
[[parties]]
chamber = "Bundestag"
party = "CDU/CSU"
members = 208
color = "#000000"
"##,
            )?;

            let config = ConfigLoader::figment(None, Some(Path::new("legislation.toml")), None)
                .extract::<FileConfig>()?;
            assert_eq!(config.parties.len(), 1);
            assert_eq!(config.composition().chambers()[0].total_members, 208);
            Ok(())
        });
    }

    #[test]
    fn test_describe_config_sources() {
        let text = ConfigLoader::describe_config_sources();
        assert!(text.contains("LEGISLATION_"));
        assert!(text.contains("built-in defaults"));
    }
}
