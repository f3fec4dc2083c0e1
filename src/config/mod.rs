// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, DeclScanToml, OutputFormat, Preferences, RuleConfig};

use crate::error::Result;
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config from `declscan.toml` in the current directory, if present.
    ///
    /// # Errors
    /// Returns error if the file exists but is malformed.
    pub fn load() -> Result<Self> {
        Self::from_path(Path::new(CONFIG_FILE))
    }

    /// Creates a config from an explicit path. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        io::load_toml_file(&mut config, path)?;
        Ok(config)
    }

    /// # Errors
    /// Returns error if the TOML is malformed.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content)
    }

    /// Saves rules and preferences to `path`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = Config::new();
        assert_eq!(c.rules.encapsulating_modifiers, vec!["final", "private"]);
        assert!(c.rules.flag_bodiless_methods);
        assert_eq!(c.preferences.format, OutputFormat::Text);
        assert!(c.preferences.show_nested_types);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let mut c = Config::new();
        c.parse_toml("[preferences]\nformat = \"json\"").unwrap();
        assert_eq!(c.preferences.format, OutputFormat::Json);
        assert!(c.preferences.show_nested_types);
        assert_eq!(c.rules, RuleConfig::default());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let mut c = Config::new();
        let err = c.parse_toml("[rules\n").unwrap_err();
        assert!(matches!(err, crate::error::ScanError::Config(_)));
    }
}
