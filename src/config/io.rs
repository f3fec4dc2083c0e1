use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::{Config, DeclScanToml};
use crate::error::{Result, ScanError};

pub const CONFIG_FILE: &str = "declscan.toml";

/// Applies the contents of a `declscan.toml` onto `config`.
///
/// # Errors
/// Returns `ScanError::Config` if the TOML is malformed.
pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: DeclScanToml = toml::from_str(content)?;
    config.rules = parsed.rules;
    config.preferences = parsed.preferences;
    Ok(())
}

/// Loads `path` into `config`. A missing file leaves `config` untouched.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_toml_file(config: &mut Config, path: &Path) -> Result<bool> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file");
        return Ok(false);
    }
    let content = fs::read_to_string(path).map_err(|e| ScanError::io(e, path))?;
    parse_toml(config, &content)?;
    debug!(path = %path.display(), "loaded config");
    Ok(true)
}

/// Writes rules and preferences to `path`.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let toml_struct = DeclScanToml {
        rules: config.rules.clone(),
        preferences: config.preferences.clone(),
    };
    let content = toml::to_string_pretty(&toml_struct)?;
    fs::write(path, content).map_err(|e| ScanError::io(e, path))?;
    Ok(())
}
