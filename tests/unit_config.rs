// tests/unit_config.rs
use std::fs;

use declscan_core::cli::handlers::handle_init_in;
use declscan_core::config::{Config, OutputFormat, RuleConfig, CONFIG_FILE};
use declscan_core::error::ScanError;
use declscan_core::exit::DeclScanExit;

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("declscan.toml");
    fs::write(
        &path,
        "[rules]\nencapsulating_modifiers = [\"private\"]\nflag_bodiless_methods = false\n",
    )
    .unwrap();
    let c = Config::from_path(&path).unwrap();
    assert_eq!(c.rules.encapsulating_modifiers, vec!["private"]);
    assert!(!c.rules.flag_bodiless_methods);
    assert_eq!(c.preferences.format, OutputFormat::Text);
}

#[test]
fn test_missing_file_gives_defaults() {
    let d = tempfile::tempdir().unwrap();
    let c = Config::from_path(&d.path().join("absent.toml")).unwrap();
    assert_eq!(c.rules, RuleConfig::default());
}

#[test]
fn test_malformed_file_is_error() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("declscan.toml");
    fs::write(&path, "[preferences]\nformat = \"xml\"\n").unwrap();
    assert!(matches!(Config::from_path(&path), Err(ScanError::Config(_))));
}

#[test]
fn test_save_then_load() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("declscan.toml");
    let mut c = Config::new();
    c.preferences.format = OutputFormat::Json;
    c.preferences.show_nested_types = false;
    c.save(&path).unwrap();

    let loaded = Config::from_path(&path).unwrap();
    assert_eq!(loaded.preferences, c.preferences);
    assert_eq!(loaded.rules, c.rules);
}

#[test]
fn test_init_writes_defaults() {
    let d = tempfile::tempdir().unwrap();
    let exit = handle_init_in(d.path(), false).unwrap();
    assert_eq!(exit, DeclScanExit::Success);

    let loaded = Config::from_path(&d.path().join(CONFIG_FILE)).unwrap();
    assert_eq!(loaded, Config::new());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join(CONFIG_FILE);
    fs::write(&path, "[preferences]\nformat = \"json\"\n").unwrap();

    assert!(handle_init_in(d.path(), false).is_err());
    let kept = Config::from_path(&path).unwrap();
    assert_eq!(kept.preferences.format, OutputFormat::Json);
}

#[test]
fn test_init_force_overwrites() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join(CONFIG_FILE);
    fs::write(&path, "[preferences]\nformat = \"json\"\n").unwrap();

    handle_init_in(d.path(), true).unwrap();
    let replaced = Config::from_path(&path).unwrap();
    assert_eq!(replaced.preferences.format, OutputFormat::Text);
}
