//! Command handlers.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use colored::Colorize;
use tracing::debug;

use super::args::{FormatArg, OnlyArg};
use crate::analysis::{Engine, FileOutcome};
use crate::config::{Config, OutputFormat, CONFIG_FILE};
use crate::exit::DeclScanExit;
use crate::reporting::{console, json, Filter, RenderOptions};

/// Loads the config from `path`, or `declscan.toml` in the current directory.
///
/// # Errors
/// Returns error if the config file exists but is malformed.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::from_path(p)?,
        None => Config::load()?,
    };
    debug!(?config, "effective config");
    Ok(config)
}

/// Analyses `files` and prints the reports.
///
/// # Errors
/// Returns error if JSON serialization fails.
pub fn handle_scan(
    config: Config,
    files: &[PathBuf],
    format: Option<FormatArg>,
    only: Option<OnlyArg>,
    flagged: bool,
) -> Result<DeclScanExit> {
    let format = match format {
        Some(FormatArg::Json) => OutputFormat::Json,
        Some(FormatArg::Text) => OutputFormat::Text,
        None => config.preferences.format,
    };
    let opts = RenderOptions {
        filter: match only {
            Some(OnlyArg::Fields) => Filter::Fields,
            Some(OnlyArg::Methods) => Filter::Methods,
            None => Filter::All,
        },
        flagged_only: flagged,
        show_nested_types: config.preferences.show_nested_types,
    };

    let engine = Engine::new(config);
    let outcomes = engine.scan(files);

    match format {
        OutputFormat::Json => println!("{}", json::render(&outcomes, &opts)?),
        OutputFormat::Text => print_text(&outcomes, &opts),
    }

    if outcomes.iter().all(FileOutcome::is_ok) {
        Ok(DeclScanExit::Success)
    } else {
        Ok(DeclScanExit::AnalysisFailed)
    }
}

fn print_text(outcomes: &[FileOutcome], opts: &RenderOptions) {
    for outcome in outcomes {
        match &outcome.result {
            Ok(analysis) => console::print(&outcome.path, analysis, opts),
            Err(e) => eprintln!(
                "{} {}: {e}",
                "error:".red().bold(),
                outcome.path.display()
            ),
        }
    }
}

/// Writes a default `declscan.toml` into the current directory.
///
/// # Errors
/// Returns error if the file exists (without `force`) or cannot be written.
pub fn handle_init(force: bool) -> Result<DeclScanExit> {
    handle_init_in(Path::new("."), force)
}

/// Writes a default `declscan.toml` into `dir`.
///
/// # Errors
/// Returns error if the file exists (without `force`) or cannot be written.
pub fn handle_init_in(dir: &Path, force: bool) -> Result<DeclScanExit> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::new().save(&path)?;
    println!("{} {}", "Wrote".green(), path.display());
    Ok(DeclScanExit::Success)
}
