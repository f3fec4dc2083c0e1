//! Command dispatch logic extracted from binary to reduce main function size.

use super::{
    args::{Cli, Commands},
    handlers::{handle_init, handle_scan, load_config},
};
use crate::exit::DeclScanExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: Cli) -> Result<DeclScanExit> {
    let Some(command) = cli.command else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        return Ok(DeclScanExit::Success);
    };

    match command {
        Commands::Scan {
            files,
            format,
            only,
            flagged,
        } => {
            let config = load_config(cli.config.as_deref())?;
            handle_scan(config, &files, format, only, flagged)
        }
        Commands::Init { force } => handle_init(force),
    }
}
