use clap::Parser;
use colored::Colorize;
use declscan_core::cli::{self, Cli};
use declscan_core::exit::DeclScanExit;

fn main() -> DeclScanExit {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            DeclScanExit::Error
        }
    }
}
