use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "declscan", version, about = "Field and method property reports for Java sources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (defaults to ./declscan.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyse Java files and print field and method reports
    Scan {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Only show one table
        #[arg(long, value_enum)]
        only: Option<OnlyArg>,
        /// Only show flagged declarations
        #[arg(long)]
        flagged: bool,
    },
    /// Write a default declscan.toml
    Init {
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnlyArg {
    Fields,
    Methods,
}
