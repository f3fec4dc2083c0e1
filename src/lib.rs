pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod lang;
pub mod reporting;
pub mod types;

pub use analysis::{analyze, analyze_file, analyze_source, analyze_with, Analysis, ReportStore};
