// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("I/O error: {source} (path: {})", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Unsupported language for file: {}", .0.display())]
    UnsupportedLanguage(PathBuf),

    #[error("Parse error: {0}")]
    Parse(String),

    /// A declaration node is missing an accessor the analysis cannot do without.
    #[error("Malformed tree: {kind} declaration{} has no {missing}", at_line(.line))]
    MalformedTree {
        kind: &'static str,
        missing: &'static str,
        line: Option<usize>,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;

impl ScanError {
    #[must_use]
    pub fn malformed(kind: &'static str, missing: &'static str, line: Option<usize>) -> Self {
        Self::MalformedTree { kind, missing, line }
    }

    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }
}

fn at_line(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

// Allow `?` on std::io::Error by converting to ScanError::Io with unknown path.
impl From<std::io::Error> for ScanError {
    fn from(source: std::io::Error) -> Self {
        ScanError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for ScanError {
    fn from(e: toml::de::Error) -> Self {
        ScanError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for ScanError {
    fn from(e: toml::ser::Error) -> Self {
        ScanError::Config(e.to_string())
    }
}
