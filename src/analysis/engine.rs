//! Runs independent analysis passes over a set of files.
//! Each file gets its own pass and its own report store; nothing is shared.

use std::path::{Path, PathBuf};

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::config::Config;
use crate::error::Result;

use super::{analyze_file, Analysis};

/// Result of analysing one file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub result: Result<Analysis>,
}

impl FileOutcome {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub struct Engine {
    config: Config,
}

impl Engine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Analyses `files` in parallel. Outcomes keep the input order.
    #[must_use]
    pub fn scan(&self, files: &[PathBuf]) -> Vec<FileOutcome> {
        files
            .par_iter()
            .map(|path| self.scan_file(path))
            .collect()
    }

    #[must_use]
    pub fn scan_file(&self, path: &Path) -> FileOutcome {
        FileOutcome {
            path: path.to_path_buf(),
            result: analyze_file(path, &self.config.rules),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_keeps_order_and_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("Good.java");
        fs::write(&good, "class Good { public int x; }").unwrap();
        let missing = dir.path().join("Missing.java");

        let engine = Engine::new(Config::default());
        let outcomes = engine.scan(&[good.clone(), missing.clone()]);

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].path, good);
        assert!(outcomes[0].is_ok());
        assert_eq!(outcomes[1].path, missing);
        assert!(!outcomes[1].is_ok());
    }
}
