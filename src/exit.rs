// src/exit.rs
//! Process exit codes for `declscan`.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DeclScanExit {
    /// Every file was analysed.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// At least one file could not be read, parsed or analysed.
    AnalysisFailed = 2,
}

impl DeclScanExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for DeclScanExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
