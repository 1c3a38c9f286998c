use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for resolver operations.
///
/// The display text of each variant is the message shown to the user.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// `conf.ini` is not present next to the executable.
    #[error("Expected ini file '{}', not there.", .0.display())]
    ConfigFileMissing(PathBuf),

    /// `conf.ini` exists but reading it failed.
    #[error("Could not read ini file '{}': {source}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The resolver was not called with exactly one file argument.
    #[error("Usage: {program} <path to file>.")]
    BadArgumentCount { program: String },

    /// The file handed over by the browser does not exist.
    #[error("Passed filename '{}' does not exist", .0.display())]
    InputFileMissing(PathBuf),

    /// The meta tag pointed at a local file that does not exist.
    #[error(
        "Could extract filename '{local_file}' from meta tag '{marker}', but the file does not exist."
    )]
    ExtractedFileMissing { local_file: String, marker: String },

    /// The editor process could not be started.
    #[error(
        "Create Process failed: {code}. Inspect {} for further information.",
        .log_file.display()
    )]
    ProcessSpawnFailure { code: i32, log_file: PathBuf },
}

impl AppError {
    /// Whether the run must stop once the user has been told about this error.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            AppError::ExtractedFileMissing { .. } | AppError::ProcessSpawnFailure { .. }
        )
    }

    /// Process exit code for a run that ends with this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_fatal() { 1 } else { 0 }
    }
}
