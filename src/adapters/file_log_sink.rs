use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::ports::LogSink;

/// Transcript written straight to a file, truncated when opened.
#[derive(Debug)]
pub struct FileLogSink {
    file: File,
}

impl FileLogSink {
    /// Create or truncate the log file at `path`.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new().write(true).create(true).truncate(true).open(path)?;
        Ok(Self { file })
    }
}

impl LogSink for FileLogSink {
    fn write_line(&mut self, line: &str) {
        // An unwritable transcript is not worth interrupting the user for.
        let _ = writeln!(self.file, "{line}");
    }
}
