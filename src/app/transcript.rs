//! Fixed lines of the run transcript.

use std::ffi::OsString;

use chrono::{DateTime, Local};

use crate::domain::InstallPaths;
use crate::ports::LogSink;

/// Timestamp format of the `At:` line: day-month-year, 12-hour clock.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %I:%M:%S";

pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Header written as soon as the log file is open.
pub fn write_header(log: &mut dyn LogSink, install: &InstallPaths, at: &DateTime<Local>) {
    log.write_line("Last job log");
    log.write_line(&format!("Of: {}", install.executable_path.display()));
    log.write_line(&format!("In: {}", install.executable_dir.display()));
    log.write_line(&format!("At: {}", format_timestamp(at)));
}

/// Argument count followed by every argument, the program name included.
pub fn write_arguments(log: &mut dyn LogSink, args: &[OsString]) {
    log.write_line(&format!("Called with argc={} arguments", args.len()));
    for (i, arg) in args.iter().enumerate() {
        log.write_line(&format!("Argument {}: '{}'", i, arg.to_string_lossy()));
    }
}
