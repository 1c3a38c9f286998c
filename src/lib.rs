//! view-source-resolver: open the local file behind a browser's view-source request.
//!
//! The browser hands over a downloaded copy of the page. If that copy carries a
//! `<meta name="t29.localfile" content='...'>` tag, the editor is started on the
//! local file it names instead.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{AppContext, RunOutcome};
pub use domain::{AppError, Config, EditorCommand, InstallPaths, RunContext, ScanResult};
pub use domain::{extract_content_value, tag_scanner::scan};
