mod log_sink;
mod notifier;
mod process_launcher;

pub use log_sink::{LogSink, NullLogSink};
pub use notifier::{NOTIFICATION_TITLE, Notifier};
pub use process_launcher::{ProcessLauncher, SpawnOutcome};
