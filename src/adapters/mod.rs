pub mod console_notifier;
pub mod detached_process_launcher;
pub mod file_log_sink;
#[cfg(target_os = "windows")]
pub mod message_box_notifier;

pub use console_notifier::ConsoleNotifier;
pub use detached_process_launcher::DetachedProcessLauncher;
pub use file_log_sink::FileLogSink;
#[cfg(target_os = "windows")]
pub use message_box_notifier::MessageBoxNotifier;

use crate::ports::Notifier;

/// The notifier appropriate for the current platform.
pub fn platform_notifier() -> impl Notifier {
    #[cfg(target_os = "windows")]
    {
        MessageBoxNotifier::new()
    }
    #[cfg(not(target_os = "windows"))]
    {
        ConsoleNotifier::new()
    }
}
