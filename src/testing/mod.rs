mod fake_launcher;
mod memory_log_sink;
mod recording_notifier;

pub use fake_launcher::FakeLauncher;
pub use memory_log_sink::MemoryLogSink;
pub use recording_notifier::RecordingNotifier;
