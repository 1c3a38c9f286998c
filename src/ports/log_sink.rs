/// Port for the run transcript.
///
/// Writes are best-effort: a transcript that cannot be written must never stop a run.
pub trait LogSink {
    /// Append one line to the transcript.
    fn write_line(&mut self, line: &str);
}

/// Sink that drops every line, used when the log file cannot be opened.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogSink;

impl LogSink for NullLogSink {
    fn write_line(&mut self, _line: &str) {}
}
