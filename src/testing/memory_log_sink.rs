use crate::ports::LogSink;

/// Log sink keeping the transcript in memory.
#[derive(Debug, Default)]
pub struct MemoryLogSink {
    lines: Vec<String>,
}

impl MemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl LogSink for MemoryLogSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
