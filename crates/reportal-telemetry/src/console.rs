//! `MakeWriter` that routes formatted events to the browser console.
//!
//! Each event is buffered in full and flushed once on drop, so a single
//! `console.*` call carries one log line at the method matching its level.
//! Native builds (tests, tooling) write the same lines to stderr.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Writer factory handed to the fmt layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleWriter;

impl<'a> MakeWriter<'a> for ConsoleWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

/// One buffered log line.
#[derive(Debug)]
pub struct ConsoleLine {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleLine {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    /// Buffered text without the trailing newline the formatter appends.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.buffer).trim_end().to_string()
    }

    /// Severity the line will be emitted at.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        emit(self.level, &self.text());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use gloo::console;

    let line = line.to_string();
    match level {
        Level::ERROR => console::error!(line),
        Level::WARN => console::warn!(line),
        Level::INFO => console::info!(line),
        _ => console::debug!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    use std::io::Write;

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{line}");
}
