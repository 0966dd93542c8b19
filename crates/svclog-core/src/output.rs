//! Line layout and the stream lines are written to
//!
//! Layout, tab-separated:
//!
//! ```text
//! [<timestamp>\t]<TAG>\t[<correlation-id>]\t<message>
//! ```
//!
//! The identifier is always printed, whether it came from a carrier or from
//! the configured default; only the timestamp is optional. Console mode
//! prints the bare message, and only for Error and Fatal.

use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Local};
use svclog_core_types::schema::FIELD_SEPARATOR;

use crate::config::EngineConfig;
use crate::level::Resolution;
use crate::message::Message;
use crate::time_format::format_timestamp;

/// Chooses and fills one of the line layouts
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter<'a> {
    config: &'a EngineConfig,
}

impl<'a> OutputFormatter<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    /// Render one line without its terminator, or `None` when nothing is emitted
    pub fn render(
        &self,
        resolution: &Resolution,
        message: Message<'_>,
        now: &DateTime<Local>,
    ) -> Option<String> {
        let tag = resolution.tag?;

        if self.config.console_mode {
            return resolution
                .severity
                .is_failure()
                .then(|| message.render());
        }

        let mut line = String::new();
        if self.config.show_timestamp {
            line.push_str(&format_timestamp(now));
            line.push(FIELD_SEPARATOR);
        }
        line.push_str(tag);
        line.push(FIELD_SEPARATOR);
        line.push('[');
        line.push_str(&resolution.correlation_id);
        line.push(']');
        line.push(FIELD_SEPARATOR);
        line.push_str(&message.render());
        Some(line)
    }
}

/// In-memory line store shared between a `Sink` and the code inspecting it
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|l| l.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Drain and return all lines written so far
    pub fn take(&self) -> Vec<String> {
        let mut guard = self.lines.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *guard)
    }

    pub fn clear(&self) {
        self.lines.lock().map(|mut l| l.clear()).ok();
    }

    fn push(&self, line: String) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line);
    }
}

/// Destination for rendered lines
#[derive(Debug, Clone, Default)]
pub enum Sink {
    /// Process standard output
    #[default]
    Stdout,
    /// Captured in memory
    Buffer(LineBuffer),
}

impl Sink {
    /// A buffer-backed sink and the handle to read it
    pub fn buffer() -> (Self, LineBuffer) {
        let buffer = LineBuffer::new();
        (Sink::Buffer(buffer.clone()), buffer)
    }

    /// Write one newline-terminated line; write failures are dropped
    pub fn write_line(&self, line: String) {
        match self {
            Sink::Stdout => {
                let mut out = std::io::stdout().lock();
                let _ = writeln!(out, "{line}");
            }
            Sink::Buffer(buffer) => buffer.push(line),
        }
    }

    pub fn flush(&self) {
        if let Sink::Stdout = self {
            let _ = std::io::stdout().flush();
        }
    }
}
