//! The logging engine
//!
//! `Logging` composes `LevelResolver` and `OutputFormatter` behind the ten
//! `Logger` entry points and owns the fatal-exit policy and the two
//! lifecycle lines.

use chrono::{DateTime, Local};
use svclog_core_types::schema::{LIFECYCLE_STARTING, LIFECYCLE_STOPPING};
use svclog_core_types::CallContext;

use crate::config::EngineConfig;
use crate::level::{LevelResolver, Severity};
use crate::logger::{Args, Logger};
use crate::message::Message;
use crate::output::{LineBuffer, OutputFormatter, Sink};

/// Source of the current instant for timestamps
pub type Clock = fn() -> DateTime<Local>;

/// Exit status used when a fatal call terminates the process
pub const FATAL_EXIT_CODE: i32 = 1;

/// A logging engine with its own configuration and output stream
///
/// Most programs use the process-wide instance in `crate::global`; a private
/// instance is useful for libraries and tests that need isolated settings.
#[derive(Debug, Clone)]
pub struct Logging {
    config: EngineConfig,
    title: String,
    sink: Sink,
    clock: Clock,
}

impl Default for Logging {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Logging {
    /// An engine writing to standard output
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            title: String::new(),
            sink: Sink::Stdout,
            clock: Local::now,
        }
    }

    /// An engine writing to an in-memory buffer, and the buffer handle
    pub fn buffered(config: EngineConfig) -> (Self, LineBuffer) {
        let (sink, buffer) = Sink::buffer();
        (Self::new(config).with_sink(sink), buffer)
    }

    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Mutable configuration; intended for startup, before concurrent use
    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    pub fn set_sink(&mut self, sink: Sink) {
        self.sink = sink;
    }

    /// Title recorded by the last `starting` call
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Log a plain message at a raw level; out-of-range levels log as Info
    pub fn print(&self, raw: i64, ctx: Option<&CallContext>, args: Args<'_>) {
        self.emit(raw, ctx, Message::Plain(args));
    }

    /// Log a formatted message at a raw level; out-of-range levels log as Info
    pub fn printf(&self, raw: i64, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.emit(raw, ctx, Message::Template(template, args));
    }

    fn emit(&self, raw: i64, ctx: Option<&CallContext>, message: Message<'_>) {
        let resolution = LevelResolver::new(&self.config).resolve(raw, ctx);
        let now = (self.clock)();
        if let Some(line) = OutputFormatter::new(&self.config).render(&resolution, message, &now) {
            self.sink.write_line(line);
        }
    }

    /// Terminate after a fatal line unless exit is suppressed
    fn exit_after_fatal(&self) {
        if self.config.suppress_fatal_exit {
            return;
        }
        self.sink.flush();
        std::process::exit(FATAL_EXIT_CODE);
    }

    /// Record the process title and log `"<title> service is starting..."`
    pub fn starting(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.infof(None, "%s %s", &[&self.title, &LIFECYCLE_STARTING]);
    }

    /// Log `"<title> service is stopping..."` with the last recorded title
    pub fn stopping(&self) {
        self.infof(None, "%s %s", &[&self.title, &LIFECYCLE_STOPPING]);
    }
}

impl Logger for Logging {
    fn debug(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.print(Severity::Debug.as_raw(), ctx, args);
    }

    fn info(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.print(Severity::Info.as_raw(), ctx, args);
    }

    fn warn(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.print(Severity::Warn.as_raw(), ctx, args);
    }

    fn error(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.print(Severity::Error.as_raw(), ctx, args);
    }

    fn fatal(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.print(Severity::Fatal.as_raw(), ctx, args);
        self.exit_after_fatal();
    }

    fn debugf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.printf(Severity::Debug.as_raw(), ctx, template, args);
    }

    fn infof(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.printf(Severity::Info.as_raw(), ctx, template, args);
    }

    fn warnf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.printf(Severity::Warn.as_raw(), ctx, template, args);
    }

    fn errorf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.printf(Severity::Error.as_raw(), ctx, template, args);
    }

    fn fatalf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.printf(Severity::Fatal.as_raw(), ctx, template, args);
        self.exit_after_fatal();
    }
}
