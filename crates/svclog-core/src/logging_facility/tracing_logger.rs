//! Alternate `Logger` backed by `tracing`
//!
//! Each call becomes one tracing event under the `svclog` target with the
//! rendered message, a `correlation_id` field and a `severity` tag field.
//! Filtering is left to the installed subscriber. Fatal calls are recorded
//! as errors with `fatal = true` and then apply this logger's own exit
//! policy.

use svclog_core_types::CallContext;

use crate::engine::FATAL_EXIT_CODE;
use crate::level::Severity;
use crate::logger::{Args, Logger};
use crate::message::Message;

/// Tracing target for every event emitted by `TracingLogger`
pub const TARGET: &str = "svclog";

#[derive(Debug, Clone)]
pub struct TracingLogger {
    correlation_default: String,
    exit_on_fatal: bool,
}

impl TracingLogger {
    /// A logger that terminates the process on fatal calls
    pub fn new(correlation_default: impl Into<String>) -> Self {
        Self {
            correlation_default: correlation_default.into(),
            exit_on_fatal: true,
        }
    }

    pub fn with_exit_on_fatal(mut self, exit_on_fatal: bool) -> Self {
        self.exit_on_fatal = exit_on_fatal;
        self
    }

    fn record(&self, severity: Severity, ctx: Option<&CallContext>, message: Message<'_>) {
        let correlation_id = ctx
            .and_then(CallContext::correlation_id)
            .unwrap_or(self.correlation_default.as_str());
        let text = message.render();
        let tag = severity.tag();

        match severity {
            Severity::Debug => {
                tracing::debug!(target: TARGET, correlation_id, severity = tag, "{}", text)
            }
            Severity::Info => {
                tracing::info!(target: TARGET, correlation_id, severity = tag, "{}", text)
            }
            Severity::Warn => {
                tracing::warn!(target: TARGET, correlation_id, severity = tag, "{}", text)
            }
            Severity::Error => {
                tracing::error!(target: TARGET, correlation_id, severity = tag, "{}", text)
            }
            Severity::Fatal => {
                tracing::error!(target: TARGET, correlation_id, severity = tag, fatal = true, "{}", text)
            }
        }
    }

    fn exit_after_fatal(&self) {
        if self.exit_on_fatal {
            std::process::exit(FATAL_EXIT_CODE);
        }
    }
}

impl Logger for TracingLogger {
    fn debug(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.record(Severity::Debug, ctx, Message::Plain(args));
    }

    fn info(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.record(Severity::Info, ctx, Message::Plain(args));
    }

    fn warn(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.record(Severity::Warn, ctx, Message::Plain(args));
    }

    fn error(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.record(Severity::Error, ctx, Message::Plain(args));
    }

    fn fatal(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.record(Severity::Fatal, ctx, Message::Plain(args));
        self.exit_after_fatal();
    }

    fn debugf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.record(Severity::Debug, ctx, Message::Template(template, args));
    }

    fn infof(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.record(Severity::Info, ctx, Message::Template(template, args));
    }

    fn warnf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.record(Severity::Warn, ctx, Message::Template(template, args));
    }

    fn errorf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.record(Severity::Error, ctx, Message::Template(template, args));
    }

    fn fatalf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.record(Severity::Fatal, ctx, Message::Template(template, args));
        self.exit_after_fatal();
    }
}
