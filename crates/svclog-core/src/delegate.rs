//! Delegate wrapper for swapping in an alternate logger
//!
//! `CustomLogger` forwards every entry point verbatim to its alternate when
//! one is set, and to the process-wide default engine otherwise. It performs
//! no argument transformation and does not enforce termination on fatal
//! calls; that is the target's policy.

use std::sync::Arc;

use svclog_core_types::CallContext;

use crate::global::DefaultLogger;
use crate::logger::{Args, Logger};

#[derive(Clone, Default)]
pub struct CustomLogger {
    logger: Option<Arc<dyn Logger>>,
}

impl std::fmt::Debug for CustomLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomLogger")
            .field("has_alternate", &self.logger.is_some())
            .finish()
    }
}

impl CustomLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alternate; replaces any previous one
    pub fn set_logger(&mut self, logger: Arc<dyn Logger>) {
        self.logger = Some(logger);
    }

    /// Go back to forwarding to the process-wide engine
    pub fn clear_logger(&mut self) {
        self.logger = None;
    }

    pub fn has_logger(&self) -> bool {
        self.logger.is_some()
    }

    fn target(&self) -> &dyn Logger {
        match &self.logger {
            Some(logger) => logger.as_ref(),
            None => &DefaultLogger,
        }
    }
}

impl Logger for CustomLogger {
    fn debug(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.target().debug(ctx, args);
    }

    fn info(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.target().info(ctx, args);
    }

    fn warn(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.target().warn(ctx, args);
    }

    fn error(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.target().error(ctx, args);
    }

    fn fatal(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        self.target().fatal(ctx, args);
    }

    fn debugf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.target().debugf(ctx, template, args);
    }

    fn infof(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.target().infof(ctx, template, args);
    }

    fn warnf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.target().warnf(ctx, template, args);
    }

    fn errorf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.target().errorf(ctx, template, args);
    }

    fn fatalf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        self.target().fatalf(ctx, template, args);
    }
}
