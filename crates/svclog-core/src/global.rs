//! The process-wide default engine
//!
//! Initialized on first use with timestamps on, console mode off, threshold
//! Debug and a fresh UUID as correlation default. It is never torn down.
//!
//! Configuration is expected to be set during startup via [`configure`],
//! before log calls become concurrent. The lock only exists because a shared
//! static must be `Sync`; it does not make continuous reconfiguration under
//! load meaningful.

use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard};

use svclog_core_types::CallContext;

use crate::engine::Logging;
use crate::logger::{Args, Logger};

static LOGS: OnceLock<RwLock<Logging>> = OnceLock::new();

fn instance() -> &'static RwLock<Logging> {
    LOGS.get_or_init(|| RwLock::new(Logging::default()))
}

/// Read access to the shared engine
pub fn logs() -> RwLockReadGuard<'static, Logging> {
    instance().read().unwrap_or_else(PoisonError::into_inner)
}

/// Mutate the shared engine, returning whatever the closure returns
///
/// Logging through the shared engine from inside `f` deadlocks.
///
/// # Example
///
/// ```
/// svclog_core::global::configure(|logs| {
///     logs.config_mut().show_timestamp = false;
///     logs.config_mut().minimum_level = 2;
/// });
/// ```
pub fn configure<R>(f: impl FnOnce(&mut Logging) -> R) -> R {
    let mut guard = instance().write().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}

/// Record the process title and emit the starting line on the shared engine
pub fn starting(title: impl Into<String>) {
    configure(|logs| logs.starting(title));
}

/// Emit the stopping line on the shared engine
pub fn stopping() {
    logs().stopping();
}

/// `Logger` over the shared engine
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn debug(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        logs().debug(ctx, args);
    }

    fn info(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        logs().info(ctx, args);
    }

    fn warn(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        logs().warn(ctx, args);
    }

    fn error(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        logs().error(ctx, args);
    }

    fn fatal(&self, ctx: Option<&CallContext>, args: Args<'_>) {
        logs().fatal(ctx, args);
    }

    fn debugf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        logs().debugf(ctx, template, args);
    }

    fn infof(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        logs().infof(ctx, template, args);
    }

    fn warnf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        logs().warnf(ctx, template, args);
    }

    fn errorf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        logs().errorf(ctx, template, args);
    }

    fn fatalf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>) {
        logs().fatalf(ctx, template, args);
    }
}
