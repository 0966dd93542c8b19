pub mod emit;
pub mod pipe;
pub mod settings;

use std::fmt::Display;

use svclog_core::{Logger, Severity};
use svclog_core_types::CallContext;

/// Route one call to the entry point matching `severity`
///
/// With a template the `f` variant is used and `args` are its operands.
pub(crate) fn dispatch(
    logger: &dyn Logger,
    severity: Severity,
    ctx: Option<&CallContext>,
    template: Option<&str>,
    args: &[&dyn Display],
) {
    match (severity, template) {
        (Severity::Debug, None) => logger.debug(ctx, args),
        (Severity::Info, None) => logger.info(ctx, args),
        (Severity::Warn, None) => logger.warn(ctx, args),
        (Severity::Error, None) => logger.error(ctx, args),
        (Severity::Fatal, None) => logger.fatal(ctx, args),
        (Severity::Debug, Some(t)) => logger.debugf(ctx, t, args),
        (Severity::Info, Some(t)) => logger.infof(ctx, t, args),
        (Severity::Warn, Some(t)) => logger.warnf(ctx, t, args),
        (Severity::Error, Some(t)) => logger.errorf(ctx, t, args),
        (Severity::Fatal, Some(t)) => logger.fatalf(ctx, t, args),
    }
}

/// Carrier bound to `id`, if one was given
pub(crate) fn carrier(id: Option<&str>) -> Option<CallContext> {
    id.map(|id| CallContext::background().with_correlation_id(id))
}
