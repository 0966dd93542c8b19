//! The logger capability: ten entry points, five severities in plain and
//! formatted form, each taking an optional correlation carrier.
//!
//! Implemented by the `Logging` engine, by the process-wide `DefaultLogger`,
//! by the `CustomLogger` delegate and by any alternate backend a caller wants
//! to plug in behind the delegate.

use std::fmt::Display;

use svclog_core_types::CallContext;

/// Operands of a plain call, concatenated with no separator
pub type Args<'a> = &'a [&'a dyn Display];

/// Leveled logger with optional per-call correlation carrier
///
/// Plain entry points concatenate `args`. Formatted entry points substitute
/// `args` into `template`; with no `args` the template is printed verbatim.
///
/// `fatal` and `fatalf` apply the implementation's own termination policy.
pub trait Logger: Send + Sync {
    fn debug(&self, ctx: Option<&CallContext>, args: Args<'_>);
    fn info(&self, ctx: Option<&CallContext>, args: Args<'_>);
    fn warn(&self, ctx: Option<&CallContext>, args: Args<'_>);
    fn error(&self, ctx: Option<&CallContext>, args: Args<'_>);
    fn fatal(&self, ctx: Option<&CallContext>, args: Args<'_>);

    fn debugf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>);
    fn infof(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>);
    fn warnf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>);
    fn errorf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>);
    fn fatalf(&self, ctx: Option<&CallContext>, template: &str, args: Args<'_>);
}
