//! Variadic call-site macros over the typed entry points
//!
//! Each severity has a plain macro (`log_debug!`, ...) and a formatted one
//! (`log_debugf!`, ...). An optional `ctx = <&CallContext>;` prefix supplies
//! the correlation carrier; an optional `logger = <Logger>` prefix targets a
//! specific logger instead of the process-wide default.
//!
//! ```
//! use svclog_core::{log_debug, log_infof};
//! use svclog_core_types::CallContext;
//!
//! let ctx = CallContext::background().with_correlation_id("4577c272");
//! let world = "World";
//!
//! log_debug!("Hello", world);
//! log_debug!(ctx = &ctx; "Hello ", world);
//! log_infof!("Hello %s", world);
//! log_infof!(ctx = &ctx; "Hello %s", world);
//! log_infof!(ctx = &ctx; "no substitution for %s here");
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log_plain {
    ($method:ident; logger = $logger:expr, ctx = $ctx:expr; $($arg:expr),+ $(,)?) => {{
        use $crate::logger::Logger as _;
        ($logger).$method(
            ::core::option::Option::Some($ctx),
            &[$(&$arg as &dyn ::core::fmt::Display),+],
        )
    }};
    ($method:ident; logger = $logger:expr; $($arg:expr),+ $(,)?) => {{
        use $crate::logger::Logger as _;
        ($logger).$method(
            ::core::option::Option::None,
            &[$(&$arg as &dyn ::core::fmt::Display),+],
        )
    }};
    ($method:ident; ctx = $ctx:expr; $($arg:expr),+ $(,)?) => {
        $crate::__log_plain!($method; logger = $crate::global::DefaultLogger, ctx = $ctx; $($arg),+)
    };
    ($method:ident; $($arg:expr),+ $(,)?) => {
        $crate::__log_plain!($method; logger = $crate::global::DefaultLogger; $($arg),+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_template {
    ($method:ident; logger = $logger:expr, ctx = $ctx:expr; $template:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::logger::Logger as _;
        ($logger).$method(
            ::core::option::Option::Some($ctx),
            $template,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    }};
    ($method:ident; logger = $logger:expr; $template:expr $(, $arg:expr)* $(,)?) => {{
        use $crate::logger::Logger as _;
        ($logger).$method(
            ::core::option::Option::None,
            $template,
            &[$(&$arg as &dyn ::core::fmt::Display),*],
        )
    }};
    ($method:ident; ctx = $ctx:expr; $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_template!($method; logger = $crate::global::DefaultLogger, ctx = $ctx; $template $(, $arg)*)
    };
    ($method:ident; $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::__log_template!($method; logger = $crate::global::DefaultLogger; $template $(, $arg)*)
    };
}

/// Log at Debug, concatenating the operands
///
/// ```
/// # use svclog_core::log_debug;
/// log_debug!("Hello", "World");
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($tt:tt)+) => { $crate::__log_plain!(debug; $($tt)+) };
}

/// Log at Info, concatenating the operands
#[macro_export]
macro_rules! log_info {
    ($($tt:tt)+) => { $crate::__log_plain!(info; $($tt)+) };
}

/// Log at Warn, concatenating the operands
#[macro_export]
macro_rules! log_warn {
    ($($tt:tt)+) => { $crate::__log_plain!(warn; $($tt)+) };
}

/// Log at Error, concatenating the operands
#[macro_export]
macro_rules! log_error {
    ($($tt:tt)+) => { $crate::__log_plain!(error; $($tt)+) };
}

/// Log at Fatal, concatenating the operands, then apply the target's exit policy
#[macro_export]
macro_rules! log_fatal {
    ($($tt:tt)+) => { $crate::__log_plain!(fatal; $($tt)+) };
}

/// Log at Debug, substituting the operands into a template
///
/// ```
/// # use svclog_core::log_debugf;
/// log_debugf!("Hello %s", "Universe");
/// ```
#[macro_export]
macro_rules! log_debugf {
    ($($tt:tt)+) => { $crate::__log_template!(debugf; $($tt)+) };
}

/// Log at Info, substituting the operands into a template
#[macro_export]
macro_rules! log_infof {
    ($($tt:tt)+) => { $crate::__log_template!(infof; $($tt)+) };
}

/// Log at Warn, substituting the operands into a template
#[macro_export]
macro_rules! log_warnf {
    ($($tt:tt)+) => { $crate::__log_template!(warnf; $($tt)+) };
}

/// Log at Error, substituting the operands into a template
#[macro_export]
macro_rules! log_errorf {
    ($($tt:tt)+) => { $crate::__log_template!(errorf; $($tt)+) };
}

/// Log at Fatal, substituting the operands into a template, then apply the
/// target's exit policy
#[macro_export]
macro_rules! log_fatalf {
    ($($tt:tt)+) => { $crate::__log_template!(fatalf; $($tt)+) };
}
