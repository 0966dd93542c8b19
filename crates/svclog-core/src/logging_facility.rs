//! Tracing-backed logging facility
//!
//! An alternate backend for the `CustomLogger` delegate that routes calls
//! into `tracing` instead of the engine's tab-separated lines:
//!
//! - Single subscriber initialization point via `init(profile)`
//! - `TracingLogger`, a `Logger` emitting one event per call
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use svclog_core::delegate::CustomLogger;
//! use svclog_core::logging_facility::{init, Profile, TracingLogger};
//!
//! init(Profile::Development);
//!
//! let mut logs = CustomLogger::new();
//! logs.set_logger(Arc::new(TracingLogger::new("b846c7ab")));
//! ```

pub mod init;
pub mod test_capture;
pub mod tracing_logger;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
pub use tracing_logger::TracingLogger;
