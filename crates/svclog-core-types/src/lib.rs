//! Core types shared across svclog crates
//!
//! - **Correlation types**: CorrelationId, CallContext
//! - **Schema constants**: carrier key, severity tags, lifecycle templates

pub mod correlation;
pub mod schema;

pub use correlation::{CallContext, CorrelationId};
