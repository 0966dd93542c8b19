use svclog_core::{EngineConfig, LineBuffer, Logging};
use svclog_core_types::CallContext;

pub const DEFAULT_ID: &str = "b846c7ab-9bc3-4c3a-b9e9-c65ae7bdd049";
pub const CTX_ID: &str = "4577c272-e9b8-4a19-a9d0-4ec0bde6063f";

/// Config with timestamps off and fatal exit suppressed
#[allow(dead_code)]
pub fn test_config(minimum_level: i64) -> EngineConfig {
    EngineConfig {
        correlation_default: DEFAULT_ID.to_string(),
        minimum_level,
        console_mode: false,
        show_timestamp: false,
        suppress_fatal_exit: true,
    }
}

/// Private engine writing into a buffer
#[allow(dead_code)]
pub fn buffered_engine(minimum_level: i64) -> (Logging, LineBuffer) {
    Logging::buffered(test_config(minimum_level))
}

/// Carrier with the test correlation id bound
#[allow(dead_code)]
pub fn bound_ctx() -> CallContext {
    CallContext::background().with_correlation_id(CTX_ID)
}

/// Expected undecorated line for a tag, id and message
#[allow(dead_code)]
pub fn line(tag: &str, id: &str, message: &str) -> String {
    format!("{tag}\t[{id}]\t{message}")
}
