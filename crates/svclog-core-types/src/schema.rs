//! Canonical constants shared by the engine, its alternates and log consumers

/// Context key under which a correlation id may be bound in a `CallContext`
pub const CTX_KEY_CORRELATION_ID: &str = "process-uuid";

// Display tags, indexed by raw severity value
pub const TAG_DEBUG: &str = "DBG";
pub const TAG_WARN: &str = "WRN";
pub const TAG_ERROR: &str = "ERR";
pub const TAG_FATAL: &str = "FTL";
pub const TAG_INFO: &str = "INF";

/// Field separator between timestamp, tag, id and message
pub const FIELD_SEPARATOR: char = '\t';

/// Width of a rendered timestamp, `YYYY/MM/DD HH:MM:SS.mmm`
pub const TIMESTAMP_WIDTH: usize = 23;

// Lifecycle line suffixes, appended to the process title
pub const LIFECYCLE_STARTING: &str = "service is starting...";
pub const LIFECYCLE_STOPPING: &str = "service is stopping...";

// Structured field keys used by the tracing-backed logger
pub const FIELD_CORRELATION_ID: &str = "correlation_id";
pub const FIELD_SEVERITY: &str = "severity";
