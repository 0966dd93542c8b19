#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use svclog_core::logging_facility::test_capture::init_test_capture;
use svclog_core::logging_facility::TracingLogger;
use svclog_core::{log_errorf, log_info, CustomLogger, Logger};
use svclog_core_types::CallContext;
use tracing::Level;

fn logger() -> TracingLogger {
    TracingLogger::new("default-id").with_exit_on_fatal(false)
}

#[test]
fn test_plain_call_records_message_and_default_id() {
    let capture = init_test_capture();
    let message = "tracing plain unique_1";

    logger().info(None, &[&"tracing plain ", &"unique_1"]);

    let events = capture.with_message(message);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.level, Level::INFO);
    assert_eq!(event.target, "svclog");
    assert_eq!(event.correlation_id.as_deref(), Some("default-id"));
    assert_eq!(event.severity.as_deref(), Some("INF"));
}

#[test]
fn test_carrier_id_is_recorded() {
    let capture = init_test_capture();
    let ctx = CallContext::background().with_correlation_id("4577c272");

    logger().warnf(Some(&ctx), "tracing carrier %s", &[&"unique_2"]);

    let events = capture.with_message("tracing carrier unique_2");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::WARN);
    assert_eq!(events[0].correlation_id.as_deref(), Some("4577c272"));
}

#[test]
fn test_severities_map_to_tracing_levels() {
    let capture = init_test_capture();
    let logs = logger();

    logs.debug(None, &[&"level map unique_3 debug"]);
    logs.error(None, &[&"level map unique_3 error"]);

    assert_eq!(
        capture.with_message("level map unique_3 debug")[0].level,
        Level::DEBUG
    );
    assert_eq!(
        capture.with_message("level map unique_3 error")[0].level,
        Level::ERROR
    );
}

#[test]
fn test_fatal_without_exit_is_flagged() {
    let capture = init_test_capture();

    logger().fatalf(None, "tracing fatal %d", &[&4]);

    let events = capture.with_message("tracing fatal 4");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::ERROR);
    assert_eq!(events[0].severity.as_deref(), Some("FTL"));
    assert_eq!(events[0].fields.get("fatal"), Some(&"true".to_string()));
}

#[test]
fn test_lone_template_is_not_substituted() {
    let capture = init_test_capture();

    logger().errorf(None, "tracing literal %s unique_5", &[]);

    capture.assert_message_logged("tracing literal %s unique_5");
}

#[test]
#[should_panic(expected = "Expected message")]
fn test_assert_message_logged_fails_for_missing_message() {
    let capture = init_test_capture();
    capture.assert_message_logged("nonexistent message truly_unique_999");
}

#[test]
fn test_delegate_routes_to_tracing_backend() {
    let capture = init_test_capture();
    let mut logs = CustomLogger::new();
    logs.set_logger(Arc::new(logger()));

    let ctx = CallContext::background().with_correlation_id("delegated");
    log_info!(logger = &logs, ctx = &ctx; "delegate ", "unique_6");
    log_errorf!(logger = &logs; "delegate %s", "unique_7");

    let info = capture.with_message("delegate unique_6");
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].correlation_id.as_deref(), Some("delegated"));

    let error = capture.with_message("delegate unique_7");
    assert_eq!(error.len(), 1);
    assert_eq!(error[0].correlation_id.as_deref(), Some("default-id"));
}

#[test]
fn test_count_events_by_correlation_id() {
    let capture = init_test_capture();
    let ctx = CallContext::background().with_correlation_id("counted-unique_8");
    let logs = logger();

    logs.info(Some(&ctx), &[&"one"]);
    logs.info(Some(&ctx), &[&"two"]);

    let count = capture.count_events(|e| e.correlation_id.as_deref() == Some("counted-unique_8"));
    assert_eq!(count, 2);
}
