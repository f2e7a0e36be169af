//! Tests for how must-failures surface outside the process.
//!
//! Panic hooks and the global subscriber are process-wide, so the failing
//! side of each test runs in a child copy of this test binary.

use std::io;
use std::process::{Command, Output};

use must::logging::{init_logging, LoggingConfig, LoggingError, PanicFormat};
use predicates::prelude::*;
use predicates::str::contains;

const CHILD_ENV: &str = "MUST_PANIC_HOOK_CHILD";

fn in_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

fn run_child(test_name: &str) -> Output {
    let exe = std::env::current_exe().expect("test binary path");
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .expect("failed to run child test")
}

// ============================================================================
// Child Bodies (no-ops unless spawned by the tests below)
// ============================================================================

#[test]
fn child_v1_failure_without_setup() {
    if in_child() {
        must::v1(Err::<u8, _>(io::Error::other("oh no")));
    }
}

#[test]
fn child_not_zero_failure_with_json_hook() {
    if in_child() {
        init_logging(LoggingConfig::new().with_panic_format(PanicFormat::Json))
            .expect("fresh process has no subscriber");
        must::not_zero(0u8);
    }
}

// ============================================================================
// Panic Hook Tests
// ============================================================================

#[test]
fn test_default_setup_prints_diagnostic() {
    let output = run_child("child_v1_failure_without_setup");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(contains("must::v1::<u8> received error: oh no")
        .and(contains("caused by: oh no"))
        .eval(&stderr));
    assert!(!stderr.contains("Box<dyn Any>"));
}

#[test]
fn test_json_hook_renders_report() {
    let output = run_child("child_not_zero_failure_with_json_hook");
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(contains("\"code\":\"must_panic\"")
        .and(contains("must::not_zero::<u8> received zero value"))
        .and(contains("\"location\""))
        .eval(&stderr));
}

// ============================================================================
// Subscriber Tests
// ============================================================================

#[test]
fn test_second_init_logging_fails() {
    let _ = init_logging(LoggingConfig::default());
    let second = init_logging(LoggingConfig::default());

    assert!(matches!(second, Err(LoggingError::AlreadyInitialized(_))));
    assert!(matches!(
        must::logging::init_default_logging(),
        Err(LoggingError::AlreadyInitialized(_))
    ));
}
