//! # Parser Module Unit Tests / 解析器模块单元测试
//!
//! This module contains unit tests for the output parser: line
//! classification, failure-message accumulation, noise tolerance and the
//! derived counts of the resulting `RunResult`.
//!
//! 此模块包含输出解析器的单元测试：行分类、失败消息累积、
//! 噪声容忍以及结果 `RunResult` 的派生计数。

use unity_reporter::core::models::{FixtureMode, TestStatus};
use unity_reporter::core::parser::parse;

fn parse_lines(lines: &[&str]) -> unity_reporter::core::models::RunResult {
    parse(&lines.join("\n"), FixtureMode::UnityFixtureVerbose)
}

#[test]
fn test_reference_stream() {
    // The canonical mixed stream: one pass with timing, one fail with a
    // one-line diagnostic, one ignore.
    let result = parse_lines(&[
        "FIXTURE: Math",
        "TEST(Math, Add): PASS (1 ms)",
        "TEST(Math, Sub): FAIL",
        "  expected 4 got 5",
        "TEST(Math, Mul): IGNORE",
    ]);

    assert_eq!(result.total(), 3);
    assert_eq!(result.passed(), 1);
    assert_eq!(result.failed(), 1);
    assert_eq!(result.ignored(), 1);
    assert!(result.binary_failed());

    let outcomes = result.outcomes();
    assert_eq!(outcomes[0].test_name, "Add");
    assert_eq!(outcomes[0].fixture_name, "Math");
    assert_eq!(outcomes[0].status, TestStatus::Passed);
    assert_eq!(outcomes[0].duration_ms, Some(1.0));
    assert_eq!(outcomes[0].failure_message, None);

    assert_eq!(outcomes[1].test_name, "Sub");
    assert_eq!(outcomes[1].status, TestStatus::Failed);
    assert_eq!(
        outcomes[1].failure_message.as_deref(),
        Some("expected 4 got 5")
    );

    assert_eq!(outcomes[2].test_name, "Mul");
    assert_eq!(outcomes[2].status, TestStatus::Ignored);
    assert_eq!(outcomes[2].failure_message, None);
}

#[test]
fn test_empty_input() {
    let result = parse("", FixtureMode::UnityFixtureVerbose);
    assert_eq!(result.total(), 0);
    assert_eq!(result.passed(), 0);
    assert_eq!(result.failed(), 0);
    assert_eq!(result.ignored(), 0);
    assert!(!result.binary_failed());
}

#[test]
fn test_counts_partition_outcomes() {
    let result = parse_lines(&[
        "TEST(A, one): PASS",
        "TEST(A, two): FAIL",
        "TEST(B, three): IGNORE",
        "TEST(B, four): PASS (12 ms)",
        "TEST(B, five): FAIL (3 ms)",
    ]);
    assert_eq!(
        result.passed() + result.failed() + result.ignored(),
        result.total()
    );
    assert_eq!(result.total(), result.outcomes().len());
    assert_eq!(result.passed(), 2);
    assert_eq!(result.failed(), 2);
    assert_eq!(result.ignored(), 1);
}

#[test]
fn test_order_preservation() {
    let result = parse_lines(&[
        "TEST(F, c): PASS",
        "TEST(F, a): PASS",
        "TEST(F, b): PASS",
    ]);
    let names: Vec<_> = result.outcomes().iter().map(|o| o.test_name.as_str()).collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn test_trailing_failure_message_at_end_of_stream() {
    // The final FAIL of a run keeps its full diagnostic even though no
    // further protocol line terminates it.
    let result = parse_lines(&[
        "TEST(Net, connect): FAIL",
        "socket refused",
        "retried 3 times",
        "giving up",
    ]);
    assert_eq!(result.total(), 1);
    assert_eq!(
        result.outcomes()[0].failure_message.as_deref(),
        Some("socket refused\nretried 3 times\ngiving up")
    );
}

#[test]
fn test_failure_message_terminated_by_next_result_line() {
    let result = parse_lines(&[
        "TEST(Net, connect): FAIL",
        "socket refused",
        "TEST(Net, send): PASS",
    ]);
    assert_eq!(result.total(), 2);
    assert_eq!(
        result.outcomes()[0].failure_message.as_deref(),
        Some("socket refused")
    );
    assert_eq!(result.outcomes()[1].status, TestStatus::Passed);
}

#[test]
fn test_failure_message_terminated_by_fixture_header() {
    let result = parse_lines(&[
        "TEST(Net, connect): FAIL",
        "socket refused",
        "FIXTURE: Other",
        "this is noise, not message text",
        "TEST(Other, x): PASS",
    ]);
    assert_eq!(result.total(), 2);
    assert_eq!(
        result.outcomes()[0].failure_message.as_deref(),
        Some("socket refused")
    );
}

#[test]
fn test_fail_without_continuation_has_empty_message() {
    let result = parse_lines(&["TEST(A, x): FAIL", "TEST(A, y): PASS"]);
    assert_eq!(result.outcomes()[0].failure_message.as_deref(), Some(""));
}

#[test]
fn test_noise_lines_do_not_alter_outcomes() {
    let clean = parse_lines(&["TEST(A, x): PASS", "TEST(A, y): IGNORE"]);
    let noisy = parse_lines(&[
        "Unity test run 1 of 1",
        "TEST(A, x): PASS",
        "-----------------------",
        "some framework banner",
        "TEST(A, y): IGNORE",
        "2 Tests 0 Failures 1 Ignored",
    ]);
    assert_eq!(clean.outcomes(), noisy.outcomes());
}

#[test]
fn test_duplicate_test_names_are_preserved() {
    // A faulty binary may repeat output; the model does not deduplicate.
    let result = parse_lines(&[
        "TEST(A, same): PASS",
        "TEST(A, same): PASS",
        "TEST(A, same): FAIL",
    ]);
    assert_eq!(result.total(), 3);
    assert_eq!(result.passed(), 2);
    assert_eq!(result.failed(), 1);
}

#[test]
fn test_malformed_duration_degrades_to_absent() {
    let result = parse_lines(&["TEST(A, x): PASS (abc ms)", "TEST(A, y): PASS (-5 ms)"]);
    assert_eq!(result.total(), 2);
    assert_eq!(result.outcomes()[0].duration_ms, None);
    assert_eq!(result.outcomes()[1].duration_ms, None);
}

#[test]
fn test_fractional_duration() {
    let result = parse_lines(&["TEST(A, x): PASS (1.5 ms)"]);
    assert_eq!(result.outcomes()[0].duration_ms, Some(1.5));
}

#[test]
fn test_status_token_synonyms() {
    let result = parse_lines(&[
        "TEST(A, a): FAILED",
        "a message",
        "TEST(A, b): IGNORED",
    ]);
    assert_eq!(result.outcomes()[0].status, TestStatus::Failed);
    assert_eq!(
        result.outcomes()[0].failure_message.as_deref(),
        Some("a message")
    );
    assert_eq!(result.outcomes()[1].status, TestStatus::Ignored);
}

#[test]
fn test_unknown_status_token_is_noise() {
    let result = parse_lines(&["TEST(A, x): BANANA", "TEST(A, y): PASS"]);
    assert_eq!(result.total(), 1);
    assert_eq!(result.outcomes()[0].test_name, "y");
}

#[test]
fn test_fixture_header_supplies_missing_fixture_name() {
    let result = parse_lines(&["FIXTURE: Timers", "TEST(, oneshot): PASS"]);
    assert_eq!(result.outcomes()[0].fixture_name, "Timers");
}

#[test]
fn test_failure_message_invariant() {
    let result = parse_lines(&[
        "TEST(A, p): PASS",
        "TEST(A, f): FAIL",
        "boom",
        "TEST(A, i): IGNORE",
    ]);
    for outcome in result.outcomes() {
        assert_eq!(
            outcome.failure_message.is_some(),
            outcome.status == TestStatus::Failed
        );
    }
}

#[test]
fn test_only_noise_yields_empty_result() {
    let result = parse_lines(&["hello", "world", "FIXTURES ARE GREAT"]);
    assert_eq!(result.total(), 0);
    assert!(!result.binary_failed());
}
