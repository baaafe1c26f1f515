//! # JUnit Reporting Module / JUnit 报告模块
//!
//! Maps a [`RunResult`] onto the JUnit XML schema: one `<testsuite>` per
//! binary, one `<testcase>` per outcome, `<failure>` carrying the diagnostic
//! text, `<skipped/>` for ignored tests. Serialization is deterministic —
//! no timestamps, no UUIDs — so the same result always produces
//! byte-identical XML, which CI can diff across runs.
//!
//! 将 [`RunResult`] 映射到 JUnit XML 模式：每个可执行文件一个
//! `<testsuite>`，每个结果一个 `<testcase>`，`<failure>` 携带诊断文本，
//! 被忽略的测试使用 `<skipped/>`。序列化是确定性的——没有时间戳，
//! 没有 UUID——因此相同的结果总是产生字节相同的 XML，便于 CI 跨运行比较。

use anyhow::{Context, Result};
use quick_junit::{NonSuccessKind, Report, TestCase, TestCaseStatus, TestSuite};
use std::fs::File;
use std::path::Path;

use crate::core::models::{RunResult, TestStatus};

/// Builds the JUnit document for one binary's run.
///
/// The suite name is the caller-supplied logical test name, never derived
/// from the stream content. Outcomes keep their stream order; the fixture
/// name becomes the testcase's classname.
///
/// 为一个可执行文件的运行构建 JUnit 文档。
///
/// 套件名称是调用者提供的逻辑测试名称，绝不从流内容派生。
/// 结果保持流中的顺序；fixture 名称成为 testcase 的 classname。
pub fn build_report(run_name: &str, result: &RunResult) -> Report {
    let mut suite = TestSuite::new(run_name);

    for outcome in result.outcomes() {
        let status = match outcome.status {
            TestStatus::Passed => TestCaseStatus::success(),
            TestStatus::Failed => {
                let mut status = TestCaseStatus::non_success(NonSuccessKind::Failure);
                if let Some(message) = &outcome.failure_message {
                    status.set_message(message.clone());
                    status.set_description(message.clone());
                }
                status
            }
            TestStatus::Ignored => TestCaseStatus::skipped(),
        };

        let mut testcase = TestCase::new(&outcome.test_name, status);
        testcase.set_classname(&outcome.fixture_name);
        if let Some(duration) = outcome.duration() {
            testcase.set_time(duration);
        }
        suite.add_test_case(testcase);
    }

    suite.set_time(result.total_duration());

    let mut report = Report::new(run_name);
    report.add_test_suite(suite);
    report
}

/// Serializes a report to its XML byte representation.
/// 将报告序列化为其 XML 字节表示。
pub fn serialize_report(report: &Report) -> Result<Vec<u8>> {
    let mut buf: Vec<u8> = Vec::new();
    report
        .serialize(&mut buf)
        .context("Failed to serialize JUnit report")?;
    Ok(buf)
}

/// Writes a report to `path`.
///
/// A failure here is an I/O problem with the report sink, not a test
/// failure; callers keep it separate from the run verdict so that one
/// unwritable report never suppresses the others.
///
/// 将报告写入 `path`。
///
/// 此处的失败是报告写入目标的 I/O 问题，而不是测试失败；
/// 调用者将其与运行判定分开，使一个无法写入的报告永远不会
/// 抑制其他报告。
pub fn write_report(report: &Report, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    report
        .serialize(file)
        .with_context(|| format!("Failed to write JUnit report to: {}", path.display()))?;
    Ok(())
}
