//! # Data Models Module / 数据模型模块
//!
//! This module defines the core data structures used throughout the reporter.
//! It includes the outcome of a single test case, the aggregate result of one
//! test binary's run, and the grammar selector for the output parser.
//!
//! 此模块定义了整个报告器中使用的核心数据结构。
//! 它包括单个测试用例的结果、一个测试可执行文件运行的聚合结果，
//! 以及输出解析器的语法选择器。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// The status a test binary reports for a single test case.
/// 测试可执行文件为单个测试用例报告的状态。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum TestStatus {
    /// The test case passed.
    /// 测试用例通过。
    Passed,
    /// The test case failed; a diagnostic message may follow in the stream.
    /// 测试用例失败；流中可能跟随诊断消息。
    Failed,
    /// The test case was ignored/skipped by the test binary itself.
    /// 测试用例被测试可执行文件自身忽略/跳过。
    Ignored,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Passed => write!(f, "PASS"),
            TestStatus::Failed => write!(f, "FAIL"),
            TestStatus::Ignored => write!(f, "IGNORE"),
        }
    }
}

/// Selects which line grammar the output parser applies to a captured stream.
/// Only the verbose, fixture-grouped Unity grammar is implemented today; the
/// enum is the extension point for sibling grammars.
///
/// 选择输出解析器应用于捕获流的行语法。
/// 目前只实现了详细的、按 fixture 分组的 Unity 语法；
/// 此枚举是未来兄弟语法的扩展点。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FixtureMode {
    /// The `UNITY_FIXTURE_VERBOSE` grammar: `FIXTURE:` headers and
    /// `TEST(<fixture>, <name>): <STATUS>` result lines.
    /// `UNITY_FIXTURE_VERBOSE` 语法：`FIXTURE:` 头和
    /// `TEST(<fixture>, <name>): <STATUS>` 结果行。
    #[default]
    UnityFixtureVerbose,
}

/// One reported test case, as recovered from the captured output stream.
///
/// Invariant: `failure_message` is `Some` if and only if `status` is
/// [`TestStatus::Failed`]. The constructors below uphold this; prefer them
/// over struct literals.
///
/// 从捕获的输出流中恢复的一个测试用例结果。
///
/// 不变量：当且仅当 `status` 为 [`TestStatus::Failed`] 时，
/// `failure_message` 为 `Some`。下面的构造函数保证这一点；请优先使用它们。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    /// The fixture (group) the test case belongs to.
    /// 测试用例所属的 fixture（分组）。
    pub fixture_name: String,
    /// The test case name, unique within its fixture for a well-behaved run.
    /// 测试用例名称，在一次正常运行中在其 fixture 内唯一。
    pub test_name: String,
    /// The reported status.
    /// 报告的状态。
    pub status: TestStatus,
    /// Wall-clock duration in milliseconds, if the stream reported one.
    /// 以毫秒为单位的耗时（如果流中报告了的话）。
    pub duration_ms: Option<f64>,
    /// The accumulated diagnostic text for a failed test.
    /// 失败测试的累积诊断文本。
    pub failure_message: Option<String>,
}

impl TestOutcome {
    /// Creates a passed outcome.
    pub fn passed(
        fixture: impl Into<String>,
        test: impl Into<String>,
        duration_ms: Option<f64>,
    ) -> Self {
        Self {
            fixture_name: fixture.into(),
            test_name: test.into(),
            status: TestStatus::Passed,
            duration_ms,
            failure_message: None,
        }
    }

    /// Creates a failed outcome. The message starts out empty and is filled
    /// in by the parser once the continuation lines are known.
    pub fn failed(
        fixture: impl Into<String>,
        test: impl Into<String>,
        duration_ms: Option<f64>,
    ) -> Self {
        Self {
            fixture_name: fixture.into(),
            test_name: test.into(),
            status: TestStatus::Failed,
            duration_ms,
            failure_message: Some(String::new()),
        }
    }

    /// Creates an ignored outcome.
    pub fn ignored(
        fixture: impl Into<String>,
        test: impl Into<String>,
        duration_ms: Option<f64>,
    ) -> Self {
        Self {
            fixture_name: fixture.into(),
            test_name: test.into(),
            status: TestStatus::Ignored,
            duration_ms,
            failure_message: None,
        }
    }

    /// The duration as a [`Duration`], if the stream reported one.
    /// 以 [`Duration`] 表示的耗时（如果流中报告了的话）。
    pub fn duration(&self) -> Option<Duration> {
        self.duration_ms.map(|ms| Duration::from_secs_f64(ms / 1000.0))
    }
}

/// The aggregate result of one test binary's run.
///
/// The outcome sequence preserves the order of result lines in the captured
/// stream, duplicates included. Counts are derived from the sequence so they
/// can never drift out of sync with it. The value is immutable once the
/// parser returns it; process-level failure information is merged in by
/// consuming the value, not by mutating it in place.
///
/// 一个测试可执行文件运行的聚合结果。
///
/// 结果序列保留捕获流中结果行的顺序，包括重复项。
/// 计数从序列派生，因此永远不会与序列不同步。
/// 解析器返回后该值不可变；进程级失败信息通过消耗该值合并，
/// 而不是原地修改。
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunResult {
    outcomes: Vec<TestOutcome>,
    process_failed: bool,
}

impl RunResult {
    /// Creates a result from an ordered outcome sequence, with no
    /// process-level failure recorded yet.
    pub fn from_outcomes(outcomes: Vec<TestOutcome>) -> Self {
        Self {
            outcomes,
            process_failed: false,
        }
    }

    /// The ordered outcome sequence.
    /// 有序的结果序列。
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    /// Total number of reported test cases.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of passed test cases.
    pub fn passed(&self) -> usize {
        self.count(TestStatus::Passed)
    }

    /// Number of failed test cases.
    pub fn failed(&self) -> usize {
        self.count(TestStatus::Failed)
    }

    /// Number of ignored test cases.
    pub fn ignored(&self) -> usize {
        self.count(TestStatus::Ignored)
    }

    fn count(&self, status: TestStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    /// Sum of the reported per-test durations. Tests without timing
    /// information contribute nothing.
    /// 报告的单测耗时之和。没有计时信息的测试不计入。
    pub fn total_duration(&self) -> Duration {
        self.outcomes.iter().filter_map(TestOutcome::duration).sum()
    }

    /// Merges the orchestrator's process-level verdict into this result.
    /// `process_failed` is true when the binary exited non-zero or wrote to
    /// its error stream; it is OR-ed with any previously merged value.
    ///
    /// 将编排器的进程级判定合并到此结果中。
    /// 当可执行文件以非零状态退出或向错误流写入内容时，
    /// `process_failed` 为 true；它与之前合并的值进行或运算。
    pub fn with_process_failure(mut self, process_failed: bool) -> Self {
        self.process_failed = self.process_failed || process_failed;
        self
    }

    /// Whether the hosting binary is considered failed: the process failed
    /// at the OS level, or any outcome has status FAIL.
    /// 该可执行文件是否被视为失败：进程在操作系统层面失败，
    /// 或任何结果的状态为 FAIL。
    pub fn binary_failed(&self) -> bool {
        self.process_failed || self.outcomes.iter().any(|o| o.status == TestStatus::Failed)
    }
}

/// A test binary discovered in the build tree, ready to be executed.
/// 在构建树中发现的、准备执行的测试可执行文件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestBinary {
    /// The logical test name, derived from the pointer file's stem. Also
    /// names the report file (`test_results_<name>.xml`).
    /// 逻辑测试名称，来自指针文件的主干名。
    /// 报告文件也以它命名（`test_results_<name>.xml`）。
    pub name: String,
    /// The resolved path of the executable to run.
    /// 要运行的可执行文件的解析路径。
    pub executable: PathBuf,
}

/// Everything the orchestrator records about one executed binary: the parsed
/// result plus the report-writing outcome. This is what the summary and the
/// final verdict are computed from.
/// 编排器为一个已执行的可执行文件记录的全部内容：解析出的结果
/// 以及报告写入的结果。摘要和最终判定都由它计算。
#[derive(Debug)]
pub struct BinaryReport {
    /// The binary's logical test name.
    /// 可执行文件的逻辑测试名称。
    pub binary_name: String,
    /// The parsed run result with the process-level verdict merged in.
    /// 合并了进程级判定的解析结果。
    pub result: RunResult,
    /// Wall-clock time spent running the binary.
    /// 运行可执行文件所花费的真实时间。
    pub duration: Duration,
    /// Whether the run was aborted by the configured timeout.
    /// 运行是否被配置的超时中止。
    pub timed_out: bool,
    /// What the binary wrote to stderr, kept for failure diagnostics.
    /// 可执行文件写入 stderr 的内容，保留用于失败诊断。
    pub stderr: String,
    /// The error message if the report file could not be produced. Kept
    /// separate from the test verdict: an unwritable report is an I/O
    /// problem, not a test failure.
    /// 如果报告文件无法生成，此处为错误消息。与测试判定分开：
    /// 无法写入的报告是 I/O 问题，而不是测试失败。
    pub write_error: Option<String>,
}

/// The raw material captured from one executed test binary, before parsing.
/// 从一个已执行的测试可执行文件捕获的原始材料（解析前）。
#[derive(Debug, Clone)]
pub struct CapturedRun {
    /// Everything the binary wrote to standard output.
    /// 可执行文件写入标准输出的全部内容。
    pub stdout: String,
    /// Everything the binary wrote to standard error.
    /// 可执行文件写入标准错误的全部内容。
    pub stderr: String,
    /// Whether the process exited with a zero status.
    /// 进程是否以零状态退出。
    pub exit_success: bool,
    /// Wall-clock time spent running the binary.
    /// 运行可执行文件所花费的真实时间。
    pub duration: Duration,
    /// Whether the run was cut short by the configured timeout.
    /// 运行是否因配置的超时而被中止。
    pub timed_out: bool,
}
