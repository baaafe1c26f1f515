//! # Output Parser Module / 输出解析器模块
//!
//! This module turns the raw text captured from a Unity test binary into a
//! structured [`RunResult`]. The grammar is a first-class artifact: a
//! tagged-line classifier recognizes fixture headers and result lines, and a
//! small state machine stitches failure diagnostics onto the FAIL result that
//! produced them. Anything the classifier does not recognize is treated as
//! log noise and never affects surrounding results.
//!
//! 此模块将从 Unity 测试可执行文件捕获的原始文本转换为结构化的
//! [`RunResult`]。语法是一等公民：带标签的行分类器识别 fixture 头和
//! 结果行，一个小型状态机将失败诊断附加到产生它们的 FAIL 结果上。
//! 分类器无法识别的内容被视为日志噪声，绝不影响周围的结果。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::{FixtureMode, RunResult, TestOutcome, TestStatus};

/// `FIXTURE: <name>` — announces entry into a named test group.
/// `FIXTURE: <name>` —— 宣告进入一个命名的测试分组。
static FIXTURE_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^FIXTURE:\s*(\S.*?)\s*$").expect("fixture header regex"));

/// `TEST(<fixture>, <name>): <STATUS>` with an optional ` (<n> ms)` suffix.
/// `TEST(<fixture>, <name>): <STATUS>`，带可选的 ` (<n> ms)` 后缀。
static RESULT_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^TEST\(\s*([^,()]*?)\s*,\s*([^()]*?)\s*\)\s*:\s*([A-Z]+)(?:\s*\(\s*([^()]*?)\s*ms\s*\))?\s*$")
        .expect("result line regex")
});

/// What the classifier recognized on a single line of the stream.
/// 分类器在流的单行上识别出的内容。
#[derive(Debug, Clone, PartialEq)]
enum LineKind<'a> {
    /// A fixture header; subsequent results belong to this group.
    FixtureHeader(&'a str),
    /// One test's result line.
    Result {
        fixture: &'a str,
        test: &'a str,
        status: TestStatus,
        duration_ms: Option<f64>,
    },
    /// Not part of the protocol. Noise while awaiting, message text while a
    /// failure is being accumulated.
    Unrecognized,
}

/// Classifies one line under the given grammar. Unknown status tokens make
/// the whole line unrecognized rather than a malformed result.
/// 在给定语法下对一行进行分类。未知的状态标记会使整行被视为
/// 无法识别，而不是畸形的结果。
fn classify<'a>(mode: FixtureMode, line: &'a str) -> LineKind<'a> {
    match mode {
        FixtureMode::UnityFixtureVerbose => classify_unity_fixture_verbose(line),
    }
}

fn classify_unity_fixture_verbose(line: &str) -> LineKind<'_> {
    if let Some(caps) = RESULT_LINE_RE.captures(line) {
        let status = match caps.get(3).map(|m| m.as_str()) {
            Some("PASS") => TestStatus::Passed,
            Some("FAIL") | Some("FAILED") => TestStatus::Failed,
            Some("IGNORE") | Some("IGNORED") => TestStatus::Ignored,
            _ => return LineKind::Unrecognized,
        };
        return LineKind::Result {
            fixture: caps.get(1).map_or("", |m| m.as_str()),
            test: caps.get(2).map_or("", |m| m.as_str()),
            status,
            duration_ms: caps.get(4).and_then(|m| parse_duration_ms(m.as_str())),
        };
    }
    if let Some(caps) = FIXTURE_HEADER_RE.captures(line) {
        return LineKind::FixtureHeader(caps.get(1).map_or("", |m| m.as_str()));
    }
    LineKind::Unrecognized
}

/// Malformed duration text degrades to "absent" instead of failing the line.
/// 畸形的耗时文本降级为“缺失”，而不是使该行解析失败。
fn parse_duration_ms(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|ms| ms.is_finite() && *ms >= 0.0)
}

/// Parser state: either ready for the next protocol line, or collecting the
/// continuation lines that form the previous FAIL outcome's message.
/// 解析器状态：要么准备好处理下一条协议行，要么在收集构成
/// 上一个 FAIL 结果消息的续行。
#[derive(Debug)]
enum ParserState {
    Awaiting,
    AccumulatingFailureMessage(Vec<String>),
}

/// Parses a captured output stream into a [`RunResult`].
///
/// A single forward pass over the lines. Noise lines are skipped, duplicate
/// `(fixture, test)` pairs are preserved in order, and a pending failure
/// message is finalized both on the next recognized protocol line and at end
/// of stream, so the final test of a run never loses its diagnostic.
///
/// The function performs no I/O and never fails: a stream with no
/// recognizable lines simply yields an empty result.
///
/// 将捕获的输出流解析为 [`RunResult`]。
///
/// 对所有行进行单次正向遍历。噪声行被跳过，重复的
/// `(fixture, test)` 对按顺序保留，待定的失败消息在下一条被识别的
/// 协议行处和流结束时都会被最终确定，因此运行的最后一个测试
/// 永远不会丢失其诊断信息。
///
/// 该函数不执行任何 I/O 且永不失败：
/// 没有可识别行的流只会产生一个空结果。
pub fn parse(text: &str, mode: FixtureMode) -> RunResult {
    let mut outcomes: Vec<TestOutcome> = Vec::new();
    let mut state = ParserState::Awaiting;
    // Tracked for grammar completeness; result lines carry their own fixture
    // name, which takes precedence when both are present.
    let mut current_fixture = String::new();

    for line in text.lines() {
        match classify(mode, line) {
            LineKind::Result {
                fixture,
                test,
                status,
                duration_ms,
            } => {
                finalize_pending(&mut state, &mut outcomes);
                let fixture = if fixture.is_empty() {
                    current_fixture.as_str()
                } else {
                    fixture
                };
                let outcome = match status {
                    TestStatus::Passed => TestOutcome::passed(fixture, test, duration_ms),
                    TestStatus::Failed => TestOutcome::failed(fixture, test, duration_ms),
                    TestStatus::Ignored => TestOutcome::ignored(fixture, test, duration_ms),
                };
                outcomes.push(outcome);
                if status == TestStatus::Failed {
                    state = ParserState::AccumulatingFailureMessage(Vec::new());
                }
            }
            LineKind::FixtureHeader(name) => {
                finalize_pending(&mut state, &mut outcomes);
                current_fixture = name.to_string();
            }
            LineKind::Unrecognized => {
                if let ParserState::AccumulatingFailureMessage(lines) = &mut state {
                    lines.push(line.trim().to_string());
                }
            }
        }
    }

    finalize_pending(&mut state, &mut outcomes);
    RunResult::from_outcomes(outcomes)
}

/// Attaches the accumulated continuation text to the FAIL outcome that opened
/// it and returns the state machine to `Awaiting`.
/// 将累积的续行文本附加到打开它的 FAIL 结果上，
/// 并将状态机返回到 `Awaiting`。
fn finalize_pending(state: &mut ParserState, outcomes: &mut [TestOutcome]) {
    if let ParserState::AccumulatingFailureMessage(lines) =
        std::mem::replace(state, ParserState::Awaiting)
    {
        let message = lines.join("\n").trim().to_string();
        if let Some(last) = outcomes.last_mut() {
            if last.status == TestStatus::Failed {
                last.failure_message = Some(message);
            }
        }
    }
}
