//! # Console Reporting Module / 控制台报告模块
//!
//! Colorful, localized run summaries. Console output is presentation only:
//! it is derived from the structured results and never feeds back into the
//! parse or report data path.
//!
//! 彩色的、本地化的运行摘要。控制台输出仅用于展示：
//! 它从结构化结果派生，绝不会反馈到解析或报告数据路径中。

use colored::*;

use crate::core::models::BinaryReport;
use crate::infra::t;

/// Prints a formatted summary of all executed binaries to the console.
/// One row per binary with its verdict, per-status counts and duration.
///
/// 在控制台打印所有已执行可执行文件的格式化摘要。
/// 每个可执行文件一行，包含其判定、各状态计数和耗时。
///
/// # Output Format / 输出格式
/// ```text
/// --- Test Summary ---
///   - PASSED | test_mempool               |  12 passed, 0 failed, 1 ignored |    0.52s
///   - FAILED | test_rbtree                |   7 passed, 2 failed, 0 ignored |    1.10s
/// ```
pub fn print_summary(reports: &[BinaryReport], locale: &str) {
    println!("\n{}", t!("summary.banner", locale = locale).bold());

    for report in reports {
        let status_str = if report.timed_out {
            t!("summary.status_timeout", locale = locale).to_string()
        } else if report.result.binary_failed() {
            t!("summary.status_failed", locale = locale).to_string()
        } else {
            t!("summary.status_passed", locale = locale).to_string()
        };
        let status_colored = if report.result.binary_failed() {
            status_str.red()
        } else {
            status_str.green()
        };

        let counts = t!(
            "summary.counts",
            locale = locale,
            passed = report.result.passed(),
            failed = report.result.failed(),
            ignored = report.result.ignored()
        );

        println!(
            "  - {:<8} | {:<28} | {} | {:>8.2?}",
            status_colored, report.binary_name, counts, report.duration
        );
    }
}

/// Prints detailed information about every failed binary: each FAIL outcome
/// with its diagnostic message, plus anything the binary wrote to stderr.
/// Returns early when there is nothing to show.
///
/// 打印每个失败可执行文件的详细信息：每个 FAIL 结果及其诊断消息，
/// 以及可执行文件写入 stderr 的任何内容。
/// 没有可显示内容时提前返回。
pub fn print_failure_details(reports: &[BinaryReport], locale: &str) {
    let failed: Vec<_> = reports.iter().filter(|r| r.result.binary_failed()).collect();
    if failed.is_empty() {
        return;
    }

    println!("\n{}", t!("failure.banner", locale = locale).red().bold());
    println!("{}", "-".repeat(80));

    for (i, report) in failed.iter().enumerate() {
        println!(
            "[{}/{}] {} '{}'",
            i + 1,
            failed.len(),
            t!("failure.header", locale = locale).red(),
            report.binary_name.cyan()
        );

        for outcome in report.result.outcomes() {
            if outcome.status != crate::core::models::TestStatus::Failed {
                continue;
            }
            println!(
                "  {} {}::{}",
                "FAIL".red(),
                outcome.fixture_name,
                outcome.test_name
            );
            if let Some(message) = &outcome.failure_message {
                if !message.is_empty() {
                    for line in message.lines() {
                        println!("      {}", line);
                    }
                }
            }
        }

        if report.result.failed() == 0 {
            // Failed at the process level only: non-zero exit, stderr
            // output, or a timeout.
            println!("  {}", t!("failure.process_level", locale = locale).yellow());
        }

        if !report.stderr.trim().is_empty() {
            println!("\n--- {} ---", t!("failure.stderr_banner", locale = locale).yellow());
            println!("{}", report.stderr.trim_end());
        }
        println!("{}", "-".repeat(80));
    }
}
