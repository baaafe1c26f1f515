//! # Run Command Module / 运行命令模块
//!
//! This module implements the `run` command of the Unity Reporter CLI:
//! discover the test binaries recorded in a build tree, execute them in
//! parallel, parse each captured output stream, write one JUnit report per
//! binary, and fold everything into the run's aggregate verdict.
//!
//! 此模块实现了 Unity Reporter CLI 的 `run` 命令：
//! 发现构建树中记录的测试可执行文件，并行执行它们，解析每个捕获的
//! 输出流，为每个可执行文件写入一个 JUnit 报告，并将所有内容汇总为
//! 本次运行的聚合判定。

use anyhow::{Context, Result};
use colored::*;
use futures::{stream, StreamExt};
use std::{fs, path::PathBuf, time::Duration};
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        config,
        execution::{interpret_run, run_test_binary},
        models::{BinaryReport, FixtureMode, RunResult, TestBinary},
    },
    infra::{self, t},
    reporting::{
        console::{print_failure_details, print_summary},
        junit::{build_report, write_report},
    },
};

/// Executes the run command with the provided arguments.
///
/// # Arguments
/// * `build_dir` - The build directory holding the test executable records
/// * `build_config` - Optional multi-config subdirectory (e.g. "Release")
/// * `config_path` - Path to the optional `UnityReporter.toml`
/// * `output_dir` - Where report files are written (defaults to `build_dir`)
/// * `jobs` - Number of binaries to run concurrently
/// * `timeout_secs` - Optional per-binary timeout
///
/// # Returns
/// `Ok(())` when every binary passed and every report was written; an error
/// otherwise, so the process exits non-zero.
pub async fn execute(
    build_dir: PathBuf,
    build_config: Option<String>,
    config_path: PathBuf,
    output_dir: Option<PathBuf>,
    jobs: Option<usize>,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let config = config::load_config(&config_path)?;
    // A language set in the config file wins over the CLI/system default.
    if let Some(lang) = &config.language {
        rust_i18n::set_locale(lang);
    }
    let locale = rust_i18n::locale().to_string();

    let build_dir = infra::fs::absolute_path(&build_dir)?;
    println!(
        "{}",
        t!("run.build_dir_detected", locale = &locale, path = build_dir.display())
    );

    let binaries = infra::fs::discover_test_binaries(&build_dir, build_config.as_deref())?;
    if binaries.is_empty() {
        println!("{}", t!("run.no_binaries_found", locale = &locale).yellow());
        return Ok(());
    }
    println!(
        "{}",
        t!("run.discovered_binaries", locale = &locale, count = binaries.len()).cyan()
    );

    let output_dir = output_dir
        .or(config.output_dir.clone())
        .unwrap_or_else(|| build_dir.clone());
    fs::create_dir_all(&output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let stop_token = setup_signal_handler(&locale);
    let jobs = jobs.or(config.jobs).unwrap_or(num_cpus::get() / 2 + 1);
    let timeout = timeout_secs.or(config.timeout_secs).map(Duration::from_secs);

    let mut reports = run_binaries(
        binaries,
        jobs,
        timeout,
        config.fixture_mode,
        &output_dir,
        stop_token,
        &locale,
    )
    .await;

    // The discovery order is deterministic; restore it after the unordered
    // parallel collection so summaries are stable across runs.
    reports.sort_by(|a, b| a.binary_name.cmp(&b.binary_name));

    print_summary(&reports, &locale);
    print_failure_details(&reports, &locale);

    // Single reducer step over all binaries: a logical OR with no
    // short-circuiting, every binary was parsed and reported above.
    let any_failed = reports.iter().any(|r| r.result.binary_failed());
    let write_errors: Vec<&String> = reports.iter().filter_map(|r| r.write_error.as_ref()).collect();

    for error in &write_errors {
        eprintln!("{} {}", t!("run.report_write_failed_banner", locale = &locale).red(), error);
    }
    if !write_errors.is_empty() {
        anyhow::bail!(t!("run.report_errors", locale = &locale));
    }
    if any_failed {
        anyhow::bail!(t!("run.run_failed", locale = &locale));
    }

    println!("\n{}", t!("run.all_passed", locale = &locale).green().bold());
    Ok(())
}

/// Sets up a signal handler for graceful shutdown.
fn setup_signal_handler(locale: &str) -> CancellationToken {
    let token = CancellationToken::new();
    let token_clone = token.clone();
    let locale = locale.to_string();

    tokio::spawn(async move {
        if signal::ctrl_c().await.is_ok() {
            println!("\n{}", t!("run.shutdown_signal", locale = &locale).yellow());
            token_clone.cancel();
        }
    });

    token
}

/// Runs all binaries on a bounded parallel stream. Each task owns its
/// capture, its parse and its report file; nothing is shared between tasks.
/// 在有界并行流上运行所有可执行文件。每个任务拥有自己的捕获、
/// 解析和报告文件；任务之间不共享任何内容。
async fn run_binaries(
    binaries: Vec<TestBinary>,
    jobs: usize,
    timeout: Option<Duration>,
    mode: FixtureMode,
    output_dir: &std::path::Path,
    stop_token: CancellationToken,
    locale: &str,
) -> Vec<BinaryReport> {
    let results = stream::iter(binaries.into_iter().map(|binary| {
        let stop_token = stop_token.clone();
        let output_dir = output_dir.to_path_buf();
        let locale = locale.to_string();

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = stop_token.cancelled() => {
                    println!(
                        "{}",
                        t!("run.binary_cancelled", locale = &locale, name = &binary.name).yellow()
                    );
                    cancelled_report(&binary)
                }
                captured = run_test_binary(&binary, timeout) => {
                    match captured {
                        Ok(captured) => {
                            let result = interpret_run(&captured, mode);
                            report_binary(&binary, result, &captured, &output_dir, &locale)
                        }
                        Err(e) => spawn_failure_report(&binary, e, &locale),
                    }
                }
            }
        })
    }))
    .buffer_unordered(jobs)
    .collect::<Vec<Result<BinaryReport, tokio::task::JoinError>>>()
    .await;

    results
        .into_iter()
        .map(|res| match res {
            Ok(report) => report,
            Err(e) => BinaryReport {
                binary_name: "unknown".to_string(),
                result: RunResult::default().with_process_failure(true),
                duration: Duration::default(),
                timed_out: false,
                stderr: format!("Critical error during binary execution: {}", e),
                write_error: None,
            },
        })
        .collect()
}

/// Writes the JUnit report for one finished binary and assembles its record.
/// A report-writing failure is captured in the record instead of aborting,
/// so the remaining binaries still get their reports.
/// 为一个已完成的可执行文件写入 JUnit 报告并组装其记录。
/// 报告写入失败被记录在案而不是中止，其余可执行文件仍会得到报告。
fn report_binary(
    binary: &TestBinary,
    result: RunResult,
    captured: &crate::core::models::CapturedRun,
    output_dir: &std::path::Path,
    locale: &str,
) -> BinaryReport {
    if result.binary_failed() {
        println!(
            "{}",
            t!(
                "run.binary_failed",
                locale = locale,
                name = &binary.name,
                duration = format!("{:.2?}", captured.duration)
            )
            .red()
        );
    } else {
        println!(
            "{}",
            t!(
                "run.binary_passed",
                locale = locale,
                name = &binary.name,
                duration = format!("{:.2?}", captured.duration)
            )
            .green()
        );
    }

    let report = build_report(&binary.name, &result);
    let path = infra::fs::report_path(output_dir, &binary.name);
    let write_error = match write_report(&report, &path) {
        Ok(()) => {
            println!(
                "{}",
                t!("run.report_written", locale = locale, path = path.display())
            );
            None
        }
        Err(e) => Some(format!("{:#}", e)),
    };

    BinaryReport {
        binary_name: binary.name.clone(),
        result,
        duration: captured.duration,
        timed_out: captured.timed_out,
        stderr: captured.stderr.clone(),
        write_error,
    }
}

/// The record for a binary that was cancelled before or during execution.
/// An interrupted run must never report success.
/// 在执行之前或期间被取消的可执行文件的记录。
/// 被中断的运行绝不能报告成功。
fn cancelled_report(binary: &TestBinary) -> BinaryReport {
    BinaryReport {
        binary_name: binary.name.clone(),
        result: RunResult::default().with_process_failure(true),
        duration: Duration::default(),
        timed_out: false,
        stderr: String::new(),
        write_error: None,
    }
}

/// The record for a binary whose process could not be observed at all,
/// e.g. a pointer file naming a missing executable.
/// 完全无法观察其进程的可执行文件的记录，
/// 例如指针文件指向一个不存在的可执行文件。
fn spawn_failure_report(binary: &TestBinary, error: anyhow::Error, locale: &str) -> BinaryReport {
    println!(
        "{}",
        t!("run.binary_spawn_failed", locale = locale, name = &binary.name).red()
    );
    BinaryReport {
        binary_name: binary.name.clone(),
        result: RunResult::default().with_process_failure(true),
        duration: Duration::default(),
        timed_out: false,
        stderr: format!("{:#}", error),
        write_error: None,
    }
}
