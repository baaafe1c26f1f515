//! # Binary Execution Module / 可执行文件执行模块
//!
//! This module runs one previously built test binary: it spawns the
//! executable, captures standard output and standard error separately,
//! enforces the optional timeout, and merges the process-level verdict with
//! the parsed outcomes into a final [`RunResult`].
//!
//! 此模块运行一个先前构建的测试可执行文件：派生进程，分别捕获
//! 标准输出和标准错误，执行可选的超时，并将进程级判定与解析出的
//! 结果合并为最终的 [`RunResult`]。

use anyhow::{Context, Result};
use colored::*;
use std::time::{Duration, Instant};

use crate::{
    core::{
        models::{CapturedRun, FixtureMode, RunResult, TestBinary},
        parser,
    },
    infra::{command, t},
};

/// Runs a test binary and captures everything needed to judge it.
///
/// The binary is invoked with `-v` so that Unity emits the verbose,
/// fixture-grouped protocol. On timeout the child is killed and an empty
/// capture with `timed_out` set is returned; deciding what that means is
/// left to [`interpret_run`].
///
/// 运行一个测试可执行文件并捕获判定它所需的一切。
///
/// 以 `-v` 调用可执行文件，使 Unity 发出详细的按 fixture 分组的协议。
/// 超时时子进程被终止，并返回设置了 `timed_out` 的空捕获；
/// 其含义的判定交给 [`interpret_run`]。
pub async fn run_test_binary(binary: &TestBinary, timeout: Option<Duration>) -> Result<CapturedRun> {
    println!("{}", t!("run.running_binary", name = &binary.name).blue());

    let mut cmd = tokio::process::Command::new(&binary.executable);
    cmd.arg("-v").kill_on_drop(true);

    let start_time = Instant::now();
    let capture_future = command::spawn_and_capture(cmd);

    let captured = if let Some(limit) = timeout {
        match tokio::time::timeout(limit, capture_future).await {
            Ok(captured) => captured,
            Err(_) => {
                println!(
                    "{}",
                    t!(
                        "run.binary_timeout",
                        name = &binary.name,
                        timeout = limit.as_secs()
                    )
                    .red()
                );
                return Ok(CapturedRun {
                    stdout: String::new(),
                    stderr: t!("run.binary_timeout_message").to_string(),
                    exit_success: false,
                    duration: limit,
                    timed_out: true,
                });
            }
        }
    } else {
        capture_future.await
    };

    let (status_res, stdout, stderr) = captured;
    let status = status_res.with_context(|| {
        format!(
            "Failed to get process status for executable: '{}'",
            binary.executable.display()
        )
    })?;

    Ok(CapturedRun {
        stdout,
        stderr,
        exit_success: status.success(),
        duration: start_time.elapsed(),
        timed_out: false,
    })
}

/// Parses a captured run and folds the process-level verdict into it.
///
/// A binary is failed at the process level when it exited non-zero or wrote
/// anything to its error stream; either condition is OR-ed with the parser's
/// own FAIL detection.
///
/// 解析捕获的运行结果并将进程级判定并入其中。
///
/// 当可执行文件以非零状态退出或向其错误流写入任何内容时，
/// 它在进程级别即为失败；任一条件都与解析器自身的 FAIL 检测
/// 进行或运算。
pub fn interpret_run(captured: &CapturedRun, mode: FixtureMode) -> RunResult {
    let process_failed = !captured.exit_success || !captured.stderr.trim().is_empty();
    parser::parse(&captured.stdout, mode).with_process_failure(process_failed)
}
