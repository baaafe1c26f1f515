//! # Command Execution Module / 命令执行模块
//!
//! Spawning of test binaries with separate, concurrent capture of their
//! output streams. The streams are kept apart because the error stream is a
//! failure signal of its own, independent of the exit code.
//!
//! 派生测试可执行文件并分别并发捕获其输出流。
//! 两个流保持分离，因为错误流本身就是独立于退出码的失败信号。

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Spawns a command and captures its stdout and stderr as separate strings.
/// Both streams are drained concurrently so neither pipe can fill up and
/// stall the child.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The captured stdout as a `String`.
/// - The captured stderr as a `String`.
///
/// 派生一个命令，将其 stdout 和 stderr 捕获为两个独立的字符串。
/// 两个流被并发读取，因此任一管道都不会填满并阻塞子进程。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
///
/// # Returns
/// 一个元组，包含：
/// - 进程的 `ExitStatus`（包装在 `io::Result` 中）。
/// - 捕获的 stdout，为一个 `String`。
/// - 捕获的 stderr，为一个 `String`。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, String, String) {
    // Configure the command to capture stdout and stderr.
    // 配置命令以捕获 stdout 和 stderr。
    let mut child = match cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            // If spawning fails, we return the error and empty output.
            // 如果派生失败，我们返回错误和空输出。
            return (Err(e), String::new(), String::new());
        }
    };

    let stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return (
                Err(std::io::Error::other("Failed to capture stdout")),
                String::new(),
                String::new(),
            );
        }
    };
    let stderr = match child.stderr.take() {
        Some(stderr) => stderr,
        None => {
            return (
                Err(std::io::Error::other("Failed to capture stderr")),
                String::new(),
                String::new(),
            );
        }
    };

    // Read both streams to completion while the child runs.
    // 在子进程运行时将两个流读取到结束。
    let stdout_handle = tokio::spawn(read_lines(stdout));
    let stderr_handle = tokio::spawn(read_lines(stderr));

    // Wait for the process to exit.
    // 等待进程退出。
    let status = child.wait().await;

    // Wait for the reading tasks to finish so that no output is lost.
    // 等待读取任务完成，以确保不丢失任何输出。
    let stdout_text = match stdout_handle.await {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to join stdout task: {}", e);
            String::new()
        }
    };
    let stderr_text = match stderr_handle.await {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to join stderr task: {}", e);
            String::new()
        }
    };

    (status, stdout_text, stderr_text)
}

/// Drains one output stream line by line into a string.
/// 将一个输出流逐行读入一个字符串。
async fn read_lines<R: AsyncRead + Unpin>(stream: R) -> String {
    let reader = BufReader::new(stream);
    let mut lines = reader.lines();
    let mut output = String::new();
    while let Ok(Some(line)) = lines.next_line().await {
        output.push_str(&line);
        output.push('\n');
    }
    output
}
