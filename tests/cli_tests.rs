//! # CLI Integration Tests / CLI 集成测试
//!
//! End-to-end tests of the `run` command against fake build trees whose
//! "test binaries" are small shell scripts emitting the Unity protocol.
//!
//! 针对伪造构建树的 `run` 命令端到端测试，
//! 其中的“测试可执行文件”是发出 Unity 协议的小型 shell 脚本。

mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn reporter_cmd() -> Command {
    let mut cmd = Command::cargo_bin("unity-reporter").unwrap();
    cmd.arg("run").arg("--lang").arg("en");
    cmd
}

/// A build tree whose only binary passes cleanly: the run exits zero and
/// the report lands next to the build directory.
///
/// 唯一的可执行文件干净通过：运行以零退出，报告写入构建目录。
#[cfg(unix)]
#[test]
fn test_successful_run_writes_report_and_exits_zero() {
    let build = common::setup_build_dir();
    common::register_script_binary(build.path(), "test_math", common::PASSING_BODY);

    reporter_cmd()
        .arg(build.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ALL UNIT TESTS PASSED"));

    let report = build.path().join("test_results_test_math.xml");
    let xml = std::fs::read_to_string(report).unwrap();
    assert!(xml.contains("tests=\"2\""));
    assert!(xml.contains("failures=\"0\""));
}

/// One passing and one failing binary: the run exits non-zero, yet BOTH
/// reports are produced — an early failure never suppresses later reports.
///
/// 一个通过、一个失败的可执行文件：运行以非零退出，
/// 但两份报告都会生成——较早的失败绝不会抑制后续报告。
#[cfg(unix)]
#[test]
fn test_failing_binary_fails_run_but_all_reports_are_written() {
    let build = common::setup_build_dir();
    common::register_script_binary(build.path(), "test_good", common::PASSING_BODY);
    common::register_script_binary(build.path(), "test_bad", common::FAILING_BODY);

    reporter_cmd()
        .arg(build.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAILED TEST BINARIES"))
        .stdout(predicate::str::contains("expected 4 got 5"));

    assert!(build.path().join("test_results_test_good.xml").exists());
    let bad_xml = std::fs::read_to_string(build.path().join("test_results_test_bad.xml")).unwrap();
    assert!(bad_xml.contains("failures=\"1\""));
    assert!(bad_xml.contains("expected 4 got 5"));
}

/// Stderr output alone fails a binary, even with passing tests and a zero
/// exit code.
///
/// 仅有 stderr 输出就会使可执行文件失败，
/// 即使测试全部通过且退出码为零。
#[cfg(unix)]
#[test]
fn test_stderr_output_alone_fails_the_run() {
    let build = common::setup_build_dir();
    common::register_script_binary(build.path(), "test_mem", common::STDERR_BODY);

    reporter_cmd()
        .arg(build.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("leak detected in pool allocator"));
}

/// Reports can be redirected away from the build directory.
/// 报告可以重定向到构建目录之外。
#[cfg(unix)]
#[test]
fn test_output_dir_override() {
    let build = common::setup_build_dir();
    let out = tempfile::tempdir().unwrap();
    common::register_script_binary(build.path(), "test_math", common::PASSING_BODY);

    reporter_cmd()
        .arg(build.path())
        .arg("--output-dir")
        .arg(out.path())
        .assert()
        .success();

    assert!(out.path().join("test_results_test_math.xml").exists());
    assert!(!build.path().join("test_results_test_math.xml").exists());
}

#[test]
fn test_empty_build_tree_is_not_a_failure() {
    let build = common::setup_build_dir();

    reporter_cmd()
        .arg(build.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No test binaries found"));
}

#[test]
fn test_missing_build_dir_reports_an_error() {
    reporter_cmd()
        .arg("/definitely/not/a/build/dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
