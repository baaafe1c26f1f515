// Shared test helpers for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Creates an empty build tree with a `tests/test_executables` directory.
pub fn setup_build_dir() -> TempDir {
    let temp_dir = tempdir().expect("Failed to create temporary directory");
    fs::create_dir_all(temp_dir.path().join("tests/test_executables"))
        .expect("Failed to create test_executables directory");
    temp_dir
}

/// Registers a fake test binary: writes an executable shell script emitting
/// `body`, plus the pointer file the discovery step looks for.
#[cfg(unix)]
pub fn register_script_binary(build_dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script_path = build_dir.join(format!("{}.sh", name));
    fs::write(&script_path, format!("#!/bin/sh\n{}", body)).expect("Failed to write script");
    fs::set_permissions(&script_path, fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod script");

    let pointer = build_dir
        .join("tests/test_executables")
        .join(format!("{}.txt", name));
    fs::write(&pointer, script_path.to_str().expect("utf-8 path")).expect("Failed to write pointer");
    script_path
}

/// A script body for a well-behaved binary: all tests pass, clean exit.
pub const PASSING_BODY: &str = r#"echo "Unity test run 1 of 1"
echo "FIXTURE: Math"
echo "TEST(Math, Add): PASS (1 ms)"
echo "TEST(Math, Mul): PASS"
exit 0
"#;

/// A script body with one failing test, a diagnostic line and a non-zero exit.
pub const FAILING_BODY: &str = r#"echo "FIXTURE: Math"
echo "TEST(Math, Add): PASS (1 ms)"
echo "TEST(Math, Sub): FAIL"
echo "  expected 4 got 5"
exit 1
"#;

/// A script body that passes every test but writes to stderr.
pub const STDERR_BODY: &str = r#"echo "TEST(Mem, pool): PASS"
echo "leak detected in pool allocator" >&2
exit 0
"#;
