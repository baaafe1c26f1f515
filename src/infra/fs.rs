//! # File System Operations Module / 文件系统操作模块
//!
//! Discovery of test binaries in a CMake build tree and resolution of the
//! per-binary report path.
//!
//! The build system records every test executable as a small pointer file:
//! `<build_dir>/tests/test_executables/<name>.txt` (or one level deeper for
//! multi-config generators) whose content is the path of the executable to
//! run. The file stem is the binary's logical test name.
//!
//! 在 CMake 构建树中发现测试可执行文件并解析每个文件的报告路径。
//!
//! 构建系统将每个测试可执行文件记录为一个小的指针文件：
//! `<build_dir>/tests/test_executables/<name>.txt`（多配置生成器则深一层），
//! 其内容是要运行的可执行文件的路径。文件主干名是该测试的逻辑名称。

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::TestBinary;

/// The build-tree subdirectory holding the pointer files.
const TEST_EXECUTABLES_DIR: &str = "tests/test_executables";

/// Discovers the test binaries recorded under `build_dir`, optionally inside
/// a multi-config subdirectory (e.g. "Debug" or "Release").
///
/// The returned list is sorted by name so that execution and reporting order
/// is deterministic regardless of directory enumeration order.
///
/// 发现记录在 `build_dir` 下的测试可执行文件，可选地位于多配置
/// 子目录内（例如 "Debug" 或 "Release"）。
///
/// 返回的列表按名称排序，使执行和报告顺序与目录枚举顺序无关，
/// 保持确定性。
pub fn discover_test_binaries(build_dir: &Path, config: Option<&str>) -> Result<Vec<TestBinary>> {
    let mut exe_dir = build_dir.join(TEST_EXECUTABLES_DIR);
    if let Some(config) = config {
        exe_dir = exe_dir.join(config);
    }

    let entries = fs::read_dir(&exe_dir).with_context(|| {
        format!(
            "Failed to read test executable directory: {}",
            exe_dir.display()
        )
    })?;

    let mut binaries = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to enumerate: {}", exe_dir.display()))?
            .path();
        if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        let name = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };
        let executable = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read pointer file: {}", path.display()))?;
        binaries.push(TestBinary {
            name,
            executable: PathBuf::from(executable.trim()),
        });
    }

    binaries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(binaries)
}

/// The report file path for a binary's logical test name.
/// 某个可执行文件的逻辑测试名称对应的报告文件路径。
pub fn report_path(output_dir: &Path, test_name: &str) -> PathBuf {
    output_dir.join(format!("test_results_{}.xml", test_name))
}

/// Gets the absolute path from a potentially relative path.
///
/// # Arguments
/// * `path` - Path to canonicalize
///
/// # Returns
/// Canonicalized absolute path, or an error if the path doesn't exist
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).with_context(|| format!("Failed to resolve path: {}", path.display()))
}
