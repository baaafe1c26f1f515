//! # Configuration Module / 配置模块
//!
//! Optional `UnityReporter.toml` settings for a run. Every field has a sane
//! default so the reporter works with no configuration file at all;
//! command-line flags override whatever the file provides.
//!
//! 一次运行的可选 `UnityReporter.toml` 设置。每个字段都有合理的默认值，
//! 因此报告器在完全没有配置文件的情况下也能工作；
//! 命令行标志会覆盖文件提供的内容。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::models::FixtureMode;

/// Settings for a reporter run, loaded from a TOML file.
/// 从 TOML 文件加载的报告器运行设置。
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ReporterConfig {
    /// The language for the reporter's console messages (e.g., "en", "zh-CN").
    /// When absent, the `--lang` flag or the system locale applies.
    /// 报告器控制台消息的语言（例如 "en", "zh-CN"）。
    /// 缺失时使用 `--lang` 标志或系统区域设置。
    #[serde(default)]
    pub language: Option<String>,

    /// The maximum number of test binaries run concurrently.
    /// If not set, a default derived from the CPU count is used.
    /// 并发运行的测试可执行文件的最大数量。
    /// 如果未设置，则使用从 CPU 数量派生的默认值。
    #[serde(default)]
    pub jobs: Option<usize>,

    /// An optional per-binary timeout in seconds. A binary that runs longer
    /// is killed and recorded as a process-level failure.
    /// 可选的单可执行文件超时时间（秒）。
    /// 运行时间超过此值的可执行文件将被终止并记录为进程级失败。
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Where report files are written. Defaults to the build directory.
    /// 报告文件的写入位置。默认为构建目录。
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// The output grammar the test binaries emit.
    /// 测试可执行文件发出的输出语法。
    #[serde(default)]
    pub fixture_mode: FixtureMode,
}

/// Loads the configuration from `path`. A missing file is not an error;
/// it simply yields the defaults.
/// 从 `path` 加载配置。文件缺失不是错误，只会得到默认值。
pub fn load_config(path: &Path) -> Result<ReporterConfig> {
    if !path.exists() {
        return Ok(ReporterConfig::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
