//! # Unity Reporter Library / Unity Reporter 库
//!
//! This library provides the core functionality for the Unity Reporter tool,
//! a CI harness that runs prebuilt Unity test binaries, parses their verbose
//! fixture-grouped output and emits one JUnit XML report per binary.
//!
//! 此库为 Unity Reporter 工具提供核心功能，
//! 这是一个 CI 工具，用于运行预构建的 Unity 测试可执行文件，
//! 解析其详细的按 fixture 分组的输出，并为每个可执行文件生成一个
//! JUnit XML 报告。
//!
//! ## Modules / 模块
//!
//! - `core` - Data model, output parser and binary execution engine
//! - `infra` - Infrastructure services like command execution and file system operations
//! - `reporting` - JUnit report generation and console summaries
//! - `cli` - Command-line interface and commands
//!
//! - `core` - 数据模型、输出解析器和可执行文件执行引擎
//! - `infra` - 基础设施服务，如命令执行和文件系统操作
//! - `reporting` - JUnit 报告生成和控制台摘要
//! - `cli` - 命令行接口和命令

pub mod cli;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use core::execution;
pub use core::models;
pub use core::parser;

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
