//! # Core Module / 核心模块
//!
//! This module contains the core functionality of Unity Reporter,
//! including the data model, the output parser, configuration, and
//! test-binary execution.
//!
//! 此模块包含 Unity Reporter 的核心功能，
//! 包括数据模型、输出解析器、配置和测试可执行文件的执行。

pub mod config;
pub mod execution;
pub mod models;
pub mod parser;

// Re-exports
pub use config::ReporterConfig;
pub use models::{FixtureMode, RunResult, TestOutcome, TestStatus};
pub use parser::parse;
