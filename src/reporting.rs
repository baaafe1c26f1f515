//! # Reporting Module / 报告模块
//!
//! This module handles the two output surfaces of the reporter: the JUnit
//! XML documents consumed by CI, and the colorful console summary read by
//! humans.
//!
//! 此模块处理报告器的两个输出面：供 CI 消费的 JUnit XML 文档，
//! 以及供人阅读的彩色控制台摘要。

pub mod console;
pub mod junit;

// Re-export common reporting functions
pub use console::{print_failure_details, print_summary};
pub use junit::{build_report, serialize_report, write_report};
