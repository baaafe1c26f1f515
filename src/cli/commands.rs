//! # CLI Commands Module / CLI 命令模块
//!
//! The subcommand implementations behind the command-line surface.
//! 命令行界面背后的子命令实现。

pub mod run;
