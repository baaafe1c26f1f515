//! # Command-Line Interface Module / 命令行接口模块
//!
//! Builds the clap command tree and dispatches to the subcommand
//! implementations. The interface is localized, so the language is
//! pre-parsed before the full CLI is constructed.
//!
//! 构建 clap 命令树并分派到子命令实现。
//! 界面是本地化的，因此在构建完整 CLI 之前会预解析语言设置。

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("unity-reporter")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("run")
                .about(t!("cmd_run_about", locale = locale).to_string())
                .arg(
                    Arg::new("build-dir")
                        .help(t!("arg_build_dir", locale = locale).to_string())
                        .value_name("BUILD_DIR")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("build-config")
                        .long("build-config")
                        .help(t!("arg_build_config", locale = locale).to_string())
                        .value_name("BUILD_CONFIG")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help(t!("arg_config", locale = locale).to_string())
                        .value_name("CONFIG")
                        .default_value("UnityReporter.toml")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output-dir")
                        .short('o')
                        .long("output-dir")
                        .help(t!("arg_output_dir", locale = locale).to_string())
                        .value_name("OUTPUT_DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("jobs")
                        .short('j')
                        .long("jobs")
                        .help(t!("arg_jobs", locale = locale).to_string())
                        .value_name("JOBS")
                        .value_parser(clap::value_parser!(usize))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("timeout-secs")
                        .long("timeout-secs")
                        .help(t!("arg_timeout", locale = locale).to_string())
                        .value_name("TIMEOUT_SECS")
                        .value_parser(clap::value_parser!(u64))
                        .action(ArgAction::Set),
                ),
        )
}

/// Parses the command line and runs the selected subcommand.
/// 解析命令行并运行所选的子命令。
pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let build_dir = run_matches
                .get_one::<PathBuf>("build-dir")
                .expect("required argument")
                .clone();
            let build_config = run_matches.get_one::<String>("build-config").cloned();
            let config = run_matches
                .get_one::<PathBuf>("config")
                .expect("has default")
                .clone();
            let output_dir = run_matches.get_one::<PathBuf>("output-dir").cloned();
            let jobs = run_matches.get_one::<usize>("jobs").copied();
            let timeout_secs = run_matches.get_one::<u64>("timeout-secs").copied();

            commands::run::execute(build_dir, build_config, config, output_dir, jobs, timeout_secs)
                .await?;
        }
        _ => {
            // No subcommand given; clap has already printed the help text.
        }
    }
    Ok(())
}
