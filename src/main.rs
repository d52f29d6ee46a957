//! dirtree 主程序入口
//!
//! 本模块实现 `dirtree` 命令行工具的主入口，串联以下流程：
//!
//! 1. **日志初始化**：诊断信息输出到 stderr，由 `DIRTREE_LOG` 控制级别
//! 2. **CLI 解析**：解析命令行参数，产出 `ParseResult`
//! 3. **配置验证**：验证配置有效性
//! 4. **树形渲染**：逐层列举目录并直接写入 stdout
//!
//! # 退出码
//!
//! - `0`：成功
//! - `1`：参数错误
//! - `2`：扫描错误
//! - `3`：输出错误
//!
//! 文件: src/main.rs
//! 作者: WaterRun
//! 更新于: 2026-10-19

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(dead_code)]

mod cli;
mod config;
mod error;
mod render;
mod scan;

use std::error::Error as _;
use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::{CliError, CliParser, ParseResult};
use error::DirtreeError;

/// 退出码：成功
const EXIT_SUCCESS: u8 = 0;

/// 退出码：参数错误
const EXIT_CLI_ERROR: u8 = 1;

/// 退出码：扫描错误
const EXIT_SCAN_ERROR: u8 = 2;

/// 退出码：输出错误
const EXIT_OUTPUT_ERROR: u8 = 3;

/// 日志级别环境变量
const LOG_ENV_VAR: &str = "DIRTREE_LOG";

/// 程序主入口
fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            let code = error_to_exit_code(&e);
            print_error(&e);
            ExitCode::from(code)
        }
    }
}

/// 初始化日志
///
/// stdout 只承载树形输出，日志一律写入 stderr。默认仅输出警告及以上级别。
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// 执行主流程
///
/// 串联 CLI 解析 -> 配置验证 -> 渲染的完整流程。
fn run() -> Result<(), DirtreeError> {
    // 1. CLI 解析
    let parser = CliParser::from_env();
    let parse_result = parser.parse()?;

    // 2. 根据解析结果执行相应操作
    match parse_result {
        ParseResult::Help => {
            cli::print_help();
            Ok(())
        }
        ParseResult::Version => {
            cli::print_version();
            Ok(())
        }
        ParseResult::Config(config) => {
            // 3. 配置验证
            let config = config.validate()?;
            info!(
                root = %config.root_path.display(),
                show_files = config.show_files,
                charset = ?config.charset,
                "rendering tree"
            );

            // 4. 树形渲染
            let stdout = io::stdout();
            let out = BufWriter::new(stdout.lock());
            render::render_tree(out, &config.root_path, config.show_files, config.charset)?;

            debug!("render finished");
            Ok(())
        }
    }
}

/// 将错误映射为退出码
fn error_to_exit_code(err: &DirtreeError) -> u8 {
    match err {
        DirtreeError::Cli(_) | DirtreeError::Config(_) => EXIT_CLI_ERROR,
        DirtreeError::Scan(_) => EXIT_SCAN_ERROR,
        DirtreeError::Render(_) => EXIT_OUTPUT_ERROR,
    }
}

/// 打印错误信息到 stderr
///
/// 根据错误类型格式化输出，附带底层原因。
fn print_error(err: &DirtreeError) {
    let prefix = match err {
        DirtreeError::Cli(_) => "CLI error",
        DirtreeError::Config(_) => "Config error",
        DirtreeError::Scan(_) => "Scan error",
        DirtreeError::Render(_) => "Output error",
    };

    eprintln!("dirtree: {}: {}", prefix, err);

    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }

    // 参数错误时附带用法提示
    match err {
        DirtreeError::Cli(CliError::UnknownOption { .. }) => {
            eprintln!("{}", cli::usage_text());
            eprintln!("Hint: run `dirtree --help` to list available options");
        }
        DirtreeError::Cli(_) => eprintln!("{}", cli::usage_text()),
        _ => {}
    }
}
