//! 命令行参数解析模块
//!
//! 本模块实现 `dirtree` 命令行工具的参数解析功能，支持三种参数风格混用：
//!
//! - Windows CMD 风格 (`/F`)，大小写不敏感
//! - Unix 短参数风格 (`-f`)，大小写敏感
//! - GNU 长参数风格 (`--files`)，大小写敏感
//!
//! 以 `/` 开头但不匹配任何 CMD 风格选项的参数按路径处理，
//! 因此 `/tmp` 这类绝对路径可以直接使用。
//!
//! 解析完成后产出 [`Config`] 结构体，供渲染模块使用。
//!
//! 文件: src/cli.rs
//! 作者: WaterRun
//! 更新于: 2026-10-19

#![forbid(unsafe_code)]

use std::collections::HashSet;
use std::env;
use std::path::PathBuf;

use crate::config::{CharsetMode, Config};
pub(crate) use crate::error::CliError;

// ============================================================================
// 解析结果枚举
// ============================================================================

/// 解析结果
#[derive(Debug)]
pub enum ParseResult {
    /// 正常配置，需要执行渲染
    Config(Config),
    /// 用户请求显示帮助信息
    Help,
    /// 用户请求显示版本信息
    Version,
}

// ============================================================================
// 参数定义
// ============================================================================

/// 参数定义结构体
///
/// 所有选项均为标志型，不带值。
struct ArgDef {
    /// 规范名称（用于重复检测和错误消息）
    canonical: &'static str,
    /// Windows CMD 风格 (`/X`)，大小写不敏感
    cmd_patterns: &'static [&'static str],
    /// Unix 短参数 (`-x`)，大小写敏感
    short_patterns: &'static [&'static str],
    /// GNU 长参数 (`--xxx`)，大小写敏感
    long_patterns: &'static [&'static str],
}

impl ArgDef {
    /// 判断参数是否匹配此定义
    fn matches(&self, arg: &str) -> bool {
        self.cmd_patterns
            .iter()
            .any(|pattern| arg.eq_ignore_ascii_case(pattern))
            || self.short_patterns.iter().any(|pattern| *pattern == arg)
            || self.long_patterns.iter().any(|pattern| *pattern == arg)
    }
}

/// 所有支持的参数定义
const ARG_DEFINITIONS: &[ArgDef] = &[
    ArgDef {
        canonical: "help",
        cmd_patterns: &["/?"],
        short_patterns: &["-h"],
        long_patterns: &["--help"],
    },
    ArgDef {
        canonical: "version",
        cmd_patterns: &["/V"],
        short_patterns: &["-v"],
        long_patterns: &["--version"],
    },
    ArgDef {
        canonical: "files",
        cmd_patterns: &["/F"],
        short_patterns: &["-f"],
        long_patterns: &["--files"],
    },
    ArgDef {
        canonical: "ascii",
        cmd_patterns: &["/A"],
        short_patterns: &["-a"],
        long_patterns: &["--ascii"],
    },
];

// ============================================================================
// 命令行解析器
// ============================================================================

/// 命令行参数解析器
///
/// # 路径位置规则
///
/// 路径参数可以出现在任意位置，包括选项之前或之后，但必须且只能出现一次。
///
/// # Examples
///
/// ```no_run
/// use dirtree::cli::{CliParser, ParseResult};
///
/// let parser = CliParser::new(vec![".".to_string(), "-f".to_string()]);
/// match parser.parse() {
///     Ok(ParseResult::Config(config)) => assert!(config.show_files),
///     _ => panic!("解析失败"),
/// }
/// ```
pub struct CliParser {
    /// 待解析的参数列表
    args: Vec<String>,
    /// 已使用的规范名称集合（用于重复检测）
    seen_canonical_names: HashSet<&'static str>,
}

impl CliParser {
    /// 从参数列表创建解析器
    ///
    /// # 参数
    ///
    /// * `args` - 命令行参数列表（不包含程序名）
    #[must_use]
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            seen_canonical_names: HashSet::new(),
        }
    }

    /// 从环境参数创建解析器
    ///
    /// 自动跳过程序名（第一个参数）。
    #[must_use]
    pub fn from_env() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::new(args)
    }

    /// 解析命令行参数
    ///
    /// 帮助与版本选项优先：出现时立即返回，不再要求路径。
    ///
    /// # Errors
    ///
    /// - `CliError::UnknownOption` - 遇到未知参数
    /// - `CliError::DuplicateOption` - 参数重复
    /// - `CliError::MissingPath` - 未指定路径
    /// - `CliError::MultiplePaths` - 指定了多个路径
    pub fn parse(mut self) -> Result<ParseResult, CliError> {
        let mut config = Config::default();
        let mut collected_paths: Vec<String> = Vec::new();
        let args = std::mem::take(&mut self.args);

        for arg in args {
            match Self::match_definition(&arg) {
                Some(def) => {
                    self.register_canonical_name(def.canonical)?;
                    Self::apply_to_config(&mut config, def.canonical);

                    if config.is_info_only() {
                        return Ok(if config.show_help {
                            ParseResult::Help
                        } else {
                            ParseResult::Version
                        });
                    }
                }
                None if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(CliError::UnknownOption { option: arg });
                }
                None => collected_paths.push(arg),
            }
        }

        config.root_path = Self::take_single_path(collected_paths)?;

        Ok(ParseResult::Config(config))
    }

    /// 查找与参数匹配的定义
    fn match_definition(arg: &str) -> Option<&'static ArgDef> {
        ARG_DEFINITIONS.iter().find(|def| def.matches(arg))
    }

    /// 注册已使用的规范名称，检测重复
    fn register_canonical_name(&mut self, canonical: &'static str) -> Result<(), CliError> {
        if !self.seen_canonical_names.insert(canonical) {
            return Err(CliError::DuplicateOption {
                option: canonical.to_string(),
            });
        }
        Ok(())
    }

    /// 将匹配的参数应用到配置
    fn apply_to_config(config: &mut Config, canonical: &str) {
        match canonical {
            "help" => config.show_help = true,
            "version" => config.show_version = true,
            "files" => config.show_files = true,
            "ascii" => config.charset = CharsetMode::Ascii,
            _ => {}
        }
    }

    /// 取出唯一的路径参数
    fn take_single_path(mut paths: Vec<String>) -> Result<PathBuf, CliError> {
        match paths.len() {
            0 => Err(CliError::MissingPath),
            1 => Ok(PathBuf::from(paths.remove(0))),
            _ => Err(CliError::MultiplePaths { paths }),
        }
    }
}

// ============================================================================
// 帮助与版本信息
// ============================================================================

/// 获取用法行
#[must_use]
pub fn usage_text() -> &'static str {
    "Usage: dirtree <PATH> [-f] [-a]"
}

/// 获取帮助信息字符串
#[must_use]
pub fn help_text() -> String {
    format!(
        r#"dirtree: print a directory hierarchy as an indented tree.

{}

Options:
  --help, -h, /?       Show help information
  --version, -v, /V    Show version information
  --files, -f, /F      Include files, with their sizes in bytes
  --ascii, -a, /A      Draw the tree using ASCII characters

Set DIRTREE_LOG (e.g. DIRTREE_LOG=debug) to enable diagnostics on stderr."#,
        usage_text()
    )
}

/// 获取版本信息字符串
#[must_use]
pub fn version_text() -> String {
    format!("dirtree version {}", env!("CARGO_PKG_VERSION"))
}

/// 打印帮助信息到标准输出
pub fn print_help() {
    println!("{}", help_text());
}

/// 打印版本信息到标准输出
pub fn print_version() {
    println!("{}", version_text());
}

// ============================================================================
// 单元测试
// ============================================================================
