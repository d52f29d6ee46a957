//! 配置模块：定义 Config 及其相关枚举
//!
//! 本模块是用户意图的**单一事实来源**（Single Source of Truth）。
//! 命令行参数经 CLI 层解析后，统一转换为 `Config` 结构，
//! 后续渲染与输出仅依赖此配置，不再直接访问原始参数。
//!
//! 作者: WaterRun
//! 更新于: 2026-10-19

#![forbid(unsafe_code)]

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// 错误类型
// ============================================================================

/// 配置验证错误
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use dirtree::config::ConfigError;
///
/// let err = ConfigError::InvalidPath {
///     path: PathBuf::new(),
///     reason: "路径为空".to_string(),
/// };
/// assert!(err.to_string().contains("路径为空"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// 路径参数不可用
    #[error("路径无效: {path:?} ({reason})")]
    InvalidPath {
        /// 路径
        path: PathBuf,
        /// 原因
        reason: String,
    },
}

/// 配置验证结果类型
pub type ConfigResult<T> = Result<T, ConfigError>;

// ============================================================================
// 枚举类型定义
// ============================================================================

/// 字符集模式
///
/// 控制树形符号使用 Unicode 还是 ASCII 字符。四个符号宽度一致，
/// 均为 4 列，保证深层嵌套时各级对齐。
///
/// # Examples
///
/// ```
/// use dirtree::config::CharsetMode;
///
/// let mode = CharsetMode::Unicode;
/// assert_eq!(mode.branch(), "├───");
/// assert_eq!(mode.last_branch(), "└───");
///
/// let mode = CharsetMode::Ascii;
/// assert_eq!(mode.branch(), "+---");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharsetMode {
    /// 使用 Unicode 制表符绘制（默认）
    #[default]
    Unicode,
    /// 使用 ASCII 字符绘制
    Ascii,
}

impl CharsetMode {
    /// 获取普通分支符号（后面还有兄弟条目）
    #[must_use]
    pub const fn branch(&self) -> &'static str {
        match self {
            Self::Unicode => "├───",
            Self::Ascii => "+---",
        }
    }

    /// 获取最后一个分支符号
    #[must_use]
    pub const fn last_branch(&self) -> &'static str {
        match self {
            Self::Unicode => "└───",
            Self::Ascii => "\\---",
        }
    }

    /// 获取纵向连接线（非最后条目的子树缩进）
    #[must_use]
    pub const fn vertical(&self) -> &'static str {
        match self {
            Self::Unicode => "│   ",
            Self::Ascii => "|   ",
        }
    }

    /// 获取空白缩进（最后条目的子树缩进）
    #[must_use]
    pub const fn indent(&self) -> &'static str {
        "    "
    }
}

// ============================================================================
// 主配置结构
// ============================================================================

/// 全量配置
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use dirtree::config::{Config, CharsetMode};
///
/// let mut config = Config::with_root(PathBuf::from("/tmp"));
/// config.show_files = true;
///
/// let validated = config.validate().expect("验证应通过");
/// assert_eq!(validated.charset, CharsetMode::Unicode);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// 根路径（起始目录）
    pub root_path: PathBuf,
    /// 是否显示帮助信息
    pub show_help: bool,
    /// 是否显示版本信息
    pub show_version: bool,
    /// 是否显示文件（默认仅显示目录）
    pub show_files: bool,
    /// 树形符号字符集
    pub charset: CharsetMode,
}

impl Config {
    /// 创建具有指定根路径的配置
    #[must_use]
    pub fn with_root(root_path: PathBuf) -> Self {
        Self {
            root_path,
            ..Self::default()
        }
    }

    /// 验证配置
    ///
    /// 仅做与文件系统无关的检查。路径是否存在、是否为目录由渲染阶段
    /// 判定，从而以扫描错误的形式上报。
    ///
    /// # Errors
    ///
    /// 根路径为空时返回 `ConfigError::InvalidPath`。
    pub fn validate(self) -> ConfigResult<Self> {
        if self.root_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidPath {
                path: self.root_path,
                reason: "路径为空".to_string(),
            });
        }

        Ok(self)
    }

    /// 判断是否为"仅信息显示"模式（帮助或版本）
    #[must_use]
    pub const fn is_info_only(&self) -> bool {
        self.show_help || self.show_version
    }
}

// ============================================================================
// 单元测试
// ============================================================================
