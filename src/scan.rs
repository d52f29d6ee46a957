//! 扫描模块：单层目录列举
//!
//! 本模块负责读取一个目录的直接子条目，提供：
//!
//! - **条目模型**：`DirectoryEntry` 与 `EntryKind`
//! - **单层列举**：`list_dir` 读取一层目录，按名称字节序排序，可仅保留目录
//! - **根路径检查**：`check_root` 在渲染前确认根路径存在且为目录
//!
//! 列举结果一次性读入内存，返回前释放目录句柄，递归时每层至多持有一个句柄。
//!
//! 作者: WaterRun
//! 更新于: 2026-10-19

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::ScanError;

// ============================================================================
// 类型定义
// ============================================================================

/// 文件系统条目类型
///
/// 符号链接不跟随，按其自身类型归入 `File`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// 目录
    Directory,
    /// 文件（目录以外的一切条目）
    File,
}

impl EntryKind {
    /// 从文件类型判断条目类型
    #[must_use]
    pub fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else {
            Self::File
        }
    }
}

/// 目录中的单个子条目
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use dirtree::scan::{DirectoryEntry, EntryKind};
///
/// let entry = DirectoryEntry::file(PathBuf::from("root/b.txt"), 0);
/// assert_eq!(entry.name, "b.txt");
/// assert_eq!(entry.size, Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// 条目名称（不含路径）
    pub name: String,
    /// 完整路径
    pub path: PathBuf,
    /// 条目类型
    pub kind: EntryKind,
    /// 文件大小（字节），目录为 `None`
    pub size: Option<u64>,
}

impl DirectoryEntry {
    /// 创建目录条目
    #[must_use]
    pub fn directory(path: PathBuf) -> Self {
        Self {
            name: entry_name(&path),
            path,
            kind: EntryKind::Directory,
            size: None,
        }
    }

    /// 创建文件条目
    #[must_use]
    pub fn file(path: PathBuf, size: u64) -> Self {
        Self {
            name: entry_name(&path),
            path,
            kind: EntryKind::File,
            size: Some(size),
        }
    }

    /// 是否为目录
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// 取路径的最后一段作为显示名称
fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

// ============================================================================
// 列举
// ============================================================================

/// 检查根路径是否为可访问的目录
///
/// # Errors
///
/// - `ScanError::PathNotFound` - 路径不存在
/// - `ScanError::PermissionDenied` - 无权访问
/// - `ScanError::NotADirectory` - 路径不是目录
pub fn check_root(path: &Path) -> Result<(), ScanError> {
    let meta = fs::metadata(path).map_err(|e| ScanError::from_io_error(e, path.to_path_buf()))?;

    if !meta.is_dir() {
        return Err(ScanError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// 列举目录的直接子条目
///
/// 结果按名称升序排列，比较基于原始字节（`OsStr` 顺序），大小写敏感。
/// `include_files` 为 `false` 时仅保留目录，且不会读取任何文件元数据。
///
/// # Errors
///
/// 目录无法打开、无法读取，或文件元数据无法获取时返回 `ScanError`。
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use dirtree::scan::list_dir;
///
/// let entries = list_dir(Path::new("."), true).expect("列举失败");
/// for entry in &entries {
///     println!("{}", entry.name);
/// }
/// ```
pub fn list_dir(path: &Path, include_files: bool) -> Result<Vec<DirectoryEntry>, ScanError> {
    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()));

    let mut entries = Vec::new();
    for item in walker {
        let item = item?;
        let kind = EntryKind::from_file_type(item.file_type());

        match kind {
            EntryKind::Directory => entries.push(DirectoryEntry::directory(item.into_path())),
            EntryKind::File if include_files => {
                let meta = item.metadata().map_err(|e| ScanError::MetadataFailed {
                    path: item.path().to_path_buf(),
                    source: e.into(),
                })?;
                entries.push(DirectoryEntry::file(item.into_path(), meta.len()));
            }
            EntryKind::File => {}
        }
    }

    debug!(
        path = %path.display(),
        count = entries.len(),
        include_files,
        "listed directory"
    );

    Ok(entries)
}

// ============================================================================
// 单元测试
// ============================================================================
