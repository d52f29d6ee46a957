//! Error handling module: defines unified error types for dirtree.
//!
//! This module provides a hierarchical error type system covering:
//!
//! - **CLI parsing errors**: missing or surplus paths, unknown options
//! - **Configuration errors**: re-exported from `config` module for API consistency
//! - **Scan errors**: filesystem access, permissions, path not found, metadata
//! - **Render errors**: failures writing to the output sink
//!
//! Every error is fatal: nothing is retried and no partial tree is recovered.
//!
//! File: src/error.rs
//! Author: WaterRun
//! Date: 2026-10-19

#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub use crate::config::ConfigError;

/// Top-level error type for dirtree.
///
/// Aggregates all sub-module errors as the unified error return type for the
/// program's main entry point. Supports automatic conversion from all sub-error
/// types via the `From` trait.
///
/// # Examples
///
/// ```
/// use dirtree::error::{DirtreeError, ScanError};
/// use std::path::PathBuf;
///
/// let scan_err = ScanError::PathNotFound {
///     path: PathBuf::from("/missing"),
/// };
/// let err: DirtreeError = scan_err.into();
/// assert!(matches!(err, DirtreeError::Scan(_)));
/// ```
#[derive(Debug, Error)]
pub enum DirtreeError {
    /// CLI parsing error.
    #[error(transparent)]
    Cli(#[from] CliError),

    /// Configuration validation error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Directory scan error.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Rendering error.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Result type alias for dirtree operations.
pub type DirtreeResult<T> = Result<T, DirtreeError>;

/// CLI argument parsing errors.
///
/// # Examples
///
/// ```
/// use dirtree::error::CliError;
///
/// let err = CliError::UnknownOption { option: "-z".to_string() };
/// assert!(err.to_string().contains("-z"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Unknown option was provided.
    #[error("Unknown option: {option}")]
    UnknownOption {
        /// The unrecognized option name.
        option: String,
    },

    /// Option was specified more than once.
    #[error("Option {option} was specified more than once.")]
    DuplicateOption {
        /// The option name.
        option: String,
    },

    /// No root path was given.
    #[error("Missing required <PATH> argument.")]
    MissingPath,

    /// Multiple paths were specified when only one is allowed.
    #[error("Only one path can be specified, but multiple were provided: {paths:?}")]
    MultiplePaths {
        /// All discovered paths.
        paths: Vec<String>,
    },
}

/// Directory scanning errors.
///
/// Represents errors that occur while listing a directory or reading the
/// metadata of one of its entries.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use dirtree::error::ScanError;
///
/// let err = ScanError::PermissionDenied {
///     path: PathBuf::from("/protected"),
/// };
/// assert!(err.to_string().contains("Permission denied"));
/// ```
#[derive(Debug, Error)]
pub enum ScanError {
    /// The specified path does not exist.
    #[error("Path not found: {path}")]
    PathNotFound {
        /// The non-existent path.
        path: PathBuf,
    },

    /// The specified path is not a directory.
    #[error("Path is not a directory: {path}")]
    NotADirectory {
        /// The non-directory path.
        path: PathBuf,
    },

    /// Permission was denied for the path.
    #[error("Permission denied: {path}")]
    PermissionDenied {
        /// The inaccessible path.
        path: PathBuf,
    },

    /// Failed to read directory contents.
    #[error("Failed to read directory: {path}")]
    ReadDirFailed {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Failed to retrieve file metadata.
    #[error("Failed to retrieve metadata: {path}")]
    MetadataFailed {
        /// The file path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Error during directory walk that carries no IO error.
    #[error("Directory walk error: {message}")]
    WalkError {
        /// Error message.
        message: String,
        /// Related path, if available.
        path: Option<PathBuf>,
    },
}

impl ScanError {
    /// Creates an appropriate scan error from an IO error and path.
    ///
    /// Selects the variant based on the IO error kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::{self, ErrorKind};
    /// use std::path::PathBuf;
    /// use dirtree::error::ScanError;
    ///
    /// let io_err = io::Error::new(ErrorKind::NotFound, "not found");
    /// let scan_err = ScanError::from_io_error(io_err, PathBuf::from("/missing"));
    /// assert!(matches!(scan_err, ScanError::PathNotFound { .. }));
    /// ```
    #[must_use]
    pub fn from_io_error(err: io::Error, path: PathBuf) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::ReadDirFailed { path, source: err },
        }
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from);
        match (path, err.io_error().is_some()) {
            (Some(p), true) => {
                let io_err: io::Error = err.into();
                Self::from_io_error(io_err, p)
            }
            (path, _) => Self::WalkError {
                message: err.to_string(),
                path,
            },
        }
    }
}

/// Rendering errors.
///
/// # Examples
///
/// ```
/// use std::io::{self, ErrorKind};
/// use dirtree::error::RenderError;
///
/// let err = RenderError::WriteFailed {
///     source: io::Error::new(ErrorKind::BrokenPipe, "closed"),
/// };
/// assert!(err.to_string().contains("write"));
/// ```
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing a rendered line to the output sink failed.
    #[error("Failed to write tree output")]
    WriteFailed {
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for RenderError {
    fn from(source: io::Error) -> Self {
        Self::WriteFailed { source }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
