//! Application layer errors.
//!
//! These errors represent failures while driving the filesystem, not
//! transform logic. Every one of them aborts the run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during a run.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The output directory could not be listed.
    #[error("Failed to read directory {path}: {reason}")]
    EnumerationFailed {
        path: PathBuf,
        kind: io::ErrorKind,
        reason: String,
    },

    /// A matched file could not be read as UTF-8 text.
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    /// A matched file could not be overwritten.
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// The in-memory store's lock was poisoned.
    #[error("Filesystem store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    pub fn enumeration_failed(path: &Path, err: &io::Error) -> Self {
        Self::EnumerationFailed {
            path: path.to_path_buf(),
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    pub fn read_failed(path: &Path, err: &io::Error) -> Self {
        Self::ReadFailed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    pub fn write_failed(path: &Path, err: &io::Error) -> Self {
        Self::WriteFailed {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EnumerationFailed { path, kind, .. } if *kind == io::ErrorKind::NotFound => vec![
                format!("Directory does not exist: {}", path.display()),
                "Run the bundler first so the build output exists".into(),
                "Or point at another directory with --dir".into(),
            ],
            Self::EnumerationFailed { path, .. } => vec![
                format!("Failed to list: {}", path.display()),
                "Check that you have read permission on the directory".into(),
            ],
            Self::ReadFailed { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check the file is readable UTF-8 text and not a directory".into(),
            ],
            Self::WriteFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files optimized before this one were already rewritten".into(),
            ],
            Self::StoreLockError => vec![
                "The in-memory filesystem lock was poisoned by a panicking writer".into(),
                "This is an internal failure; the run was aborted".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EnumerationFailed { kind, .. } if *kind == io::ErrorKind::NotFound => {
                ErrorCategory::NotFound
            }
            Self::EnumerationFailed { .. } => ErrorCategory::Internal,
            Self::ReadFailed { .. } | Self::WriteFailed { .. } => ErrorCategory::Internal,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
