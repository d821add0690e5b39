//! Domain errors.
//!
//! The transform pass itself cannot fail; the only domain rules are the ones
//! guarding how matched files are selected.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No extensions left to match against.
    #[error("Asset filter has no extensions")]
    EmptyFilter,

    /// An extension that can never match a file name.
    #[error("Invalid extension '{extension}': {reason}")]
    InvalidExtension { extension: String, reason: String },
}

impl DomainError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyFilter => vec![
                "Configure at least one extension, e.g. extensions = [\"js\", \"css\"]".into(),
                "Remove `optimizer.extensions` to fall back to the defaults".into(),
            ],
            Self::InvalidExtension { extension, .. } => vec![
                format!("Check the extension '{extension}'"),
                "Extensions are plain suffixes such as `js` or `.css`".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyFilter | Self::InvalidExtension { .. } => ErrorCategory::Validation,
        }
    }
}

/// Domain error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
