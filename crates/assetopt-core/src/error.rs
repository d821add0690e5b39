//! Unified error handling for Assetopt Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions and a category for exit-code
//! mapping.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Assetopt Core operations.
///
/// Display is transparent for the wrapped layers so the CLI can print the
/// triggering error's own description.
#[derive(Debug, Error, Clone)]
pub enum AssetoptError {
    /// Errors from the domain layer (asset filter rules).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (enumeration, read, write).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl AssetoptError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/exit-code purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type AssetoptResult<T> = Result<T, AssetoptError>;
