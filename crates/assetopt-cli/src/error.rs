//! Error handling for the assetopt CLI.
//!
//! Provides structured errors with:
//! - The single user-facing `Error optimizing assets: ...` line
//! - Actionable suggestions (shown with `-v`)
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use assetopt_core::error::AssetoptError;

// Re-export so callers only need `use crate::error::*`.
pub use assetopt_core::error::ErrorCategory as CoreCategory;

/// Prefix of the one-line failure report on stderr.
pub const ERROR_PREFIX: &str = "Error optimizing assets:";

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The build output directory could not be turned into an absolute path.
    #[error("Cannot resolve output directory: {reason}")]
    DistDirUnresolved { reason: String },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `assetopt-core`.
    ///
    /// Transparent so the message is the triggering error's own description.
    #[error(transparent)]
    Core(#[from] AssetoptError),

    // ── System errors ──────────────────────────────────────────────────────
    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check the file passed with --config".into(),
                "Check ASSETOPT_* environment variables".into(),
            ],

            Self::DistDirUnresolved { reason } => vec![
                format!("Output directory problem: {}", reason),
                "Pass the directory explicitly: assetopt --dir ./dist".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check that stdout is writable".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::DistDirUnresolved { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = format!("{} {}\n", ERROR_PREFIX.red().bold(), self.to_string().red());

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "  {} {}\n",
                    "\u{2192}".dimmed(), // →
                    err.to_string().dimmed()
                ));
                source = err.source();
            }

            let suggestions = self.suggestions();
            if !suggestions.is_empty() {
                output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
                for suggestion in suggestions {
                    output.push_str(&format!("  {}\n", suggestion));
                }
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("{ERROR_PREFIX} {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }

            let suggestions = self.suggestions();
            if !suggestions.is_empty() {
                out.push_str("\nSuggestions:\n");
                for s in &suggestions {
                    out.push_str(&format!("  {s}\n"));
                }
            }
        }

        out
    }

    /// Log the error using tracing.
    ///
    /// Debug level: the user-facing line is printed separately and must stay
    /// the only stderr output at default verbosity.
    pub fn log(&self) {
        tracing::debug!(
            category = ?self.category(),
            exit_code = self.exit_code(),
            "Run failed: {}",
            self
        );

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    use assetopt_core::application::ApplicationError;
    use assetopt_core::domain::DomainError;

    fn missing_dir() -> CliError {
        CliError::Core(
            ApplicationError::enumeration_failed(
                Path::new("/srv/dist"),
                &io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            )
            .into(),
        )
    }

    // ── messages ──────────────────────────────────────────────────────────

    #[test]
    fn core_message_is_the_triggering_description() {
        assert_eq!(
            missing_dir().to_string(),
            "Failed to read directory /srv/dist: No such file or directory"
        );
    }

    #[test]
    fn format_plain_is_one_line_by_default() {
        let s = missing_dir().format_plain(false);
        assert_eq!(
            s,
            "Error optimizing assets: Failed to read directory /srv/dist: No such file or directory\n"
        );
    }

    #[test]
    fn format_plain_verbose_lists_suggestions() {
        let s = missing_dir().format_plain(true);
        assert!(s.starts_with(ERROR_PREFIX));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--dir"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_chain() {
        let err = CliError::IoError {
            message: "writing report".into(),
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        assert!(err.format_plain(true).contains("Caused by: pipe closed"));
    }

    #[test]
    fn format_colored_keeps_prefix_text() {
        let s = missing_dir().format_colored(false);
        assert!(s.contains("Error optimizing assets:"));
        assert!(s.contains("/srv/dist"));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_not_found() {
        assert_eq!(missing_dir().exit_code(), 3);
    }

    #[test]
    fn exit_code_user_error() {
        let err = CliError::Core(DomainError::EmptyFilter.into());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::Core(
            ApplicationError::write_failed(
                Path::new("/srv/dist/a.js"),
                &io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
            )
            .into(),
        );
        assert_eq!(err.exit_code(), 1);
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "writing report");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_io_error_keeps_context_and_exits_internal() {
        let result: Result<(), io::Error> = Err(io::Error::other("pipe closed"));
        let err = result.with_cli_context(|| "Failed to write summary").unwrap_err();
        assert_eq!(err.to_string(), "I/O error: Failed to write summary");
        assert_eq!(err.exit_code(), 1);
    }
}
