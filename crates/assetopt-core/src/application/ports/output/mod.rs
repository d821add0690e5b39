//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `assetopt-adapters` crate provides the filesystems; the CLI provides
//! the console reporter.

use std::path::{Path, PathBuf};

use crate::domain::{FileOutcome, OptimizeReport};
use crate::error::AssetoptResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `assetopt_adapters::filesystem::LocalFilesystem` (production)
/// - `assetopt_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every failure is reported as an `ApplicationError` carrying the path.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// List the entries directly inside `dir`, in listing order.
    ///
    /// Not recursive. Subdirectories are returned like any other entry.
    fn list_entries(&self, dir: &Path) -> AssetoptResult<Vec<PathBuf>>;

    /// Read a whole file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> AssetoptResult<String>;

    /// Replace a file's content.
    fn write_file(&self, path: &Path, content: &str) -> AssetoptResult<()>;
}

/// Port for run progress notifications.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter {
    /// A matched file was transformed (and written, unless dry run).
    fn file_optimized(&self, outcome: &FileOutcome);

    /// Every entry was processed. Not called when the run aborts.
    fn finished(&self, report: &OptimizeReport);
}

/// Reporter that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn file_optimized(&self, _outcome: &FileOutcome) {}

    fn finished(&self, _report: &OptimizeReport) {}
}
