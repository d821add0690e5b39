//! Run results.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What happened to one matched file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Entry name inside the output directory.
    pub name: String,
    pub original_bytes: usize,
    pub optimized_bytes: usize,
}

impl FileOutcome {
    pub fn new(name: impl Into<String>, original_bytes: usize, optimized_bytes: usize) -> Self {
        Self {
            name: name.into(),
            original_bytes,
            optimized_bytes,
        }
    }

    pub fn bytes_saved(&self) -> usize {
        self.original_bytes.saturating_sub(self.optimized_bytes)
    }
}

/// Summary of a completed run, in directory-listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizeReport {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub files: Vec<FileOutcome>,
    /// Entries left untouched because they did not match the filter.
    pub skipped: usize,
}

impl OptimizeReport {
    pub fn new(directory: impl AsRef<Path>, dry_run: bool) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            dry_run,
            files: Vec::new(),
            skipped: 0,
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        self.files.push(outcome);
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn optimized_count(&self) -> usize {
        self.files.len()
    }

    pub fn bytes_before(&self) -> usize {
        self.files.iter().map(|f| f.original_bytes).sum()
    }

    pub fn bytes_after(&self) -> usize {
        self.files.iter().map(|f| f.optimized_bytes).sum()
    }

    pub fn bytes_saved(&self) -> usize {
        self.bytes_before().saturating_sub(self.bytes_after())
    }
}
