//! Application layer for assetopt.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (OptimizeService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The transform rules themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{OptimizeOptions, OptimizeService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, NoopReporter, ProgressReporter};

pub use error::ApplicationError;
