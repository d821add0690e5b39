//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `assetopt-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory listing and text file I/O
//!   - `ProgressReporter`: per-file and completion notifications

pub mod output;

pub use output::{Filesystem, NoopReporter, ProgressReporter};

#[cfg(test)]
pub use output::{MockFilesystem, MockProgressReporter};
