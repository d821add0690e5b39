//! Infrastructure adapters for assetopt.
//!
//! This crate implements the `Filesystem` port defined in
//! `assetopt-core::application::ports`. It contains all real I/O.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
