//! Assetopt Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the `assetopt`
//! post-build asset optimizer, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           assetopt-cli (CLI)            │
//! │   (args, logging, config, exit codes)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (OptimizeService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, ProgressReporter)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     assetopt-adapters (Infrastructure)  │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (transform pass, AssetFilter, report)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use assetopt_core::prelude::*;
//!
//! fn optimize(filesystem: Box<dyn Filesystem>) -> AssetoptResult<()> {
//!     let service = OptimizeService::new(filesystem, OptimizeOptions::default());
//!     let report = service.run(std::path::Path::new("/srv/app/dist"), &NoopReporter)?;
//!     println!("saved {} bytes", report.bytes_saved());
//!     Ok(())
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        OptimizeOptions, OptimizeService,
        ports::{Filesystem, NoopReporter, ProgressReporter},
    };
    pub use crate::domain::{AssetFilter, FileOutcome, OptimizeReport, optimize_source};
    pub use crate::error::{AssetoptError, AssetoptResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
