//! Application services - orchestrate use cases.

pub mod optimize_service;

pub use optimize_service::{OptimizeOptions, OptimizeService};
