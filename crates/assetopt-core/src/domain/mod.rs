//! Domain layer - pure logic, no I/O.
//!
//! - [`transform`]: the comment/whitespace transform pass applied to one file
//! - [`AssetFilter`]: decides which directory entries are matched files
//! - [`OptimizeReport`] / [`FileOutcome`]: what a run did

pub mod asset;
pub mod error;
pub mod report;
pub mod transform;

pub use asset::AssetFilter;
pub use error::{DomainError, ErrorCategory};
pub use report::{FileOutcome, OptimizeReport};
pub use transform::{collapse_whitespace, optimize_source, strip_comments};
