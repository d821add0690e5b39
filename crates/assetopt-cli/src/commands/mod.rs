//! Command handlers.

pub mod optimize;
