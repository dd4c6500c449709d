//! Error handling for the sskdf algorithms
//!
//! The algorithms share the workspace-wide error type from `sskdf-api`, so
//! errors cross crate boundaries without conversion.

pub use sskdf_api::error::{validate, Error, Result, ResultExt};
