//! Public API traits and types for the sskdf library
//!
//! This crate provides the public API surface shared by every sskdf crate:
//! the workspace-wide error type, validation helpers and the key derivation
//! traits implemented by the algorithms crate.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

pub use traits::{KdfOperation, KeyDerivationFunction, ParamProvider};
