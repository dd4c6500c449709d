//! Single-step key derivation over pluggable hash functions
//!
//! This crate implements the one-step key derivation function of
//! NIST SP 800-56C Rev. 1, section 4.1, on top of the RustCrypto hash
//! implementations:
//!
//! - [`hash`]: the [`HashAlgorithm`] identifier, hash dispatch and the digest
//!   length table
//! - [`kdf`]: the derivation engine and its trait-based front end
//!
//! Buffers that hold keying material are zeroized when dropped.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash dispatch
pub mod hash;
pub use hash::HashAlgorithm;

// KDF implementations
pub mod kdf;
pub use kdf::{KdfOperation, KeyDerivationFunction, ParamProvider, SingleStepKdf, SingleStepParams};
