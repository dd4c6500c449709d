//! # sskdf
//!
//! The single-step key derivation function of NIST SP 800-56C Rev. 1,
//! section 4.1, over the SHA-2, SHA-3, BLAKE2, SHA-1 and MD5 hash families.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sskdf = "0.3"
//! ```
//!
//! ```
//! use sskdf::prelude::*;
//!
//! let z = [0x42u8; 32];
//! let key = sskdf::derive(HashAlgorithm::Sha256, &z, 32, b"id-aes256-GCM").unwrap();
//! assert_eq!(key.len(), 32);
//! ```
//!
//! With the default `utils` feature, the hex codec sits at the crate root:
//!
//! ```
//! # #[cfg(feature = "utils")]
//! # {
//! use sskdf::prelude::*;
//!
//! let z = sskdf::hex_to_bytes(
//!     "59096b7bb72b94c5555c36c9768fd8e4ed8f395e78485eb9f9dd43655500ed7a",
//! )
//! .unwrap();
//! let fixed_info = sskdf::hex_to_bytes("9BCAD7E8EEF7B21A98FF18605C6816BD").unwrap();
//! let key = sskdf::derive(HashAlgorithm::Sha256, &z, 16, &fixed_info).unwrap();
//! assert_eq!(sskdf::bytes_to_hex(&key), "2179356cdc3001e63f91b3c81007ba31");
//! assert!(sskdf::hex_to_bytes("abc").is_err());
//! # }
//! ```
//!
//! ## Features
//!
//! - `sha2`, `sha3`, `blake2`: the corresponding hash families
//! - `legacy`: SHA-1 and MD5
//! - `all-hashes` (default): every hash family
//! - `utils` (default): hex helpers for test vectors
//! - `serde`: serialize [`HashAlgorithm`](crate::algorithms::hash::HashAlgorithm)
//!   as its canonical identifier
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`sskdf-api`]: Error type and KDF traits
//! - [`sskdf-internal`]: Endianness and constant-time helpers
//! - [`sskdf-params`]: Digest sizes and hash input limits
//! - [`sskdf-algorithms`]: Hash dispatch and the derivation itself
//! - [`sskdf-utils`]: Hex encoding helpers

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use sskdf_algorithms as algorithms;
pub use sskdf_api as api;
pub use sskdf_internal as internal;
pub use sskdf_params as params;

// Feature-gated re-exports
#[cfg(feature = "utils")]
pub use sskdf_utils as utils;
#[cfg(feature = "utils")]
pub use sskdf_utils::{bytes_to_hex, hex_to_bytes};

pub use sskdf_algorithms::kdf::single_step::{
    derive, derive_array, derive_by_name, derive_into, verify,
};

/// Common imports for sskdf users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{KdfOperation, KeyDerivationFunction, ParamProvider};

    pub use crate::algorithms::hash::HashAlgorithm;
    pub use crate::algorithms::kdf::{SingleStepKdf, SingleStepParams};

    pub use zeroize::Zeroizing;
}
