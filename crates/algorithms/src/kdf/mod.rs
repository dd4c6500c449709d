//! Key Derivation Functions
//!
//! This module provides the single-step KDF of NIST SP 800-56C Rev. 1,
//! section 4.1, both as free functions dispatching on a
//! [`HashAlgorithm`](crate::hash::HashAlgorithm)
//! and as a [`KeyDerivationFunction`] implementation with a builder-style
//! [`KdfOperation`].
//!
//! ## Example usage
//!
//! ```
//! use sskdf_algorithms::hash::HashAlgorithm;
//! use sskdf_algorithms::kdf::{single_step, KdfOperation, KeyDerivationFunction, SingleStepKdf};
//!
//! // Free function API
//! let key1 = single_step::derive(HashAlgorithm::Sha256, b"shared secret", 32, b"context info").unwrap();
//!
//! // Operation pattern API
//! let kdf = SingleStepKdf::new();
//! let key2 = kdf.builder()
//!     .with_secret(b"shared secret")
//!     .with_fixed_info(b"context info")
//!     .with_output_length(32)
//!     .derive().unwrap();
//!
//! // Derive to fixed-size array
//! let key3: [u8; 32] = kdf.builder()
//!     .with_secret(b"shared secret")
//!     .with_fixed_info(b"context info")
//!     .derive_array().unwrap();
//!
//! assert_eq!(key1.as_slice(), key2.as_slice());
//! assert_eq!(key2.as_slice(), key3.as_slice());
//! ```

pub mod single_step;

pub use single_step::{SingleStepKdf, SingleStepOperation, SingleStepParams};
pub use sskdf_api::traits::{KdfOperation, KeyDerivationFunction, ParamProvider};
