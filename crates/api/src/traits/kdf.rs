//! Key derivation traits
//!
//! These traits describe a KDF that turns a shared secret and optional
//! context-binding fixed info into keying material of a caller-chosen
//! length. They carry no salt and no iteration count: the derivations
//! behind them are meant for high-entropy key-agreement secrets, not
//! passwords.

use crate::error::Result;

/// Trait for algorithms with configurable parameters
pub trait ParamProvider {
    /// The parameter type associated with this algorithm
    type Params: Clone;

    /// Creates a new instance with the specified parameters
    fn with_params(params: Self::Params) -> Self;

    /// Returns the current parameters
    fn params(&self) -> &Self::Params;

    /// Updates the parameters
    fn set_params(&mut self, params: Self::Params);
}

/// Builder-style operation for a single derivation
pub trait KdfOperation<'a, T = Vec<u8>>: Sized {
    /// Set the shared secret `Z`
    fn with_secret(self, secret: &'a [u8]) -> Self;

    /// Set the context-binding fixed info
    fn with_fixed_info(self, fixed_info: &'a [u8]) -> Self;

    /// Set the desired output length in bytes
    fn with_output_length(self, length: usize) -> Self;

    /// Execute the key derivation
    fn derive(self) -> Result<T>;

    /// Execute the key derivation into a fixed-size array
    fn derive_array<const N: usize>(self) -> Result<[u8; N]>;
}

/// Common trait for key derivation functions
pub trait KeyDerivationFunction: ParamProvider {
    /// Static algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Creates a new instance of the KDF with default parameters
    fn new() -> Self;

    /// Returns the algorithm name, including the underlying hash
    fn name(&self) -> String;

    /// Derives `length` bytes of keying material
    ///
    /// # Arguments
    /// * `secret` - Shared secret `Z`
    /// * `fixed_info` - Context-binding data; falls back to the configured default when `None`
    /// * `length` - Length of the output key in bytes
    fn derive_key(&self, secret: &[u8], fixed_info: Option<&[u8]>, length: usize)
        -> Result<Vec<u8>>;

    /// Creates a builder for fluent API usage
    fn builder(&self) -> impl KdfOperation<'_>
    where
        Self: Sized;
}
