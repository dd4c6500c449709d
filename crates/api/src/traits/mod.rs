//! Trait definitions implemented by sskdf algorithms

pub mod kdf;

pub use kdf::{KdfOperation, KeyDerivationFunction, ParamProvider};
