//! Utilities and helpers for the sskdf library
//!
//! Currently this is the hex codec used to express binary test vectors and
//! key material in text form.

#![forbid(unsafe_code)]

pub mod codec;

pub use codec::{bytes_to_hex, hex_to_bytes};
