//! Hex encoding and decoding

use sskdf_api::{Error, Result};

/// Decode a hex string into bytes
///
/// Upper and lower case digits are both accepted. An odd number of digits or
/// a non-hex character is an `InvalidParameter` error.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    ::hex::decode(hex).map_err(|e| Error::param("hex decoding", e.to_string()))
}

/// Encode bytes as a lowercase hex string
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}
