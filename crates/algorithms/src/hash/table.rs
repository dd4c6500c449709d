//! Digest length table
//!
//! The twelve commonly used identifiers have hardcoded lengths. Anything else
//! is measured by hashing the empty string, which fails with
//! [`Error::UnsupportedHash`](crate::error::Error::UnsupportedHash) when no
//! implementation backs the identifier.

use sskdf_params::hash::*;

use super::HashAlgorithm;
use crate::error::Result;

/// Hardcoded digest lengths, in bytes, keyed by canonical identifier
const DIGEST_LENGTHS: [(&str, usize); 12] = [
    ("sha256", SHA256_OUTPUT_SIZE),
    ("sha512", SHA512_OUTPUT_SIZE),
    ("sha224", SHA224_OUTPUT_SIZE),
    ("sha384", SHA384_OUTPUT_SIZE),
    ("sha3-256", SHA3_256_OUTPUT_SIZE),
    ("sha3-512", SHA3_512_OUTPUT_SIZE),
    ("sha3-224", SHA3_224_OUTPUT_SIZE),
    ("sha3-384", SHA3_384_OUTPUT_SIZE),
    ("blake2s256", BLAKE2S256_OUTPUT_SIZE),
    ("blake2b512", BLAKE2B512_OUTPUT_SIZE),
    ("sha1", SHA1_OUTPUT_SIZE),
    ("md5", MD5_OUTPUT_SIZE),
];

fn lookup(name: &str) -> Option<usize> {
    DIGEST_LENGTHS
        .iter()
        .find(|(id, _)| *id == name)
        .map(|&(_, len)| len)
}

/// Measure the digest length by hashing the empty string
fn measure(hash: HashAlgorithm) -> Result<usize> {
    let len = hash.digest(&[])?.len();
    tracing::trace!(%hash, len, "measured digest length");
    Ok(len)
}

/// Digest length, in bytes, of `hash`
pub fn digest_length(hash: HashAlgorithm) -> Result<usize> {
    match lookup(hash.name()) {
        Some(len) => Ok(len),
        None => measure(hash),
    }
}

/// Digest length, in bytes, of the hash named `name`
///
/// Canonical identifiers are answered from the table. Other spellings and
/// identifiers outside the table are parsed and measured.
pub fn digest_length_by_name(name: &str) -> Result<usize> {
    if let Some(len) = lookup(name) {
        return Ok(len);
    }
    let hash: HashAlgorithm = name.parse()?;
    measure(hash)
}
