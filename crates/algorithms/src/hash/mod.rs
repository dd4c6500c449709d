//! Hash function identifiers and dispatch
//!
//! The hash primitives themselves come from the RustCrypto crates. This
//! module names them with a closed [`HashAlgorithm`] enum, parses textual
//! identifiers, and feeds ordered byte chunks through the selected hash.
//!
//! Each hash family sits behind a Cargo feature (`sha2`, `sha3`, `blake2`,
//! `legacy`). Identifiers of a disabled family still parse, and the digest
//! length table still answers for them, but hashing with them fails with
//! [`Error::UnsupportedHash`].

use core::fmt;
use core::str::FromStr;

#[cfg(any(
    feature = "sha2",
    feature = "sha3",
    feature = "blake2",
    feature = "legacy"
))]
use digest::Digest;
use sskdf_params::hash as params;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

pub mod table;

pub use table::{digest_length, digest_length_by_name};

/// Hash functions the single-step KDF can run over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum HashAlgorithm {
    /// SHA-256 (FIPS 180-4)
    #[default]
    Sha256,
    /// SHA-512 (FIPS 180-4)
    Sha512,
    /// SHA-224 (FIPS 180-4)
    Sha224,
    /// SHA-384 (FIPS 180-4)
    Sha384,
    /// SHA3-256 (FIPS 202)
    Sha3_256,
    /// SHA3-512 (FIPS 202)
    Sha3_512,
    /// SHA3-224 (FIPS 202)
    Sha3_224,
    /// SHA3-384 (FIPS 202)
    Sha3_384,
    /// BLAKE2s with a 256-bit digest (RFC 7693)
    Blake2s256,
    /// BLAKE2b with a 512-bit digest (RFC 7693)
    Blake2b512,
    /// SHA-1 (FIPS 180-4), legacy
    Sha1,
    /// MD5 (RFC 1321), legacy
    Md5,
    /// SHA-512/224 (FIPS 180-4)
    Sha512_224,
    /// SHA-512/256 (FIPS 180-4)
    Sha512_256,
}

impl HashAlgorithm {
    /// Every supported identifier, the tabulated ones first
    pub const ALL: [HashAlgorithm; 14] = [
        Self::Sha256,
        Self::Sha512,
        Self::Sha224,
        Self::Sha384,
        Self::Sha3_256,
        Self::Sha3_512,
        Self::Sha3_224,
        Self::Sha3_384,
        Self::Blake2s256,
        Self::Blake2b512,
        Self::Sha1,
        Self::Md5,
        Self::Sha512_224,
        Self::Sha512_256,
    ];

    /// Canonical lowercase identifier, e.g. `"sha3-256"`
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
            Self::Sha224 => "sha224",
            Self::Sha384 => "sha384",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_512 => "sha3-512",
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_384 => "sha3-384",
            Self::Blake2s256 => "blake2s256",
            Self::Blake2b512 => "blake2b512",
            Self::Sha1 => "sha1",
            Self::Md5 => "md5",
            Self::Sha512_224 => "sha512-224",
            Self::Sha512_256 => "sha512-256",
        }
    }

    /// Whether the hash family was compiled in
    pub const fn is_available(&self) -> bool {
        match self {
            Self::Sha256
            | Self::Sha512
            | Self::Sha224
            | Self::Sha384
            | Self::Sha512_224
            | Self::Sha512_256 => cfg!(feature = "sha2"),
            Self::Sha3_256 | Self::Sha3_512 | Self::Sha3_224 | Self::Sha3_384 => {
                cfg!(feature = "sha3")
            }
            Self::Blake2s256 | Self::Blake2b512 => cfg!(feature = "blake2"),
            Self::Sha1 | Self::Md5 => cfg!(feature = "legacy"),
        }
    }

    /// Largest message, in bytes, the hash is specified for
    ///
    /// `None` means the hash has no input limit (SHA-3).
    pub const fn max_input_bytes(&self) -> Option<u128> {
        match self {
            Self::Sha256 | Self::Sha224 | Self::Sha1 | Self::Md5 => {
                Some(params::MAX_INPUT_BYTES_64BIT_LENGTH)
            }
            Self::Sha512 | Self::Sha384 | Self::Sha512_224 | Self::Sha512_256 => {
                Some(params::MAX_INPUT_BYTES_128BIT_LENGTH)
            }
            Self::Blake2s256 => Some(params::BLAKE2S_MAX_INPUT_BYTES),
            Self::Blake2b512 => Some(params::BLAKE2B_MAX_INPUT_BYTES),
            Self::Sha3_256 | Self::Sha3_512 | Self::Sha3_224 | Self::Sha3_384 => None,
        }
    }

    /// Digest length in bytes, as reported by the digest length table
    pub fn output_size(&self) -> Result<usize> {
        table::digest_length(*self)
    }

    /// Hash the concatenation of `chunks`, in order
    ///
    /// The chunks are fed to the hash one after another, so callers never
    /// need to build a concatenated copy of secret inputs.
    pub fn digest_chunks(&self, chunks: &[&[u8]]) -> Result<Zeroizing<Vec<u8>>> {
        match self {
            #[cfg(feature = "sha2")]
            Self::Sha256 => Ok(digest_with::<sha2::Sha256>(chunks)),
            #[cfg(feature = "sha2")]
            Self::Sha512 => Ok(digest_with::<sha2::Sha512>(chunks)),
            #[cfg(feature = "sha2")]
            Self::Sha224 => Ok(digest_with::<sha2::Sha224>(chunks)),
            #[cfg(feature = "sha2")]
            Self::Sha384 => Ok(digest_with::<sha2::Sha384>(chunks)),
            #[cfg(feature = "sha2")]
            Self::Sha512_224 => Ok(digest_with::<sha2::Sha512_224>(chunks)),
            #[cfg(feature = "sha2")]
            Self::Sha512_256 => Ok(digest_with::<sha2::Sha512_256>(chunks)),
            #[cfg(feature = "sha3")]
            Self::Sha3_256 => Ok(digest_with::<sha3::Sha3_256>(chunks)),
            #[cfg(feature = "sha3")]
            Self::Sha3_512 => Ok(digest_with::<sha3::Sha3_512>(chunks)),
            #[cfg(feature = "sha3")]
            Self::Sha3_224 => Ok(digest_with::<sha3::Sha3_224>(chunks)),
            #[cfg(feature = "sha3")]
            Self::Sha3_384 => Ok(digest_with::<sha3::Sha3_384>(chunks)),
            #[cfg(feature = "blake2")]
            Self::Blake2s256 => Ok(digest_with::<blake2::Blake2s256>(chunks)),
            #[cfg(feature = "blake2")]
            Self::Blake2b512 => Ok(digest_with::<blake2::Blake2b512>(chunks)),
            #[cfg(feature = "legacy")]
            Self::Sha1 => Ok(digest_with::<sha1::Sha1>(chunks)),
            #[cfg(feature = "legacy")]
            Self::Md5 => Ok(digest_with::<md5::Md5>(chunks)),
            #[allow(unreachable_patterns)]
            _ => {
                let _ = chunks;
                Err(Error::unsupported_hash(self.name()))
            }
        }
    }

    /// Hash a single byte string
    pub fn digest(&self, data: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        self.digest_chunks(&[data])
    }
}

#[cfg(any(
    feature = "sha2",
    feature = "sha3",
    feature = "blake2",
    feature = "legacy"
))]
fn digest_with<D: Digest>(chunks: &[&[u8]]) -> Zeroizing<Vec<u8>> {
    let mut hasher = D::new();
    for chunk in chunks {
        hasher.update(chunk);
    }
    Zeroizing::new(hasher.finalize().to_vec())
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    /// Parse an identifier case-insensitively
    ///
    /// Besides the canonical names this accepts the spellings used by NIST
    /// and common tooling: `SHA-256`, `SHA2-256`, `sha3_256`, `SHA-512/256`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '_' | '/' => '-',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        let hash = match normalized.as_str() {
            "sha256" | "sha-256" | "sha2-256" => Self::Sha256,
            "sha512" | "sha-512" | "sha2-512" => Self::Sha512,
            "sha224" | "sha-224" | "sha2-224" => Self::Sha224,
            "sha384" | "sha-384" | "sha2-384" => Self::Sha384,
            "sha3-256" | "sha-3-256" => Self::Sha3_256,
            "sha3-512" | "sha-3-512" => Self::Sha3_512,
            "sha3-224" | "sha-3-224" => Self::Sha3_224,
            "sha3-384" | "sha-3-384" => Self::Sha3_384,
            "blake2s256" | "blake2s-256" => Self::Blake2s256,
            "blake2b512" | "blake2b-512" => Self::Blake2b512,
            "sha1" | "sha-1" => Self::Sha1,
            "md5" => Self::Md5,
            "sha512-224" | "sha-512-224" | "sha2-512-224" => Self::Sha512_224,
            "sha512-256" | "sha-512-256" | "sha2-512-256" => Self::Sha512_256,
            _ => return Err(Error::unsupported_hash(s)),
        };
        Ok(hash)
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<HashAlgorithm> for String {
    fn from(hash: HashAlgorithm) -> Self {
        hash.name().to_owned()
    }
}
