//! Constants for hash functions

/// Output size of SHA-224 in bytes
pub const SHA224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-384 in bytes
pub const SHA384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA-512 in bytes
pub const SHA512_OUTPUT_SIZE: usize = 64;

/// Output size of SHA3-224 in bytes
pub const SHA3_224_OUTPUT_SIZE: usize = 28;

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-384 in bytes
pub const SHA3_384_OUTPUT_SIZE: usize = 48;

/// Output size of SHA3-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Output size of BLAKE2s-256 in bytes
pub const BLAKE2S256_OUTPUT_SIZE: usize = 32;

/// Output size of BLAKE2b-512 in bytes
pub const BLAKE2B512_OUTPUT_SIZE: usize = 64;

/// Output size of SHA-1 in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Output size of MD5 in bytes
pub const MD5_OUTPUT_SIZE: usize = 16;

/// Size of the big-endian counter prefixed to every single-step KDF hash input
pub const COUNTER_SIZE: usize = 4;

/// Largest input, in bytes, for hashes with a 64-bit message bit length
/// (MD5, SHA-1, SHA-224, SHA-256): `(2^64 - 1)` bits
pub const MAX_INPUT_BYTES_64BIT_LENGTH: u128 = (u64::MAX as u128) / 8;

/// Largest input, in bytes, for hashes with a 128-bit message bit length
/// (SHA-384, SHA-512 and its truncations): `(2^128 - 1)` bits
pub const MAX_INPUT_BYTES_128BIT_LENGTH: u128 = u128::MAX / 8;

/// Largest input of BLAKE2s, whose byte counter is 64 bits wide
pub const BLAKE2S_MAX_INPUT_BYTES: u128 = u64::MAX as u128;

/// Largest input of BLAKE2b, whose byte counter is 128 bits wide
pub const BLAKE2B_MAX_INPUT_BYTES: u128 = u128::MAX;
