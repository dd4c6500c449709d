//! Endianness utility functions

/// Encode a derivation counter as the 4-byte big-endian block that
/// prefixes every hash input
#[inline(always)]
pub fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}
