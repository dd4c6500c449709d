//! Validation utilities for key derivation inputs

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a repetition count fits the 32-bit big-endian counter
#[inline(always)]
pub fn counter_space(context: &'static str, repetitions: usize) -> Result<u32> {
    u32::try_from(repetitions).map_err(|_| Error::OutputTooLarge {
        context,
        repetitions,
        max: u32::MAX,
    })
}
