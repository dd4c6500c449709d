//! Error type definitions for key derivation operations

use std::borrow::Cow;

use thiserror::Error as ThisError;

/// Primary error type for key derivation operations
///
/// Variants only ever carry lengths, counts and algorithm names. Secret
/// material and fixed info never end up in an error value.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid parameter error, e.g. a zero output length
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: Cow<'static, str>,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The requested output needs more hash repetitions than the
    /// 32-bit counter can enumerate
    #[error("{context}: output needs {repetitions} repetitions, counter allows at most {max}")]
    OutputTooLarge {
        context: &'static str,
        repetitions: usize,
        max: u32,
    },

    /// counter || Z || FixedInfo is longer than the hash accepts
    #[error("{context}: hash input exceeds the maximum of {max_bytes} bytes")]
    InputTooLarge {
        context: &'static str,
        max_bytes: u128,
    },

    /// The hash identifier names no available hash implementation
    #[error("unsupported hash algorithm: {name}")]
    UnsupportedHash { name: String },
}

/// Result type for key derivation operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `UnsupportedHash` error
    pub fn unsupported_hash(name: impl Into<String>) -> Self {
        Self::UnsupportedHash { name: name.into() }
    }

    /// Replace the context of an existing error
    ///
    /// `UnsupportedHash` carries no context and is returned unchanged.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::OutputTooLarge {
                repetitions, max, ..
            } => Self::OutputTooLarge {
                context,
                repetitions,
                max,
            },
            Self::InputTooLarge { max_bytes, .. } => Self::InputTooLarge { context, max_bytes },
            err @ Self::UnsupportedHash { .. } => err,
        }
    }

    /// The context string attached to this error, if any
    pub fn context(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::OutputTooLarge { context, .. }
            | Self::InputTooLarge { context, .. } => Some(context),
            Self::UnsupportedHash { .. } => None,
        }
    }
}
