//! Error types for `saltcellar-core`.

use thiserror::Error;

/// Errors produced by the generators.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Requested salt length is outside `MIN_LENGTH..=MAX_LENGTH`.
    #[error(
        "invalid length {length}: length must be between {min} and {max}",
        min = crate::salt::MIN_LENGTH,
        max = crate::salt::MAX_LENGTH
    )]
    InvalidLength {
        /// The rejected length.
        length: usize,
    },

    /// Bits-per-char outside {4, 5, 6}.
    #[error("invalid bits-per-char {bits}: valid values are 4, 5, 6")]
    InvalidBitsPerChar {
        /// The rejected bits-per-char value.
        bits: u8,
    },

    /// Nonce length has no digest algorithm assigned.
    #[error("unsupported nonce length {length}: accepted lengths are {allowed}")]
    UnsupportedNonceLength {
        /// The rejected length.
        length: usize,
        /// Comma-separated list of accepted lengths.
        allowed: String,
    },

    /// The random byte supply ran out before the output was complete.
    #[error("random bytes exhausted after {produced} of {requested} characters")]
    Truncated {
        /// Characters produced before the bytes ran out.
        produced: usize,
        /// Characters requested.
        requested: usize,
    },

    /// Radix outside 2..=62.
    #[error("invalid base {base}: base must be between 2 and 62")]
    InvalidBase {
        /// The rejected base.
        base: u32,
    },

    /// Password generation failure (invalid parameters).
    #[error("password generation error: {0}")]
    PasswordGeneration(String),

    /// The platform CSPRNG failed to produce bytes.
    #[error("random source error: {0}")]
    RandomSource(String),

    /// Settings file could not be written or encoded.
    #[error("config error: {0}")]
    Config(String),
}
