//! Random salt generation over base-16/36/62 alphabets.
//!
//! This module provides:
//! - [`BitExtractor`] — sliding bit window yielding fixed-width symbols from bytes
//! - [`render`] — render a caller-supplied byte buffer as an exact-length string
//! - [`SaltGenerator`] — draw CSPRNG bytes and render them
//!
//! # Out-of-range symbols
//!
//! Six-bit symbols range over `0..64` while the base-62 alphabet only has 62
//! characters. [`OutOfRangePolicy::Substitute`] replaces such a symbol with a
//! uniform index from a non-cryptographic generator (`SmallRng`), matching
//! the established output format. [`OutOfRangePolicy::Redraw`] discards it and
//! pulls more bytes from the CSPRNG instead.

use rand::rngs::{OsRng, SmallRng};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::alphabet::Alphabet;
use crate::error::CryptoError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default output length.
pub const DEFAULT_LENGTH: usize = 128;

/// Default bits-per-char (base 62).
pub const DEFAULT_BITS_PER_CHAR: u8 = 6;

/// Minimum accepted output length.
pub const MIN_LENGTH: usize = 2;

/// Maximum accepted output length (1 Mi characters).
pub const MAX_LENGTH: usize = 1 << 20;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// What to do with a symbol that has no character in the alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OutOfRangePolicy {
    /// Replace it with a uniform index from a non-cryptographic generator.
    #[default]
    Substitute,
    /// Discard it and extract another symbol from fresh CSPRNG bytes.
    Redraw,
}

/// Iterator over `bits_per_char`-wide symbols packed little-endian in a byte slice.
///
/// Bits are consumed from the least significant end of each byte. The
/// iterator ends as soon as fewer than `bits_per_char` unread bits remain,
/// so trailing bits that cannot form a full symbol are dropped.
#[derive(Debug, Clone)]
pub struct BitExtractor<'a> {
    bytes: std::slice::Iter<'a, u8>,
    bits_per_char: u32,
    mask: u32,
    w: u32,
    have: u32,
}

impl<'a> BitExtractor<'a> {
    /// Create an extractor over `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidBitsPerChar`] unless `bits_per_char` is in `1..=8`.
    pub fn new(bytes: &'a [u8], bits_per_char: u8) -> Result<Self, CryptoError> {
        if !(1..=8).contains(&bits_per_char) {
            return Err(CryptoError::InvalidBitsPerChar {
                bits: bits_per_char,
            });
        }
        let bits_per_char = u32::from(bits_per_char);
        Ok(Self {
            bytes: bytes.iter(),
            bits_per_char,
            mask: (1u32 << bits_per_char).wrapping_sub(1),
            w: 0,
            have: 0,
        })
    }

    /// Number of valid bits currently held in the register.
    #[must_use]
    pub const fn buffered_bits(&self) -> u32 {
        self.have
    }
}

impl Iterator for BitExtractor<'_> {
    type Item = u8;

    // `have` stays below 8 + bits_per_char (<= 16), so every shift is < 32
    // and the subtraction never underflows.
    #[allow(clippy::arithmetic_side_effects)]
    fn next(&mut self) -> Option<u8> {
        while self.have < self.bits_per_char {
            let byte = self.bytes.next()?;
            self.w |= u32::from(*byte) << self.have;
            self.have += 8;
        }
        debug_assert!(self.have < 8 + self.bits_per_char);

        let symbol = self.w & self.mask;
        self.w >>= self.bits_per_char;
        self.have -= self.bits_per_char;

        u8::try_from(symbol).ok()
    }
}

/// Salt generator bound to an [`OutOfRangePolicy`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaltGenerator {
    policy: OutOfRangePolicy,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a salt with the default policy using `OsRng`.
///
/// `length` defaults to [`DEFAULT_LENGTH`] and `bits_per_char` to
/// [`DEFAULT_BITS_PER_CHAR`] (4 = base16, 5 = base36, 6 = base62).
///
/// # Errors
///
/// See [`SaltGenerator::generate`].
pub fn generate_salt(
    length: Option<usize>,
    bits_per_char: Option<u8>,
) -> Result<String, CryptoError> {
    SaltGenerator::default().generate(length, bits_per_char)
}

/// Render `bytes` as exactly `length` characters of the alphabet selected by
/// `bits_per_char`.
///
/// Out-of-range symbols are substituted with an index drawn from `fallback`.
///
/// # Errors
///
/// - [`CryptoError::InvalidBitsPerChar`] if `bits_per_char` is not 4, 5 or 6
/// - [`CryptoError::Truncated`] if `bytes` hold fewer than `length` symbols
pub fn render<R: Rng + ?Sized>(
    bytes: &[u8],
    length: usize,
    bits_per_char: u8,
    fallback: &mut R,
) -> Result<String, CryptoError> {
    let alphabet = alphabet_for(bits_per_char)?;
    let size = alphabet.size();

    let mut out = String::with_capacity(length.min(bytes.len().saturating_mul(2)));
    for symbol in BitExtractor::new(bytes, bits_per_char)?.take(length) {
        let mut index = usize::from(symbol);
        if index >= size {
            index = fallback.gen_range(0..size);
        }
        if let Some(c) = alphabet.char_at(index) {
            out.push(c);
        }
    }

    if out.len() < length {
        return Err(CryptoError::Truncated {
            produced: out.len(),
            requested: length,
        });
    }
    Ok(out)
}

/// Number of random bytes needed for `length` symbols of `bits_per_char` bits.
#[must_use]
pub const fn byte_budget(length: usize, bits_per_char: u8) -> usize {
    length.saturating_mul(bits_per_char as usize).div_ceil(8)
}

impl SaltGenerator {
    /// Create a generator with the given out-of-range policy.
    #[must_use]
    pub const fn new(policy: OutOfRangePolicy) -> Self {
        Self { policy }
    }

    /// The configured out-of-range policy.
    #[must_use]
    pub const fn policy(&self) -> OutOfRangePolicy {
        self.policy
    }

    /// Generate a salt using `OsRng` as the byte source.
    ///
    /// # Errors
    ///
    /// See [`SaltGenerator::generate_with`].
    pub fn generate(
        &self,
        length: Option<usize>,
        bits_per_char: Option<u8>,
    ) -> Result<String, CryptoError> {
        self.generate_with(&mut OsRng, length, bits_per_char)
    }

    /// Generate a salt drawing bytes from `rng`.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::InvalidLength`] if `length` is outside [`MIN_LENGTH`]..=[`MAX_LENGTH`]
    /// - [`CryptoError::InvalidBitsPerChar`] if `bits_per_char` is not 4, 5 or 6
    /// - [`CryptoError::RandomSource`] if `rng` fails to fill the buffer
    /// - [`CryptoError::Truncated`] if the drawn bytes run out early
    pub fn generate_with<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        length: Option<usize>,
        bits_per_char: Option<u8>,
    ) -> Result<String, CryptoError> {
        let length = length.unwrap_or(DEFAULT_LENGTH);
        let bits_per_char = bits_per_char.unwrap_or(DEFAULT_BITS_PER_CHAR);

        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(CryptoError::InvalidLength { length });
        }
        let alphabet = alphabet_for(bits_per_char)?;

        let salt = match self.policy {
            OutOfRangePolicy::Substitute => {
                let bytes = draw(rng, byte_budget(length, bits_per_char))?;
                let mut fallback = SmallRng::from_entropy();
                render(&bytes, length, bits_per_char, &mut fallback)?
            }
            OutOfRangePolicy::Redraw => redraw(rng, length, bits_per_char, alphabet)?,
        };

        tracing::debug!(length, bits_per_char, policy = ?self.policy, "salt generated");
        Ok(salt)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn alphabet_for(bits_per_char: u8) -> Result<Alphabet, CryptoError> {
    Alphabet::for_bits(bits_per_char).ok_or(CryptoError::InvalidBitsPerChar {
        bits: bits_per_char,
    })
}

/// Fill a zeroizing buffer of `len` bytes from `rng`.
pub(crate) fn draw<R: RngCore + ?Sized>(
    rng: &mut R,
    len: usize,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let mut bytes = Zeroizing::new(vec![0u8; len]);
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::RandomSource(format!("CSPRNG fill failed: {e}")))?;
    Ok(bytes)
}

/// Strict extraction: rejected symbols are replaced by symbols from new CSPRNG bytes.
fn redraw<R: RngCore + ?Sized>(
    rng: &mut R,
    length: usize,
    bits_per_char: u8,
    alphabet: Alphabet,
) -> Result<String, CryptoError> {
    let mut out = String::with_capacity(length);
    while out.len() < length {
        let remaining = length.saturating_sub(out.len());
        let bytes = draw(rng, byte_budget(remaining, bits_per_char))?;
        for symbol in BitExtractor::new(&bytes, bits_per_char)?.take(remaining) {
            if let Some(c) = alphabet.char_at(usize::from(symbol)) {
                out.push(c);
            }
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
