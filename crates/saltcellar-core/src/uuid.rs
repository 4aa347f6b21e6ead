//! UUID-style random identifiers.
//!
//! - [`generate_uuid`] — 128-bit identifier, raw or RFC 4122 version 4,
//!   plain hex or hyphenated
//! - [`generate_short_uuid`] / [`generate_long_uuid`] — 64 / 128 random bits
//!   rendered in any base from 2 to 62

use ::uuid::{Builder, Uuid};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::alphabet::CHARS_62;
use crate::error::CryptoError;

/// Base used when none is given.
pub const DEFAULT_BASE: u32 = 16;

/// Smallest accepted base.
pub const MIN_BASE: u32 = 2;

/// Largest accepted base (size of the base-62 alphabet).
pub const MAX_BASE: u32 = 62;

/// Generate a 128-bit identifier.
///
/// `simple` keeps all 128 bits random; otherwise the version and variant
/// bits of an RFC 4122 version-4 UUID are set. `translate` renders the
/// `8-4-4-4-12` hyphenated form instead of 32 hex characters.
///
/// # Errors
///
/// Returns [`CryptoError::RandomSource`] if the CSPRNG fails.
pub fn generate_uuid(simple: bool, translate: bool) -> Result<String, CryptoError> {
    let bytes = random_array::<16>()?;
    let uuid = if simple {
        Uuid::from_bytes(bytes)
    } else {
        Builder::from_random_bytes(bytes).into_uuid()
    };

    Ok(if translate {
        uuid.hyphenated().to_string()
    } else {
        uuid.simple().to_string()
    })
}

/// Generate 64 random bits rendered in `base` (default 16).
///
/// The output is left-padded with `'0'` to the width of `u64::MAX` in that
/// base, so every call for a given base has the same length.
///
/// # Errors
///
/// - [`CryptoError::InvalidBase`] if `base` is outside `2..=62`
/// - [`CryptoError::RandomSource`] if the CSPRNG fails
pub fn generate_short_uuid(base: Option<u32>) -> Result<String, CryptoError> {
    let base = check_base(base)?;
    let value = u64::from_be_bytes(random_array::<8>()?);
    Ok(to_radix(u128::from(value), base, digit_count(u128::from(u64::MAX), base)))
}

/// Generate 128 random bits rendered in `base` (default 16).
///
/// # Errors
///
/// Same as [`generate_short_uuid`].
pub fn generate_long_uuid(base: Option<u32>) -> Result<String, CryptoError> {
    let base = check_base(base)?;
    let value = u128::from_be_bytes(random_array::<16>()?);
    Ok(to_radix(value, base, digit_count(u128::MAX, base)))
}

fn check_base(base: Option<u32>) -> Result<u32, CryptoError> {
    let base = base.unwrap_or(DEFAULT_BASE);
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(base)
    } else {
        Err(CryptoError::InvalidBase { base })
    }
}

fn random_array<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut bytes = [0u8; N];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::RandomSource(format!("CSPRNG fill failed: {e}")))?;
    Ok(bytes)
}

/// Number of base-`base` digits needed to write `max`.
fn digit_count(mut max: u128, base: u32) -> usize {
    let base = u128::from(base);
    let mut count = 0usize;
    while max > 0 {
        max = max.checked_div(base).unwrap_or(0);
        count = count.saturating_add(1);
    }
    count.max(1)
}

/// Render `value` in `base` over the base-62 alphabet, padded to `width`.
fn to_radix(mut value: u128, base: u32, width: usize) -> String {
    let digits = CHARS_62.as_bytes();
    let base = u128::from(base);
    let mut out = Vec::with_capacity(width);

    while value > 0 {
        let digit = value.checked_rem(base).unwrap_or(0);
        // digit < base <= 62
        out.push(digits[usize::try_from(digit).unwrap_or(0)]);
        value = value.checked_div(base).unwrap_or(0);
    }
    while out.len() < width {
        out.push(b'0');
    }

    out.reverse();
    out.into_iter().map(char::from).collect()
}
