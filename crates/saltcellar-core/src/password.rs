//! Random password generation.
//!
//! Every character comes from `OsRng`. Each character class in use appears at
//! least once; the remaining positions are drawn from the union of the
//! classes and the whole password is shuffled afterwards.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;

use crate::error::CryptoError;

/// Minimum allowed password length.
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Maximum allowed password length.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Default password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:',.<>?/~";

const ALPHANUMERIC: [&[u8]; 3] = [UPPER, LOWER, DIGITS];
const PRINTABLE: [&[u8]; 4] = [UPPER, LOWER, DIGITS, SYMBOLS];

/// Generate a password of `length` characters.
///
/// `letters_only` restricts the output to `A-Z`, `a-z` and `0-9`; otherwise
/// symbols are mixed in as well.
///
/// # Errors
///
/// Returns [`CryptoError::PasswordGeneration`] if `length` is outside
/// [`MIN_PASSWORD_LENGTH`]..=[`MAX_PASSWORD_LENGTH`].
pub fn generate_password(length: usize, letters_only: bool) -> Result<String, CryptoError> {
    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(CryptoError::PasswordGeneration(format!(
            "length must be between {MIN_PASSWORD_LENGTH} and {MAX_PASSWORD_LENGTH}, got {length}"
        )));
    }

    let classes: &[&[u8]] = if letters_only {
        &ALPHANUMERIC
    } else {
        &PRINTABLE
    };
    let pool = classes.concat();
    let mut rng = OsRng;

    // MIN_PASSWORD_LENGTH covers every class, so `filler` never saturates.
    let mut chars: Vec<u8> = Vec::with_capacity(length);
    for class in classes {
        chars.extend(class.choose(&mut rng));
    }
    let filler = length.saturating_sub(chars.len());
    chars.extend((0..filler).filter_map(|_| pool.choose(&mut rng)));
    chars.shuffle(&mut rng);

    tracing::debug!(length, letters_only, "password generated");
    String::from_utf8(chars)
        .map_err(|e| CryptoError::PasswordGeneration(format!("non-ASCII password byte: {e}")))
}
