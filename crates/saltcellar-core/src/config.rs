//! Generator defaults, stored as plain JSON.
//!
//! Every field has a default, so a partial or missing file is valid. A file
//! that fails to parse is ignored and the defaults are used instead.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CryptoError;
use crate::nonce::DEFAULT_NONCE_LENGTH;
use crate::oneway::{Argon2Options, KeyedDigestOptions};
use crate::password::DEFAULT_PASSWORD_LENGTH;
use crate::salt::{OutOfRangePolicy, SaltGenerator, DEFAULT_BITS_PER_CHAR, DEFAULT_LENGTH};
use crate::uuid::DEFAULT_BASE;

/// Default generator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Salt length in characters.
    #[serde(default = "default_salt_length")]
    pub salt_length: usize,

    /// Salt bits-per-char (4, 5 or 6).
    #[serde(default = "default_bits_per_char")]
    pub bits_per_char: u8,

    /// Handling of symbols outside the base-62 alphabet.
    #[serde(default)]
    pub out_of_range: OutOfRangePolicy,

    /// Nonce length (selects the digest).
    #[serde(default = "default_nonce_length")]
    pub nonce_length: usize,

    /// Seed nonces from the CSPRNG rather than a serial.
    #[serde(default = "default_true")]
    pub nonce_secure_random: bool,

    /// Password length.
    #[serde(default = "default_password_length")]
    pub password_length: usize,

    /// Restrict passwords to letters and digits.
    #[serde(default = "default_true")]
    pub password_letters_only: bool,

    /// Base for short and long UUIDs.
    #[serde(default = "default_uuid_base")]
    pub uuid_base: u32,

    /// Argon2id cost parameters.
    #[serde(default)]
    pub argon2: Argon2Options,

    /// Keyed digest options.
    #[serde(default)]
    pub keyed_digest: KeyedDigestOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            salt_length: default_salt_length(),
            bits_per_char: default_bits_per_char(),
            out_of_range: OutOfRangePolicy::default(),
            nonce_length: default_nonce_length(),
            nonce_secure_random: true,
            password_length: default_password_length(),
            password_letters_only: true,
            uuid_base: default_uuid_base(),
            argon2: Argon2Options::default(),
            keyed_digest: KeyedDigestOptions::default(),
        }
    }
}

const fn default_salt_length() -> usize {
    DEFAULT_LENGTH
}
const fn default_bits_per_char() -> u8 {
    DEFAULT_BITS_PER_CHAR
}
const fn default_nonce_length() -> usize {
    DEFAULT_NONCE_LENGTH
}
const fn default_password_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}
const fn default_uuid_base() -> u32 {
    DEFAULT_BASE
}
const fn default_true() -> bool {
    true
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// Returns [`Default::default()`] when the file is missing or contains
    /// invalid JSON.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        };
        serde_json::from_str(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "ignoring invalid settings file: {e}");
            Self::default()
        })
    }

    /// Persist settings to `path`.
    ///
    /// Writes to a sibling `.tmp` file first, then renames it over `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::Config`] if encoding, writing or renaming fails.
    pub fn save(&self, path: &Path) -> Result<(), CryptoError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CryptoError::Config(format!("encode failed: {e}")))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| CryptoError::Config(format!("write {} failed: {e}", tmp.display())))?;
        fs::rename(&tmp, path)
            .map_err(|e| CryptoError::Config(format!("rename to {} failed: {e}", path.display())))
    }

    /// Salt generator using the configured out-of-range policy.
    #[must_use]
    pub const fn salt_generator(&self) -> SaltGenerator {
        SaltGenerator::new(self.out_of_range)
    }
}
