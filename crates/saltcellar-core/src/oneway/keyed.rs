//! Salted HMAC digests.
//!
//! Output format: `$hmac-sha256$<salt>$<hex mac>`, where the MAC covers
//! `salt || input` under the configured key. The salt is base-62, so it
//! never contains the `$` separator.

use std::fmt;

use data_encoding::HEXLOWER;
use ring::hmac;
use serde::{Deserialize, Serialize};

use super::{acceptable, Oneway};
use crate::salt::{generate_salt, DEFAULT_BITS_PER_CHAR};

/// Default salt length in characters.
const DEFAULT_SALT_LENGTH: usize = 16;

/// HMAC hash function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DigestAlgorithm {
    /// HMAC-SHA256.
    #[default]
    Sha256,
    /// HMAC-SHA512.
    Sha512,
}

impl DigestAlgorithm {
    /// Identifier stored in the hash string.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Sha256 => "hmac-sha256",
            Self::Sha512 => "hmac-sha512",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "hmac-sha256" => Some(Self::Sha256),
            "hmac-sha512" => Some(Self::Sha512),
            _ => None,
        }
    }

    fn to_ring_algorithm(self) -> hmac::Algorithm {
        match self {
            Self::Sha256 => hmac::HMAC_SHA256,
            Self::Sha512 => hmac::HMAC_SHA512,
        }
    }
}

/// Options for [`KeyedDigest`].
///
/// `Debug` masks the key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyedDigestOptions {
    /// HMAC key.
    pub key: String,
    /// Hash function used when hashing; verification follows the stored tag.
    pub algorithm: DigestAlgorithm,
    /// Salt length in base-62 characters (at least 2).
    pub salt_length: usize,
}

impl Default for KeyedDigestOptions {
    fn default() -> Self {
        Self {
            key: String::new(),
            algorithm: DigestAlgorithm::default(),
            salt_length: DEFAULT_SALT_LENGTH,
        }
    }
}

impl fmt::Debug for KeyedDigestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedDigestOptions")
            .field("key", &"***")
            .field("algorithm", &self.algorithm)
            .field("salt_length", &self.salt_length)
            .finish()
    }
}

/// Salted, keyed HMAC digest.
#[derive(Clone, Debug, Default)]
pub struct KeyedDigest {
    options: KeyedDigestOptions,
}

impl KeyedDigest {
    /// Create a digest with the given options.
    #[must_use]
    pub const fn new(options: KeyedDigestOptions) -> Self {
        Self { options }
    }

    fn key(&self, algorithm: DigestAlgorithm) -> hmac::Key {
        hmac::Key::new(algorithm.to_ring_algorithm(), self.options.key.as_bytes())
    }
}

fn message(salt: &str, input: &str) -> Vec<u8> {
    [salt.as_bytes(), input.as_bytes()].concat()
}

impl Oneway for KeyedDigest {
    type Options = KeyedDigestOptions;

    fn hash(&self, input: &str) -> Option<String> {
        if !acceptable(input) {
            return None;
        }
        let algorithm = self.options.algorithm;
        let salt = generate_salt(Some(self.options.salt_length), Some(DEFAULT_BITS_PER_CHAR))
            .map_err(|e| tracing::warn!("keyed digest salt rejected: {e}"))
            .ok()?;

        let tag = hmac::sign(&self.key(algorithm), &message(&salt, input));
        Some(format!(
            "${}${salt}${}",
            algorithm.tag(),
            HEXLOWER.encode(tag.as_ref())
        ))
    }

    fn verify(&self, input: &str, input_hash: &str) -> bool {
        if !acceptable(input) {
            return false;
        }
        let Some(rest) = input_hash.strip_prefix('$') else {
            return false;
        };
        let mut parts = rest.splitn(3, '$');
        let (Some(tag), Some(salt), Some(mac_hex)) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        let Some(algorithm) = DigestAlgorithm::from_tag(tag) else {
            return false;
        };
        let Ok(mac) = HEXLOWER.decode(mac_hex.as_bytes()) else {
            return false;
        };

        hmac::verify(&self.key(algorithm), &message(salt, input), &mac).is_ok()
    }

    fn options(&self) -> &KeyedDigestOptions {
        &self.options
    }
}
