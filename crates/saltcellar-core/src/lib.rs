//! `saltcellar-core` — random salts, nonces, serials, identifiers and one-way hashes.
//!
//! Pure computation: no network, no async. The only I/O is the optional
//! settings file in [`config`]. All randomness comes from `OsRng` except the
//! documented base-62 substitution in [`salt`].

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod alphabet;
pub mod config;
pub mod error;

pub mod salt;

pub mod nonce;
pub mod serial;

pub mod password;
pub mod uuid;

pub mod oneway;

pub use alphabet::{Alphabet, BASE_16, BASE_36, BASE_62, CHARS_16, CHARS_36, CHARS_62};
pub use config::Settings;
pub use error::CryptoError;
pub use nonce::{generate_nonce, NonceAlgorithm, DEFAULT_NONCE_LENGTH, NONCE_ALGORITHMS};
pub use oneway::{
    make, validate, Argon2Options, Argon2Password, DigestAlgorithm, KeyedDigest,
    KeyedDigestOptions, Oneway,
};
pub use password::{generate_password, DEFAULT_PASSWORD_LENGTH};
pub use salt::{generate_salt, render, BitExtractor, OutOfRangePolicy, SaltGenerator};
pub use serial::generate_serial;
pub use self::uuid::{generate_long_uuid, generate_short_uuid, generate_uuid};
