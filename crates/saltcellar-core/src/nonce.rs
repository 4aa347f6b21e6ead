//! Hex nonces whose length selects the digest algorithm.
//!
//! | Length | Algorithm |
//! |--------|-----------|
//! | 8      | FNV-1a 32 |
//! | 16     | FNV-1a 64 |
//! | 32     | MD5       |
//! | 40     | SHA-1     |
//! | 64     | SHA-256   |
//! | 128    | SHA-512   |
//!
//! The seed is either 128 bytes from `OsRng` or a time-based serial. The
//! digest is not used for its collision resistance, only as a fixed-width
//! mixer, so the legacy algorithms are acceptable here.

use data_encoding::HEXLOWER;
use md5::{Digest, Md5};
use rand::rngs::OsRng;
use ring::digest;

use crate::error::CryptoError;
use crate::salt::draw;
use crate::serial::generate_serial;

/// Default nonce length (SHA-1).
pub const DEFAULT_NONCE_LENGTH: usize = 40;

/// Number of CSPRNG bytes digested into a secure nonce.
const SEED_LEN: usize = 128;

const FNV32_OFFSET: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;
const FNV64_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV64_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Digest algorithm used to render a nonce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NonceAlgorithm {
    /// 32-bit FNV-1a.
    Fnv1a32,
    /// 64-bit FNV-1a.
    Fnv1a64,
    /// MD5.
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-256.
    Sha256,
    /// SHA-512.
    Sha512,
}

/// Nonce length → algorithm. Ordered by length.
pub const NONCE_ALGORITHMS: &[(usize, NonceAlgorithm)] = &[
    (8, NonceAlgorithm::Fnv1a32),
    (16, NonceAlgorithm::Fnv1a64),
    (32, NonceAlgorithm::Md5),
    (40, NonceAlgorithm::Sha1),
    (64, NonceAlgorithm::Sha256),
    (128, NonceAlgorithm::Sha512),
];

impl NonceAlgorithm {
    /// Look up the algorithm assigned to a nonce `length`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::UnsupportedNonceLength`] listing the accepted
    /// lengths when `length` is not in [`NONCE_ALGORITHMS`].
    pub fn for_length(length: usize) -> Result<Self, CryptoError> {
        NONCE_ALGORITHMS
            .iter()
            .find(|(len, _)| *len == length)
            .map(|(_, algorithm)| *algorithm)
            .ok_or_else(|| CryptoError::UnsupportedNonceLength {
                length,
                allowed: allowed_lengths(),
            })
    }

    /// Length of the hex rendering of this algorithm's digest.
    #[must_use]
    pub const fn hex_len(self) -> usize {
        match self {
            Self::Fnv1a32 => 8,
            Self::Fnv1a64 => 16,
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha256 => 64,
            Self::Sha512 => 128,
        }
    }

    /// Digest `seed` and return lowercase hex.
    #[must_use]
    pub fn digest(self, seed: &[u8]) -> String {
        match self {
            Self::Fnv1a32 => HEXLOWER.encode(&fnv1a32(seed).to_be_bytes()),
            Self::Fnv1a64 => HEXLOWER.encode(&fnv1a64(seed).to_be_bytes()),
            Self::Md5 => HEXLOWER.encode(Md5::digest(seed).as_slice()),
            Self::Sha1 => ring_hex(&digest::SHA1_FOR_LEGACY_USE_ONLY, seed),
            Self::Sha256 => ring_hex(&digest::SHA256, seed),
            Self::Sha512 => ring_hex(&digest::SHA512, seed),
        }
    }
}

/// Generate a hex nonce of `length` characters.
///
/// With `use_secure_random` the seed is 128 bytes from `OsRng`; otherwise it
/// is a serial from [`generate_serial`].
///
/// # Errors
///
/// - [`CryptoError::UnsupportedNonceLength`] if `length` has no algorithm
/// - [`CryptoError::RandomSource`] if the CSPRNG fails
pub fn generate_nonce(length: usize, use_secure_random: bool) -> Result<String, CryptoError> {
    let algorithm = NonceAlgorithm::for_length(length)?;

    let nonce = if use_secure_random {
        let seed = draw(&mut OsRng, SEED_LEN)?;
        algorithm.digest(&seed)
    } else {
        algorithm.digest(generate_serial().as_bytes())
    };

    tracing::debug!(length, ?algorithm, use_secure_random, "nonce generated");
    Ok(nonce)
}

/// Comma-separated accepted nonce lengths, e.g. `8,16,32,40,64,128`.
#[must_use]
pub fn allowed_lengths() -> String {
    NONCE_ALGORITHMS
        .iter()
        .map(|(len, _)| len.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn ring_hex(algorithm: &'static digest::Algorithm, seed: &[u8]) -> String {
    HEXLOWER.encode(digest::digest(algorithm, seed).as_ref())
}

fn fnv1a32(data: &[u8]) -> u32 {
    data.iter().fold(FNV32_OFFSET, |hash, &b| {
        (hash ^ u32::from(b)).wrapping_mul(FNV32_PRIME)
    })
}

fn fnv1a64(data: &[u8]) -> u64 {
    data.iter().fold(FNV64_OFFSET, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV64_PRIME)
    })
}
