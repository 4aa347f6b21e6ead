//! Adaptive password hashing with Argon2id, PHC string output.

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

use super::{acceptable, Oneway};
use crate::salt::draw;

/// Random salt length in bytes.
const SALT_LEN: usize = 16;

/// Argon2id cost parameters.
///
/// Fields use the `argon2` crate convention: `m_cost` is in KiB.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Argon2Options {
    /// Memory cost in kibibytes.
    pub m_cost: u32,
    /// Number of iterations.
    pub t_cost: u32,
    /// Degree of parallelism.
    pub p_cost: u32,
}

impl Default for Argon2Options {
    fn default() -> Self {
        Self {
            m_cost: Params::DEFAULT_M_COST,
            t_cost: Params::DEFAULT_T_COST,
            p_cost: Params::DEFAULT_P_COST,
        }
    }
}

/// Argon2id password hash.
///
/// Verification reads the cost parameters from the stored PHC string, so a
/// default-constructed instance verifies hashes made with any options.
#[derive(Clone, Debug, Default)]
pub struct Argon2Password {
    options: Argon2Options,
}

impl Argon2Password {
    /// Create a hasher with the given cost parameters.
    #[must_use]
    pub const fn new(options: Argon2Options) -> Self {
        Self { options }
    }
}

impl Oneway for Argon2Password {
    type Options = Argon2Options;

    fn hash(&self, input: &str) -> Option<String> {
        if !acceptable(input) {
            return None;
        }

        let params = Params::new(
            self.options.m_cost,
            self.options.t_cost,
            self.options.p_cost,
            None,
        )
        .map_err(|e| tracing::warn!("invalid argon2 params: {e}"))
        .ok()?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let salt_bytes = draw(&mut OsRng, SALT_LEN)
            .map_err(|e| tracing::warn!("{e}"))
            .ok()?;
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| tracing::warn!("salt encoding failed: {e}"))
            .ok()?;

        argon2
            .hash_password(input.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| tracing::warn!("argon2id hashing failed: {e}"))
            .ok()
    }

    fn verify(&self, input: &str, input_hash: &str) -> bool {
        if !acceptable(input) {
            return false;
        }
        let Ok(parsed) = PasswordHash::new(input_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(input.as_bytes(), &parsed)
            .is_ok()
    }

    fn options(&self) -> &Argon2Options {
        &self.options
    }
}
