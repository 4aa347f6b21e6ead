//! One-way hashing behind a common `hash` / `verify` contract.
//!
//! Callers pick a variant once, through its constructor, and then use the
//! symmetric entry points:
//!
//! ```
//! use saltcellar_core::oneway::{make, validate, KeyedDigest};
//!
//! let stored = make(KeyedDigest::new, "s3cret", None).expect("hash");
//! assert!(validate(KeyedDigest::new, "s3cret", &stored));
//! ```
//!
//! Options are merged into the variant defaults with struct-update syntax,
//! e.g. `Argon2Options { t_cost: 3, ..Default::default() }`.
//!
//! `hash` never raises: inputs the algorithm refuses (embedded NUL, longer
//! than [`MAX_INPUT_LEN`], backend failure) yield `None`.

mod argon2id;
mod keyed;

pub use argon2id::{Argon2Options, Argon2Password};
pub use keyed::{DigestAlgorithm, KeyedDigest, KeyedDigestOptions};

/// Longest input, in bytes, any variant accepts.
pub const MAX_INPUT_LEN: usize = 4096;

/// A one-way hash algorithm.
pub trait Oneway {
    /// Variant-specific options; `Default` gives the variant defaults.
    type Options: Default;

    /// Hash `input`, or `None` if the algorithm rejects it.
    fn hash(&self, input: &str) -> Option<String>;

    /// Check `input` against a hash produced by [`Oneway::hash`].
    fn verify(&self, input: &str, input_hash: &str) -> bool;

    /// The options in effect, after merging over the defaults.
    fn options(&self) -> &Self::Options;
}

/// Build a variant from `options` (defaults when `None`) and hash `input`.
pub fn make<V, O, F>(factory: F, input: &str, options: Option<O>) -> Option<String>
where
    V: Oneway<Options = O>,
    O: Default,
    F: FnOnce(O) -> V,
{
    factory(options.unwrap_or_default()).hash(input)
}

/// Build a variant with default options and verify `input` against `input_hash`.
pub fn validate<V, O, F>(factory: F, input: &str, input_hash: &str) -> bool
where
    V: Oneway<Options = O>,
    O: Default,
    F: FnOnce(O) -> V,
{
    factory(O::default()).verify(input, input_hash)
}

/// Whether `input` is acceptable to every variant.
fn acceptable(input: &str) -> bool {
    if input.len() > MAX_INPUT_LEN {
        tracing::warn!(len = input.len(), max = MAX_INPUT_LEN, "hash input too long");
        return false;
    }
    if input.contains('\0') {
        tracing::warn!("hash input contains a NUL byte");
        return false;
    }
    true
}
