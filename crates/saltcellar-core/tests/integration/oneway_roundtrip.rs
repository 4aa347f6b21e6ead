//! Integration tests for the one-way hash contract.
//!
//! `validate(input, make(input))` holds for every variant, and a hash of a
//! different input never validates.

use saltcellar_core::oneway::MAX_INPUT_LEN;
use saltcellar_core::{
    make, validate, Argon2Options, Argon2Password, KeyedDigest, KeyedDigestOptions, Oneway,
};

/// Small params for fast tests.
fn fast_argon2() -> Option<Argon2Options> {
    Some(Argon2Options {
        m_cost: 32,
        t_cost: 1,
        p_cost: 1,
    })
}

const INPUTS: &[&str] = &["", "a", "correct horse battery staple", "päßwörd", "$dollar$signs$"];

#[test]
fn argon2_make_then_validate() {
    for input in INPUTS {
        let hash = make(Argon2Password::new, input, fast_argon2()).unwrap();
        assert!(validate(Argon2Password::new, input, &hash), "{input:?}");

        let other = make(Argon2Password::new, &format!("{input}x"), fast_argon2()).unwrap();
        assert!(!validate(Argon2Password::new, input, &other), "{input:?}");
    }
}

#[test]
fn keyed_make_then_validate() {
    for input in INPUTS {
        let hash = make(KeyedDigest::new, input, None).unwrap();
        assert!(validate(KeyedDigest::new, input, &hash), "{input:?}");

        let other = make(KeyedDigest::new, &format!("{input}x"), None).unwrap();
        assert!(!validate(KeyedDigest::new, input, &other), "{input:?}");
    }
}

/// Hashes from one variant never verify under the other.
#[test]
fn variants_do_not_cross_verify() {
    let argon = make(Argon2Password::new, "secret", fast_argon2()).unwrap();
    let keyed = make(KeyedDigest::new, "secret", None).unwrap();
    assert!(!validate(KeyedDigest::new, "secret", &argon));
    assert!(!validate(Argon2Password::new, "secret", &keyed));
}

/// Soft failure: rejected inputs yield `None`, not a panic or error.
#[test]
fn rejected_inputs_are_absent() {
    let oversized = "a".repeat(MAX_INPUT_LEN + 1);
    for input in ["nul\0byte", oversized.as_str()] {
        assert!(make(Argon2Password::new, input, fast_argon2()).is_none());
        assert!(make(KeyedDigest::new, input, None).is_none());
    }
}

/// Callers can hold a variant as a trait object once constructed.
#[test]
fn dyn_variants() {
    let keyed_options = KeyedDigestOptions {
        key: "pepper".to_string(),
        ..KeyedDigestOptions::default()
    };
    let variants: Vec<Box<dyn Oneway<Options = KeyedDigestOptions>>> =
        vec![Box::new(KeyedDigest::new(keyed_options))];
    for variant in &variants {
        assert_eq!(variant.options().key, "pepper");
        let hash = variant.hash("secret").unwrap();
        assert!(variant.verify("secret", &hash));
        assert!(!variant.verify("Secret", &hash));
    }
}
