//! Integration tests for salt generation.
//!
//! Covers the length/alphabet guarantee for every bits-per-char value, input
//! validation, and the rendering of fixed byte buffers.

use rand::rngs::{SmallRng, StdRng};
use rand::SeedableRng;
use saltcellar_core::salt::{byte_budget, DEFAULT_LENGTH};
use saltcellar_core::{
    generate_salt, render, Alphabet, BitExtractor, CryptoError, OutOfRangePolicy, SaltGenerator,
};

/// Every valid (length, bpc) pair yields exactly `length` chars from the alphabet.
#[test]
fn exact_length_for_all_widths() {
    for bits in [4u8, 5, 6] {
        let alphabet = Alphabet::for_bits(bits).unwrap();
        for length in [2usize, 3, 7, 8, 31, 64, 129, 1000] {
            let salt = generate_salt(Some(length), Some(bits)).unwrap();
            assert_eq!(salt.len(), length, "bits={bits} length={length}");
            assert!(
                salt.chars().all(|c| alphabet.contains(c)),
                "bits={bits}: foreign char in {salt}"
            );
        }
    }
}

/// Both policies honor the same contract.
#[test]
fn both_policies_produce_exact_length() {
    for policy in [OutOfRangePolicy::Substitute, OutOfRangePolicy::Redraw] {
        let generator = SaltGenerator::new(policy);
        let salt = generator.generate(Some(500), Some(6)).unwrap();
        assert_eq!(salt.len(), 500);
        assert!(salt.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

/// Defaults: 128 chars of base 62.
#[test]
fn defaults() {
    let salt = generate_salt(None, None).unwrap();
    assert_eq!(salt.len(), DEFAULT_LENGTH);
}

/// Seeded CSPRNG gives reproducible output under the strict policy.
#[test]
fn redraw_is_deterministic_for_seeded_rng() {
    let generator = SaltGenerator::new(OutOfRangePolicy::Redraw);
    let a = generator
        .generate_with(&mut StdRng::seed_from_u64(42), Some(64), Some(6))
        .unwrap();
    let b = generator
        .generate_with(&mut StdRng::seed_from_u64(42), Some(64), Some(6))
        .unwrap();
    assert_eq!(a, b);
}

/// Hex output of a seeded CSPRNG is just its bytes, low nibble first.
#[test]
fn hex_salt_mirrors_bytes() {
    use rand::RngCore;

    let generator = SaltGenerator::default();
    let salt = generator
        .generate_with(&mut StdRng::seed_from_u64(9), Some(8), Some(4))
        .unwrap();

    let mut bytes = [0u8; 4];
    StdRng::seed_from_u64(9).fill_bytes(&mut bytes);
    let expected: String = bytes
        .iter()
        .flat_map(|b| [b & 0x0F, b >> 4])
        .map(|n| char::from_digit(u32::from(n), 16).unwrap())
        .collect();
    assert_eq!(salt, expected);
}

#[test]
fn invalid_length_rejected() {
    assert_eq!(
        generate_salt(Some(1), Some(6)),
        Err(CryptoError::InvalidLength { length: 1 })
    );
}

#[test]
fn invalid_bits_rejected() {
    assert_eq!(
        generate_salt(Some(10), Some(7)),
        Err(CryptoError::InvalidBitsPerChar { bits: 7 })
    );
}

/// Rendering a short buffer reports truncation instead of a short string.
#[test]
fn render_short_buffer_is_truncated() {
    let mut fallback = SmallRng::seed_from_u64(1);
    let bytes = vec![0u8; byte_budget(10, 5) - 1];
    let err = render(&bytes, 10, 5, &mut fallback).unwrap_err();
    assert!(matches!(
        err,
        CryptoError::Truncated {
            requested: 10,
            produced: 9
        }
    ));
}

/// The byte budget always suffices for the requested length.
#[test]
fn byte_budget_is_enough() {
    for bits in [4u8, 5, 6] {
        for length in 2..200 {
            let bytes = vec![0u8; byte_budget(length, bits)];
            let count = BitExtractor::new(&bytes, bits).unwrap().count();
            assert!(count >= length, "bits={bits} length={length} count={count}");
            assert!(count < length + 2, "budget wastes a whole byte");
        }
    }
}
