//! Character-frequency tests for salt output.
//!
//! Pearson's chi-square statistic over the alphabet:
//!
//! X² = Σ (observed − expected)² / expected
//!
//! | Alphabet | Degrees of freedom | Mean | Our threshold (p ≈ 1e-6) |
//! |----------|--------------------|------|--------------------------|
//! | base 16  | 15                 | 15   | 50                       |
//! | base 36  | 31                 | 31   | 75                       |
//! | base 62  | 61                 | 61   | 130                      |
//!
//! The base-62 case is the one that matters: symbols 62 and 63 are either
//! substituted by a uniform draw (default policy) or redrawn from the CSPRNG,
//! and both must leave every character equally likely. A systematic skew,
//! such as mapping out-of-range symbols onto a fixed character, pushes X²
//! into the thousands at this sample size.
//!
//! Five-bit symbols only reach the first 32 base-36 characters, so the
//! base-36 statistic runs over those 32 and `w`..`z` must never appear.

use saltcellar_core::{Alphabet, OutOfRangePolicy, SaltGenerator};

const SALTS: usize = 2000;
const SALT_LENGTH: usize = 64;

#[allow(clippy::cast_precision_loss)]
fn chi_square(policy: OutOfRangePolicy, bits: u8) -> f64 {
    let alphabet = Alphabet::for_bits(bits).expect("valid width");
    let generator = SaltGenerator::new(policy);

    let mut counts = vec![0u64; alphabet.size()];
    for _ in 0..SALTS {
        let salt = generator
            .generate(Some(SALT_LENGTH), Some(bits))
            .expect("salt should generate");
        for c in salt.chars() {
            let index = alphabet
                .as_str()
                .find(c)
                .expect("char must belong to the alphabet");
            counts[index] += 1;
        }
    }

    let reachable = alphabet.size().min(1 << bits);
    assert!(
        counts[reachable..].iter().all(|&n| n == 0),
        "unreachable characters produced"
    );

    let expected = (SALTS * SALT_LENGTH) as f64 / reachable as f64;
    counts[..reachable]
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn base16_is_uniform() {
    let x2 = chi_square(OutOfRangePolicy::Substitute, 4);
    assert!(x2 < 50.0, "base16 chi-square too high: {x2:.2}");
}

#[test]
fn base36_is_uniform() {
    let x2 = chi_square(OutOfRangePolicy::Substitute, 5);
    assert!(x2 < 75.0, "base36 chi-square too high: {x2:.2}");
}

#[test]
fn base62_substitute_is_uniform() {
    let x2 = chi_square(OutOfRangePolicy::Substitute, 6);
    assert!(x2 < 130.0, "base62 chi-square too high: {x2:.2}");
}

#[test]
fn base62_redraw_is_uniform() {
    let x2 = chi_square(OutOfRangePolicy::Redraw, 6);
    assert!(x2 < 130.0, "base62 chi-square too high: {x2:.2}");
}

/// Two consecutive salts must differ; a collision at 128 base-62 chars means
/// the byte source is broken.
#[test]
fn consecutive_salts_differ() {
    let generator = SaltGenerator::default();
    let a = generator.generate(None, None).expect("salt should generate");
    let b = generator.generate(None, None).expect("salt should generate");
    assert_ne!(a, b);
}
