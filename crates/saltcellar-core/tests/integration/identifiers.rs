//! Integration tests for UUIDs and passwords.

use std::collections::HashSet;

use saltcellar_core::{
    generate_long_uuid, generate_password, generate_short_uuid, generate_uuid, CryptoError,
    CHARS_62,
};

#[test]
fn uuid_forms() {
    assert_eq!(generate_uuid(true, false).unwrap().len(), 32);
    assert_eq!(generate_uuid(false, false).unwrap().len(), 32);
    assert_eq!(generate_uuid(true, true).unwrap().len(), 36);

    let v4 = generate_uuid(false, true).unwrap();
    assert_eq!(&v4[14..15], "4", "{v4}");
}

#[test]
fn uuids_are_unique() {
    let ids: HashSet<String> = (0..1000).map(|_| generate_uuid(true, false).unwrap()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn radix_uuids_use_base_prefix() {
    for base in [2u32, 10, 16, 36, 62] {
        let digits = &CHARS_62[..base as usize];
        let short = generate_short_uuid(Some(base)).unwrap();
        let long = generate_long_uuid(Some(base)).unwrap();
        assert!(short.chars().all(|c| digits.contains(c)), "base {base}: {short}");
        assert!(long.chars().all(|c| digits.contains(c)), "base {base}: {long}");
        assert!(long.len() > short.len());
    }
}

#[test]
fn radix_out_of_range() {
    assert_eq!(
        generate_short_uuid(Some(0)),
        Err(CryptoError::InvalidBase { base: 0 })
    );
}

#[test]
fn password_defaults() {
    let pw = generate_password(8, true).unwrap();
    assert_eq!(pw.len(), 8);
    assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn password_length_too_short() {
    assert!(matches!(
        generate_password(3, true),
        Err(CryptoError::PasswordGeneration(_))
    ));
}
