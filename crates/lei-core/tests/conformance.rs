//! # LEI Conformance Tests
//!
//! End-to-end checks against the public API: ISO 7064 reference vectors,
//! real LEIs published by GLEIF, malformed inputs, the registration
//! authority table, and the generator/validator round trip.

use std::collections::HashSet;

use lei_core::{
    check_digits, mod97, registration_authorities, ErrorKind, Lei, LeiError,
    RegistrationAuthority,
};
use proptest::prelude::*;

const KNOWN_GOOD: &[&str] = &[
    "2594007XIACKNMUAW223",
    "54930084UKLVMY22DS16",
    "213800WSGIIZCXF1P572",
    "5493000IBP32UQZ0KL24",
    "RILFO74KP1CM8P6PCT96",
];

#[test]
fn mod97_reference_vectors() {
    let vectors: &[(&str, u32)] = &[
        ("", 0),
        ("1", 1),
        ("02", 2),
        ("96", 96),
        ("97", 0),
        ("98", 1),
        ("9799", 2),
    ];
    for (input, expected) in vectors {
        assert_eq!(mod97(input), Ok(*expected), "mod97({input:?})");
    }
}

#[test]
fn mod97_invalid_character_messages() {
    let cases = [
        ("-1", "invalid character at position 0: -"),
        ("123#", "invalid character at position 3: #"),
    ];
    for (input, message) in cases {
        let err = mod97(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidChar);
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn known_good_leis_parse() {
    for s in KNOWN_GOOD {
        let lei = Lei::parse(s).unwrap_or_else(|e| panic!("{s}: {e}"));
        assert_eq!(lei.to_string(), *s);
    }
}

#[test]
fn malformed_leis_fail_with_expected_kind() {
    let cases = [
        ("2594007XIACKNUAW223", ErrorKind::InvalidLength),
        ("2594007XIACKNUAW22334", ErrorKind::InvalidLength),
        ("2594007XIACKNMUAW224", ErrorKind::InvalidChecksum),
        ("5493000IBP#2UQZ0KL24", ErrorKind::InvalidChar),
    ];
    for (input, kind) in cases {
        let err = Lei::parse(input).unwrap_err();
        assert_eq!(err.kind(), kind, "{input}");
    }
}

#[test]
fn invalid_length_carries_observed_length() {
    for len in (0..=40).filter(|n| *n != 20) {
        let input = "9".repeat(len);
        assert_eq!(Lei::parse(&input), Err(LeiError::InvalidLength(len)));
    }
}

#[test]
fn round_trip_generated_leis() {
    let mut made = HashSet::new();
    for _ in 0..100 {
        let lei = Lei::random();
        assert_eq!(Lei::check(lei.as_str()), Ok(()), "{lei}");
        assert_eq!(mod97(lei.as_str()), Ok(1));
        made.insert(lei);
    }
    assert_eq!(made.len(), 100, "expected 100 distinct random LEIs");
}

#[test]
fn check_digits_rebuild_known_good() {
    for s in KNOWN_GOOD {
        let digits = check_digits(&s[..18]).unwrap();
        assert_eq!(format!("{digits:02}"), &s[18..]);
        assert_eq!(Lei::from_base(&s[..18]).unwrap().as_str(), *s);
    }
}

#[test]
fn registration_authority_membership() {
    for code in ["RA000001", "RA888888", "RA999999"] {
        let ra = RegistrationAuthority::new(code).unwrap();
        assert_eq!(ra.to_string(), code);
    }

    for code in ["RA100001", "AA000001", "RA00009", "RA0000945", "RA100094"] {
        let err = RegistrationAuthority::new(code).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownRa);
        assert_eq!(
            err.to_string(),
            format!("unknown registration authority: {code}")
        );
        assert_eq!(RegistrationAuthority::classify(code).to_string(), "UNKNOWN");
    }
}

#[test]
fn registration_authorities_are_sorted() {
    let table = registration_authorities();
    assert!(!table.is_empty());
    assert!(
        table.windows(2).all(|w| w[0] < w[1]),
        "the registration authorities must be sorted"
    );
}

#[test]
fn lei_prefix_is_not_an_ra_lookup() {
    // An LEI whose first characters resemble an RA code is still validated
    // purely on checksum, and the RA table knows nothing about LEIs.
    let lei = Lei::from_base("RA0000000000000000").unwrap();
    assert_eq!(lei.lou_prefix(), "RA00");
    assert!(RegistrationAuthority::new(lei.as_str()).is_err());
}

fn generated_lei() -> impl Strategy<Value = Lei> {
    "[0-9A-Z]{4}00[0-9A-Z]{12}".prop_map(|base| Lei::from_base(&base).unwrap())
}

proptest! {
    /// Parsing never panics on arbitrary input.
    #[test]
    fn parse_never_panics(input in ".{0,30}") {
        let _ = Lei::parse(&input);
    }

    /// Replacing a digit by another digit, or a letter by another letter,
    /// is always caught by the checksum.
    #[test]
    fn same_class_substitution_detected(
        lei in generated_lei(),
        pos in 0usize..20,
        offset in 1u8..10,
    ) {
        let mut bytes = lei.as_str().as_bytes().to_vec();
        let original = bytes[pos];
        bytes[pos] = if original.is_ascii_digit() {
            b'0' + (original - b'0' + offset) % 10
        } else {
            b'A' + (original - b'A' + offset) % 26
        };
        let mutated = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(Lei::parse(&mutated), Err(LeiError::InvalidChecksum));
    }

    /// Lowercasing any letter of a valid LEI is reported at that position.
    #[test]
    fn lowercase_letter_reported(lei in generated_lei()) {
        if let Some(pos) = lei.as_str().bytes().position(|b| b.is_ascii_uppercase()) {
            let lower = lei.as_str()[pos..=pos].to_ascii_lowercase();
            let mut mutated = lei.as_str().to_string();
            mutated.replace_range(pos..=pos, &lower);
            let err = Lei::parse(&mutated).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::InvalidChar);
            if let LeiError::InvalidChar { position, .. } = err {
                prop_assert_eq!(position, pos);
            }
        }
    }
}
