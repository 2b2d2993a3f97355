//! Property tests for radix decoding/encoding

use num_bigint::{BigInt, BigUint};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir_recover::codec::{decode, decode_in, encode};
use shamir_recover::domain::Radix;

/// Wrapper for arbitrary non-negative big integers
#[derive(Clone, Debug)]
struct BigValue(BigUint);

impl Arbitrary for BigValue {
    fn arbitrary(g: &mut Gen) -> Self {
        BigValue(BigUint::new(Vec::<u32>::arbitrary(g)))
    }
}

/// Wrapper for radices that have a single-character digit spelling (2..=36)
#[derive(Clone, Copy, Debug)]
struct AlphanumericRadix(u32);

impl Arbitrary for AlphanumericRadix {
    fn arbitrary(g: &mut Gen) -> Self {
        AlphanumericRadix(u32::arbitrary(g) % 35 + 2)
    }
}

/// Encoding a value and decoding it again returns the value
#[quickcheck]
fn prop_encode_decode_round_trip(value: BigValue, radix: AlphanumericRadix) -> bool {
    let BigValue(value) = value;
    let radix = Radix::new(radix.0).unwrap();

    let Ok(text) = encode(&value, &radix) else {
        return false;
    };
    decode_in(&text, &radix) == Ok(BigInt::from(value))
}

/// Upper- and lowercase digits decode to the same value
#[quickcheck]
fn prop_decode_is_case_insensitive(value: BigValue, radix: AlphanumericRadix) -> bool {
    let BigValue(value) = value;
    let radix = Radix::new(radix.0).unwrap();
    let text = encode(&value, &radix).unwrap();

    decode_in(&text.to_uppercase(), &radix) == decode_in(&text, &radix)
}

/// Decoding with a textual radix agrees with the standard parser
#[quickcheck]
fn prop_decode_matches_std_for_u64(value: u64, radix: AlphanumericRadix) -> bool {
    let text = encode(&BigUint::from(value), &Radix::new(radix.0).unwrap()).unwrap();
    let expected = u64::from_str_radix(&text, radix.0).unwrap();

    decode(&text, &radix.0.to_string()) == Ok(BigInt::from(expected))
}

/// A digit equal to the radix is always rejected
#[quickcheck]
fn prop_digit_equal_to_radix_is_rejected(radix: AlphanumericRadix) -> bool {
    if radix.0 == 36 {
        return true; // no character spells 36
    }
    let digit = char::from_digit(radix.0, 36).unwrap();
    decode(&format!("1{digit}"), &radix.0.to_string()).is_err()
}
