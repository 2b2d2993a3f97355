//! Arbitrary-radix encoding of share values
//!
//! Share values travel as text: a digit string plus the radix it is written in.
//! This module turns that text into an exact [`BigInt`] and back.
//!
//! # Overview
//!
//! - Digits are case-insensitive alphanumerics: `0-9` then `a-z` for 10..=35.
//! - Every digit must be below the radix. Signs, separators and other
//!   characters are rejected rather than skipped.
//! - Values have no upper bound; secrets routinely exceed a machine word.
//!
//! # Examples
//!
//! ```rust
//! use shamir_recover::codec::{decode, encode};
//! use shamir_recover::domain::Radix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let value = decode("ff", "16")?;
//! assert_eq!(value.to_string(), "255");
//!
//! let text = encode(value.magnitude(), &Radix::new(2)?)?;
//! assert_eq!(text, "11111111");
//! # Ok(())
//! # }
//! ```

use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::domain::Radix;
use crate::error::RecoveryError;

/// Radix used to map characters to digit values (`0-9a-z`)
const DIGIT_ALPHABET: u32 = 36;

/// Decodes `digits` written in the radix given by the text token `radix`
///
/// Surrounding whitespace of both arguments is ignored.
///
/// # Errors
/// - [`RecoveryError::InvalidRadix`] if `radix` is missing, non-numeric, or below 2
/// - [`RecoveryError::InvalidDigit`] if a character is not a digit of that radix
/// - [`RecoveryError::EmptyDigits`] if there are no digits at all
///
/// # Examples
///
/// ```rust
/// use shamir_recover::codec::decode;
/// use shamir_recover::RecoveryError;
///
/// assert_eq!(decode("213", "4").unwrap().to_string(), "39");
/// assert!(matches!(decode("12", "abc"), Err(RecoveryError::InvalidRadix { .. })));
/// assert!(matches!(decode("1Z", "10"), Err(RecoveryError::InvalidDigit { .. })));
/// ```
pub fn decode(digits: &str, radix: &str) -> Result<BigInt, RecoveryError> {
    decode_in(digits, &Radix::parse(radix)?)
}

/// Decodes `digits` in an already validated radix
///
/// # Errors
/// Returns [`RecoveryError::InvalidDigit`] or [`RecoveryError::EmptyDigits`]
pub fn decode_in(digits: &str, radix: &Radix) -> Result<BigInt, RecoveryError> {
    let digits = digits.trim();
    if digits.is_empty() {
        return Err(RecoveryError::EmptyDigits);
    }

    // Horner evaluation, most significant digit first
    let base: &BigUint = radix;
    let mut value = BigUint::zero();
    for (position, ch) in digits.chars().enumerate() {
        let digit = ch
            .to_digit(DIGIT_ALPHABET)
            .filter(|&d| radix.admits(d))
            .ok_or_else(|| RecoveryError::InvalidDigit {
                digit: ch,
                position,
                radix: radix.clone(),
            })?;
        value = value * base + digit;
    }

    Ok(BigInt::from(value))
}

/// Encodes a non-negative value as lowercase digits in `radix`
///
/// # Errors
/// Returns [`RecoveryError::InvalidRadix`] for radices above 36, whose digits
/// have no single-character spelling
pub fn encode(value: &BigUint, radix: &Radix) -> Result<String, RecoveryError> {
    let Some(radix) = radix
        .to_u32()
        .filter(|&r| r <= Radix::MAX_ALPHANUMERIC)
    else {
        return Err(RecoveryError::InvalidRadix {
            radix: radix.to_string(),
        });
    };
    Ok(value.to_str_radix(radix))
}
