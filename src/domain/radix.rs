//! `Radix` newtype for encoded share values

use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use crate::error::RecoveryError;

/// Numeral base of an encoded share value (at least 2)
///
/// There is no upper bound, not even a machine-word one: a radix above 36 is
/// accepted, although digits are still drawn from `0-9a-z` so only digit
/// values below 36 can be written.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(BigUint);

impl Radix {
    /// Smallest valid radix
    pub const MIN: u32 = 2;

    /// Largest radix whose every digit value has a single-character spelling
    pub const MAX_ALPHANUMERIC: u32 = 36;

    /// Creates a new radix
    ///
    /// # Errors
    /// Returns [`RecoveryError::InvalidRadix`] if `value` is below 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::Radix;
    ///
    /// assert_eq!(Radix::new(16).unwrap().to_u32(), Some(16));
    /// assert!(Radix::new(1).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, RecoveryError> {
        if value < Self::MIN {
            return Err(RecoveryError::InvalidRadix {
                radix: value.to_string(),
            });
        }
        Ok(Self(BigUint::from(value)))
    }

    /// Base ten, used for plain decimal input
    #[must_use]
    pub fn decimal() -> Self {
        Self(BigUint::from(10u32))
    }

    /// Parses a radix token such as `"16"`, ignoring surrounding whitespace
    ///
    /// The token may be arbitrarily large.
    ///
    /// # Errors
    /// Returns [`RecoveryError::InvalidRadix`] if the token is empty,
    /// not made of decimal digits, or below 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::Radix;
    ///
    /// let wide = Radix::parse("4294967296").unwrap();
    /// assert_eq!(wide.to_u32(), None);
    /// assert!(Radix::parse("abc").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, RecoveryError> {
        let invalid = || RecoveryError::InvalidRadix {
            radix: token.to_string(),
        };
        let trimmed = token.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value = BigUint::parse_bytes(trimmed.as_bytes(), 10).ok_or_else(invalid)?;
        if value < BigUint::from(Self::MIN) {
            return Err(invalid());
        }
        Ok(Self(value))
    }

    /// The radix as a machine word, if it fits
    #[must_use]
    pub fn to_u32(&self) -> Option<u32> {
        self.0.to_u32()
    }

    /// Whether `digit` is a valid digit value in this radix
    #[must_use]
    pub fn admits(&self, digit: u32) -> bool {
        self.0 > BigUint::from(digit)
    }
}

impl FromStr for Radix {
    type Err = RecoveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Deref for Radix {
    type Target = BigUint;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Radix::parse(" 16 ").unwrap(), Radix::new(16).unwrap());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = Radix::parse("abc").unwrap_err();
        assert_eq!(
            err,
            RecoveryError::InvalidRadix {
                radix: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_parse_rejects_missing_and_small() {
        for token in ["", " ", "0", "1", "-2", "+16", "1_0"] {
            assert!(Radix::parse(token).is_err(), "token {token:?} should be rejected");
        }
    }

    #[test]
    fn test_radix_above_36_is_accepted() {
        assert_eq!(Radix::parse("100").unwrap().to_u32(), Some(100));
    }

    #[test]
    fn test_radix_beyond_machine_word() {
        let radix = Radix::parse("340282366920938463463374607431768211456").unwrap();
        assert_eq!(*radix, BigUint::from(1u8) << 128);
        assert_eq!(radix.to_u32(), None);
        assert!(radix.admits(35));
    }

    #[test]
    fn test_admits_digits_below_radix() {
        let radix = Radix::new(16).unwrap();
        assert!(radix.admits(15));
        assert!(!radix.admits(16));
    }
}
