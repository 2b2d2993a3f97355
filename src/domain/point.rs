//! A single decoded share

use num_bigint::BigInt;
use zeroize::Zeroizing;

use super::Radix;
use crate::codec;
use crate::error::RecoveryError;

/// One sample `(x, y)` of the secret polynomial
///
/// `y` is always decoded from the retained digits and radix; the provenance is
/// kept for diagnostics only. Fields are private so a point cannot drift from
/// the text it was decoded from.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    x: i64,
    y: BigInt,
    radix: Radix,
    digits: Zeroizing<String>,
}

impl Point {
    /// Decodes a share whose radix is still a text token
    ///
    /// # Errors
    /// Returns [`RecoveryError::InvalidRadix`] or [`RecoveryError::InvalidDigit`]
    /// when the encoded value cannot be decoded
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::Point;
    ///
    /// let point = Point::decode(2, "111", "2").unwrap();
    /// assert_eq!(point.x(), 2);
    /// assert_eq!(point.y().to_string(), "7");
    /// ```
    pub fn decode(x: i64, digits: &str, radix: &str) -> Result<Self, RecoveryError> {
        Self::decode_in(x, digits, Radix::parse(radix)?)
    }

    /// Decodes a share with an already validated radix
    ///
    /// # Errors
    /// Returns [`RecoveryError::InvalidDigit`] or [`RecoveryError::EmptyDigits`]
    pub fn decode_in(x: i64, digits: &str, radix: Radix) -> Result<Self, RecoveryError> {
        let y = codec::decode_in(digits, &radix)?;
        Ok(Self {
            x,
            y,
            radix,
            digits: Zeroizing::new(digits.trim().to_string()),
        })
    }

    #[must_use]
    pub fn x(&self) -> i64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    #[must_use]
    pub fn radix(&self) -> &Radix {
        &self.radix
    }

    /// The digits exactly as supplied, minus surrounding whitespace
    #[must_use]
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) [base: {}, encoded: {}]",
            self.x, self.y, self.radix, &*self.digits
        )
    }
}
