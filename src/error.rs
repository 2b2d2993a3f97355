//! Errors raised by the reconstruction core

use num_bigint::BigInt;
use thiserror::Error;

use crate::domain::Radix;

/// Failure of a decode or reconstruction request
///
/// Every variant is final for the request that raised it; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    #[error("invalid radix '{radix}': expected an integer of at least 2")]
    InvalidRadix { radix: String },

    #[error("invalid digit '{digit}' at position {position} for radix {radix}")]
    InvalidDigit {
        digit: char,
        position: usize,
        radix: Radix,
    },

    #[error("encoded value is empty")]
    EmptyDigits,

    #[error("insufficient points: need at least {required}, but only {available} available")]
    InsufficientPoints { required: usize, available: usize },

    /// Only raised in exact mode, when the points do not lie on a polynomial
    /// with an integral constant term
    #[error("secret is not an integer: {numerator}/{denominator}")]
    NonIntegralSecret {
        numerator: BigInt,
        denominator: BigInt,
    },
}
