//! Threshold newtype for secret reconstruction

use anyhow::Result;

/// Minimum number of shares required to reconstruct a secret (`k`)
///
/// Invariant: threshold >= 2 (enforced at construction).
/// Interpolating through a single point yields a constant polynomial, which
/// says nothing about the secret beyond that point's own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value < 2
    ///
    /// # Errors
    /// Returns an error if the threshold is less than 2
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    /// assert_eq!(threshold.degree(), 2);
    ///
    /// assert!(Threshold::new(1).is_err());
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value < 2 {
            anyhow::bail!("Threshold must be at least 2 (got {value})");
        }
        Ok(Self(value))
    }

    /// Degree of the interpolating polynomial (`m = k - 1`)
    #[must_use]
    pub fn degree(&self) -> usize {
        self.0 - 1
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
