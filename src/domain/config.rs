//! Reconstruction settings

/// How each Lagrange ratio `numerator / denominator` is evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DivisionMode {
    /// Integer division truncating toward zero, remainder dropped per term.
    ///
    /// Matches the reference reconstructions bit for bit, including the wrong
    /// answers it gives when a ratio is not integral.
    #[default]
    Truncating,
    /// Accumulate the whole sum as one fraction and reduce it once
    Exact,
}

/// Which of the supplied points take part in interpolation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Sort by ascending `x` and keep the first `k`
    #[default]
    LowestIndices,
    /// Use every supplied point regardless of `k`
    All,
}

/// Settings for one reconstruction request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconstructConfig {
    division: DivisionMode,
    selection: Selection,
}

impl ReconstructConfig {
    /// Creates a configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamir_recover::domain::{DivisionMode, ReconstructConfig, Selection};
    ///
    /// let config = ReconstructConfig::new(DivisionMode::Exact, Selection::All);
    /// assert_eq!(config.division(), DivisionMode::Exact);
    ///
    /// let default = ReconstructConfig::default();
    /// assert_eq!(default.division(), DivisionMode::Truncating);
    /// assert_eq!(default.selection(), Selection::LowestIndices);
    /// ```
    #[must_use]
    pub fn new(division: DivisionMode, selection: Selection) -> Self {
        Self {
            division,
            selection,
        }
    }

    #[must_use]
    pub fn division(&self) -> DivisionMode {
        self.division
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }
}
