//! The batch of points handed to one reconstruction

use super::{Point, ShareCount, Threshold};

/// Points supplied for one reconstruction, with the declared `n` and `k`
///
/// Built once from ingested data and consumed read-only by the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
    share_count: Option<ShareCount>,
    threshold: Option<Threshold>,
}

impl PointSet {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            share_count: None,
            threshold: None,
        }
    }

    /// Sets the number of points the engine must use (`k`)
    #[must_use]
    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Records the declared total number of shares (`n`)
    #[must_use]
    pub fn with_share_count(mut self, share_count: ShareCount) -> Self {
        self.share_count = Some(share_count);
        self
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn threshold(&self) -> Option<Threshold> {
        self.threshold
    }

    #[must_use]
    pub fn share_count(&self) -> Option<ShareCount> {
        self.share_count
    }

    /// Degree of the interpolating polynomial, when `k` is known
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.threshold.map(|k| k.degree())
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_keeps_order_and_leaves_keys_unset() {
        let set: PointSet = [3, 1, 2]
            .into_iter()
            .map(|x| Point::decode(x, "7", "10").unwrap())
            .collect();
        let xs: Vec<i64> = set.points().iter().map(Point::x).collect();
        assert_eq!(xs, vec![3, 1, 2]);
        assert!(set.threshold().is_none());
        assert!(set.share_count().is_none());
        assert_eq!(set.degree(), None);
    }
}
