//! Property tests for Lagrange reconstruction

use std::collections::BTreeSet;

use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use shamir_recover::domain::{DivisionMode, Point, PointSet, Selection, Threshold};
use shamir_recover::interpolate::{constant_term, reconstruct_secret, select_points};

/// Polynomial with non-negative coefficients, degree 1..=6
#[derive(Clone, Debug)]
struct Polynomial(Vec<u64>);

impl Arbitrary for Polynomial {
    fn arbitrary(g: &mut Gen) -> Self {
        let degree = usize::arbitrary(g) % 6 + 1;
        Polynomial((0..=degree).map(|_| u64::arbitrary(g)).collect())
    }
}

impl Polynomial {
    fn degree(&self) -> usize {
        self.0.len() - 1
    }

    fn constant(&self) -> BigInt {
        BigInt::from(self.0[0])
    }

    fn eval(&self, x: i64) -> BigInt {
        let x = BigInt::from(x);
        self.0
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, &c| acc * &x + c)
    }

    /// Share at a positive `x`, written in decimal
    fn share(&self, x: i64) -> Point {
        Point::decode(x, &self.eval(x).to_string(), "10").unwrap()
    }
}

/// Distinct positive indices, at least two
#[derive(Clone, Debug)]
struct DistinctIndices(Vec<i64>);

impl Arbitrary for DistinctIndices {
    fn arbitrary(g: &mut Gen) -> Self {
        let count = usize::arbitrary(g) % 7 + 2;
        let mut seen = BTreeSet::new();
        let mut indices = Vec::with_capacity(count);
        while indices.len() < count {
            let x = i64::from(u8::arbitrary(g)) + 1;
            if seen.insert(x) {
                indices.push(x);
            }
        }
        DistinctIndices(indices)
    }
}

/// Consecutive indices 1..=k give integral Lagrange ratios, so truncation is exact
#[quickcheck]
fn prop_exact_recovery_for_consecutive_indices(poly: Polynomial) -> bool {
    let k = poly.degree() + 1;
    let points: Vec<Point> = (1..=k as i64).map(|x| poly.share(x)).collect();

    constant_term(&points, DivisionMode::Truncating) == Ok(poly.constant())
}

/// Exact mode recovers an integer polynomial's constant from any distinct indices
#[quickcheck]
fn prop_exact_mode_recovers_any_indices(poly: Polynomial, indices: DistinctIndices) -> bool {
    let DistinctIndices(indices) = indices;
    if indices.len() <= poly.degree() {
        return true; // under-determined
    }
    let points: Vec<Point> = indices.iter().map(|&x| poly.share(x)).collect();

    constant_term(&points, DivisionMode::Exact) == Ok(poly.constant())
}

/// Reordering the chosen points never changes the result
#[quickcheck]
fn prop_order_does_not_matter(poly: Polynomial, indices: DistinctIndices, rotate: usize) -> bool {
    let DistinctIndices(indices) = indices;
    let points: Vec<Point> = indices.iter().map(|&x| poly.share(x)).collect();

    let mut reordered = points.clone();
    reordered.reverse();
    let shift = rotate % reordered.len();
    reordered.rotate_left(shift);

    [DivisionMode::Truncating, DivisionMode::Exact]
        .into_iter()
        .all(|mode| constant_term(&points, mode) == constant_term(&reordered, mode))
}

/// With k below the point count, the k smallest indices are always chosen
#[quickcheck]
fn prop_selection_takes_smallest_indices(indices: DistinctIndices, k: usize) -> bool {
    let DistinctIndices(indices) = indices;
    let k = k % (indices.len() - 1) + 2; // 2..=len

    let poly = Polynomial(vec![7, 3]);
    let set = PointSet::new(indices.iter().map(|&x| poly.share(x)).collect())
        .with_threshold(Threshold::new(k).unwrap());

    let mut expected = indices.clone();
    expected.sort_unstable();
    expected.truncate(k);

    let chosen: Vec<i64> = select_points(&set, Selection::LowestIndices)
        .unwrap()
        .iter()
        .map(|p| p.x())
        .collect();

    chosen == expected
}

/// Reconstruction through the default policy is referentially transparent
#[quickcheck]
fn prop_reconstruction_is_deterministic(poly: Polynomial, indices: DistinctIndices) -> bool {
    let DistinctIndices(indices) = indices;
    let set = PointSet::new(indices.iter().map(|&x| poly.share(x)).collect());

    reconstruct_secret(&set) == reconstruct_secret(&set)
}
