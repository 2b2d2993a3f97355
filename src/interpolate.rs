//! Lagrange interpolation at `x = 0`
//!
//! Given points `(x_i, y_i)`, the secret is
//!
//! ```text
//! secret = Σ_i y_i · L_i      L_i = Π_{j≠i} (-x_j) / (x_i - x_j)
//! ```
//!
//! Numerator and denominator of each `L_i` are accumulated as exact big
//! integers. What happens next depends on [`DivisionMode`]:
//!
//! - [`DivisionMode::Truncating`] divides each ratio with truncation toward
//!   zero and throws the remainder away. When a ratio is not integral the
//!   result is wrong, but it is the result every existing reconstruction of
//!   these share files produced.
//! - [`DivisionMode::Exact`] carries the whole sum as one fraction and reduces
//!   it once at the end.
//!
//! Two chosen points with the same `x` make a denominator zero. That term's
//! coefficient is taken as `0` in both modes instead of failing.

use std::borrow::Borrow;

use log::{debug, trace, warn};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::domain::{DivisionMode, Point, PointSet, ReconstructConfig, Selection};
use crate::error::RecoveryError;

/// Fewest points any interpolation accepts
pub const MIN_POINTS: usize = 2;

/// Reconstructs the secret of `set` with the default configuration
///
/// Points are sorted by ascending `x` and the first `k` are used; ratios are
/// divided with truncation.
///
/// # Errors
/// Returns [`RecoveryError::InsufficientPoints`] if fewer than 2 points, or
/// fewer than `k`, are available
///
/// # Examples
///
/// ```rust
/// use shamir_recover::domain::{Point, PointSet, Threshold};
/// use shamir_recover::interpolate::reconstruct_secret;
///
/// # fn main() -> anyhow::Result<()> {
/// // f(x) = 5 + 3x
/// let set = PointSet::new(vec![
///     Point::decode(3, "14", "10")?,
///     Point::decode(1, "8", "10")?,
///     Point::decode(2, "1011", "2")?,
/// ])
/// .with_threshold(Threshold::new(2)?);
///
/// assert_eq!(reconstruct_secret(&set)?.to_string(), "5");
/// # Ok(())
/// # }
/// ```
pub fn reconstruct_secret(set: &PointSet) -> Result<BigInt, RecoveryError> {
    reconstruct_secret_with(set, &ReconstructConfig::default())
}

/// Reconstructs the secret of `set` using `config`
///
/// # Errors
/// Returns [`RecoveryError::InsufficientPoints`] when too few points are
/// available, or [`RecoveryError::NonIntegralSecret`] in exact mode when the
/// constant term is not an integer
pub fn reconstruct_secret_with(
    set: &PointSet,
    config: &ReconstructConfig,
) -> Result<BigInt, RecoveryError> {
    let chosen = select_points(set, config.selection())?;
    debug!(
        "Interpolating {} of {} points ({:?}, {:?})",
        chosen.len(),
        set.len(),
        config.selection(),
        config.division()
    );
    constant_term(&chosen, config.division())
}

/// Picks the points that take part in interpolation, sorted by ascending `x`
///
/// With [`Selection::LowestIndices`] and a threshold `k`, exactly the `k`
/// points with the smallest `x` are kept. Points sharing an `x` keep their
/// input order. Without a threshold, or with [`Selection::All`], every point
/// is kept.
///
/// # Errors
/// Returns [`RecoveryError::InsufficientPoints`] if fewer than 2 points, or
/// fewer than `k`, are available
pub fn select_points(set: &PointSet, selection: Selection) -> Result<Vec<&Point>, RecoveryError> {
    let available = set.len();
    if available < MIN_POINTS {
        return Err(RecoveryError::InsufficientPoints {
            required: MIN_POINTS,
            available,
        });
    }

    let mut sorted: Vec<&Point> = set.points().iter().collect();
    sorted.sort_by_key(|point| point.x());

    if let (Selection::LowestIndices, Some(threshold)) = (selection, set.threshold()) {
        let k = *threshold;
        if k > available {
            return Err(RecoveryError::InsufficientPoints {
                required: k,
                available,
            });
        }
        if available > k {
            warn!("Dropping {} points above the threshold", available - k);
        }
        sorted.truncate(k);
    }

    Ok(sorted)
}

/// Evaluates the polynomial through exactly `points` at `x = 0`
///
/// No selection happens here: every point given takes part. The result does
/// not depend on the order of `points`.
///
/// # Errors
/// Returns [`RecoveryError::InsufficientPoints`] for fewer than 2 points, or
/// [`RecoveryError::NonIntegralSecret`] in exact mode
pub fn constant_term<P: Borrow<Point>>(
    points: &[P],
    mode: DivisionMode,
) -> Result<BigInt, RecoveryError> {
    if points.len() < MIN_POINTS {
        return Err(RecoveryError::InsufficientPoints {
            required: MIN_POINTS,
            available: points.len(),
        });
    }

    let xs: Vec<BigInt> = points
        .iter()
        .map(|point| BigInt::from(point.borrow().x()))
        .collect();

    match mode {
        DivisionMode::Truncating => Ok(truncating_sum(points, &xs)),
        DivisionMode::Exact => exact_sum(points, &xs),
    }
}

/// Numerator and denominator of the basis polynomial `L_i` at zero
fn basis_at_zero(i: usize, xs: &[BigInt]) -> (BigInt, BigInt) {
    let xi = &xs[i];
    xs.iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold((BigInt::one(), BigInt::one()), |(num, den), (_, xj)| {
            (num * -xj, den * (xi - xj))
        })
}

fn truncating_sum<P: Borrow<Point>>(points: &[P], xs: &[BigInt]) -> BigInt {
    let mut secret = BigInt::zero();

    for (i, point) in points.iter().enumerate() {
        let point = point.borrow();
        let (numerator, denominator) = basis_at_zero(i, xs);

        let coefficient = if denominator.is_zero() {
            warn!(
                "Duplicate x = {} among chosen points, using coefficient 0",
                point.x()
            );
            BigInt::zero()
        } else {
            let (quotient, remainder) = numerator.div_rem(&denominator);
            if !remainder.is_zero() {
                trace!("x = {}: dropping remainder {remainder}", point.x());
            }
            quotient
        };

        trace!(
            "x = {}: L = {numerator}/{denominator} -> {coefficient}",
            point.x()
        );
        secret += point.y() * coefficient;
    }

    secret
}

fn exact_sum<P: Borrow<Point>>(points: &[P], xs: &[BigInt]) -> Result<BigInt, RecoveryError> {
    let mut numerator = BigInt::zero();
    let mut denominator = BigInt::one();

    for (i, point) in points.iter().enumerate() {
        let point = point.borrow();
        let (term_num, term_den) = basis_at_zero(i, xs);

        if term_den.is_zero() {
            warn!(
                "Duplicate x = {} among chosen points, using coefficient 0",
                point.x()
            );
            continue;
        }

        trace!("x = {}: L = {term_num}/{term_den}", point.x());
        numerator = numerator * &term_den + point.y() * term_num * &denominator;
        denominator *= term_den;
    }

    let divisor = numerator.gcd(&denominator);
    numerator /= &divisor;
    denominator /= &divisor;
    if denominator.is_negative() {
        numerator = -numerator;
        denominator = -denominator;
    }

    if denominator.is_one() {
        Ok(numerator)
    } else {
        Err(RecoveryError::NonIntegralSecret {
            numerator,
            denominator,
        })
    }
}
