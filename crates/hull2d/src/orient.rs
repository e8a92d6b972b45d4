//! Orientation predicate shared by both hull builders.
//!
//! The sign of `cross` is the only geometric decision either builder makes, so
//! the term order below is fixed: swapping the first two arguments negates
//! every partial result exactly and the sign flips bit-for-bit.

use std::ops::Neg;

use crate::types::{Degeneracy, HullError, Point};

/// Turn direction of an ordered triple `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Orientation {
    /// +1, -1 or 0.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Orientation::CounterClockwise => 1,
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
        }
    }
}

impl Neg for Orientation {
    type Output = Orientation;
    #[inline]
    fn neg(self) -> Self::Output {
        match self {
            Orientation::CounterClockwise => Orientation::Clockwise,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Twice the signed area of triangle `pqr` (positive for a left turn).
#[inline]
pub fn cross(p: Point, q: Point, r: Point) -> f64 {
    (q.x * r.y - r.x * q.y) - (p.x * r.y - r.x * p.y) + (p.x * q.y - q.x * p.y)
}

/// Classify the turn `p → q → r`.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let c = cross(p, q, r);
    if c > 0.0 {
        Orientation::CounterClockwise
    } else if c < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Indices `(i, j, k)` of the first triple spanning a proper triangle.
///
/// Scans once: `i = 0`, `j` = first point distinct from it, `k` = first point
/// off the line `ij`.
pub fn find_non_collinear(points: &[Point]) -> Result<(usize, usize, usize), Degeneracy> {
    let p = *points.first().ok_or(Degeneracy::AllIdentical)?;
    let j = points
        .iter()
        .position(|q| *q != p)
        .ok_or(Degeneracy::AllIdentical)?;
    let q = points[j];
    let k = points
        .iter()
        .position(|r| orientation(p, q, *r) != Orientation::Collinear)
        .ok_or(Degeneracy::AllCollinear)?;
    Ok((0, j, k))
}

/// Preconditions shared by both builders, checked in this order:
/// at least 3 entries, finite coordinates, a proper triangle somewhere.
pub(crate) fn validate(points: &[Point]) -> crate::types::Result<()> {
    if points.len() < 3 {
        return Err(HullError::InsufficientPoints {
            count: points.len(),
        });
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { index });
    }
    find_non_collinear(points).map_err(HullError::DegenerateGeometry)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    #[test]
    fn unit_triangle_turns() {
        let p = vector![0.0, 0.0];
        let q = vector![1.0, 0.0];
        let r = vector![0.0, 1.0];
        assert_eq!(orientation(p, q, r), Orientation::CounterClockwise);
        assert_eq!(orientation(p, r, q), Orientation::Clockwise);
        assert_eq!(orientation(p, q, vector![2.0, 0.0]), Orientation::Collinear);
        assert!((cross(p, q, r) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cross_matches_vector_form() {
        let p = vector![0.3, -1.2];
        let q = vector![2.5, 0.7];
        let r = vector![-0.4, 1.9];
        let ab = q - p;
        let ac = r - p;
        let expected = ab.x * ac.y - ab.y * ac.x;
        assert!((cross(p, q, r) - expected).abs() < 1e-12);
    }

    #[test]
    fn degeneracy_probe() {
        let same = vec![vector![1.0, 1.0]; 4];
        assert_eq!(find_non_collinear(&same), Err(Degeneracy::AllIdentical));
        let line = vec![
            vector![0.0, 0.0],
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![3.0, 3.0],
        ];
        assert_eq!(find_non_collinear(&line), Err(Degeneracy::AllCollinear));
        let tri = vec![
            vector![0.0, 0.0],
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![3.0, 3.0],
            vector![1.0, 0.0],
        ];
        assert_eq!(find_non_collinear(&tri), Ok((0, 2, 4)));
    }

    #[test]
    fn validate_order_of_checks() {
        let two = vec![vector![0.0, 0.0], vector![f64::NAN, 1.0]];
        assert!(matches!(
            validate(&two),
            Err(HullError::InsufficientPoints { count: 2 })
        ));
        let nan = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![f64::NAN, 1.0]];
        assert!(matches!(validate(&nan), Err(HullError::NonFinite { index: 2 })));
    }

    fn coord() -> impl Strategy<Value = f64> {
        -1.0e6..1.0e6f64
    }

    proptest! {
        #[test]
        fn swapping_first_two_negates(
            px in coord(), py in coord(), qx in coord(), qy in coord(), rx in coord(), ry in coord()
        ) {
            let p = vector![px, py];
            let q = vector![qx, qy];
            let r = vector![rx, ry];
            prop_assert_eq!(orientation(p, q, r), -orientation(q, p, r));
            prop_assert_eq!(orientation(p, q, r).sign(), -orientation(q, p, r).sign());
        }

        #[test]
        fn integer_collinear_is_exact(
            px in -1000i32..1000, py in -1000i32..1000,
            dx in -1000i32..1000, dy in -1000i32..1000,
            k in -50i32..50
        ) {
            let p = vector![px as f64, py as f64];
            let q = vector![(px + dx) as f64, (py + dy) as f64];
            let r = vector![(px + k * dx) as f64, (py + k * dy) as f64];
            prop_assert_eq!(orientation(p, q, r), Orientation::Collinear);
        }
    }
}
