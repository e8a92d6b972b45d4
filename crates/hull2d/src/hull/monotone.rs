use tracing::debug;

use super::{lex_cmp, Hull, Point};
use crate::orient::{orientation, validate, Orientation};
use crate::types::Result;

/// Andrew's monotone chain ("Graham-style scan").
///
/// Sort by (x, y), collapse exact duplicates, sweep once left→right and once
/// right→left keeping only strict turns, then join the two chains (dropping
/// the shared extreme points from the second) and reverse the result so it
/// runs counter-clockwise.
pub fn monotone_chain_hull(points: &[Point]) -> Result<Hull> {
    validate(points)?;
    let mut sorted = points.to_vec();
    sorted.sort_by(lex_cmp);
    sorted.dedup();

    let left_to_right = half_hull(sorted.iter().copied());
    let right_to_left = half_hull(sorted.iter().rev().copied());

    let mut hull = left_to_right;
    if let Some(inner) = right_to_left.get(1..right_to_left.len() - 1) {
        hull.extend_from_slice(inner);
    }
    hull.reverse();
    debug!(n = points.len(), vertices = hull.len(), "monotone chain");
    Hull::from_cycle(hull)
}

/// One chain of the sweep: pop while `(current, top, below-top)` is not a
/// strict counter-clockwise turn. Collinear middles are dropped.
fn half_hull(points: impl Iterator<Item = Point>) -> Vec<Point> {
    let mut stack: Vec<Point> = Vec::new();
    for p in points {
        while stack.len() >= 2
            && orientation(p, stack[stack.len() - 1], stack[stack.len() - 2])
                != Orientation::CounterClockwise
        {
            stack.pop();
        }
        stack.push(p);
    }
    stack
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn half_hull_of_square_keeps_top_boundary() {
        let sorted = vec![
            vector![0.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
        ];
        let chain = half_hull(sorted.iter().copied());
        assert_eq!(
            chain,
            vec![vector![0.0, 0.0], vector![0.0, 1.0], vector![1.0, 1.0]]
        );
        let back = half_hull(sorted.iter().rev().copied());
        assert_eq!(
            back,
            vec![vector![1.0, 1.0], vector![1.0, 0.0], vector![0.0, 0.0]]
        );
    }

    #[test]
    fn vertical_cluster_needs_the_y_key() {
        // Same x for three points; without the y tie-break the chain could
        // visit (0,2) before (0,0) and keep a reflex vertex.
        let pts = vec![
            vector![0.0, 2.0],
            vector![0.0, 1.0],
            vector![0.0, 0.0],
            vector![3.0, 1.0],
        ];
        let hull = monotone_chain_hull(&pts).unwrap();
        assert_eq!(hull.len(), 3);
        assert!(hull.is_strictly_convex());
        assert!(!hull.vertices().contains(&vector![0.0, 1.0]));
    }
}
