use tracing::debug;

use super::{sort_counter_clockwise, Hull, Point};
use crate::orient::{orientation, validate, Orientation};
use crate::types::Result;

/// Convex hull by testing every ordered pair of distinct points as an edge.
///
/// The directed pair `p → q` is a hull edge iff every other point (by value)
/// is strictly left of it or lies on the closed segment `[p, q]`. Endpoints of
/// accepted pairs are collected once each, then ordered by
/// `sort_counter_clockwise`. O(n³) time, O(h) extra space.
///
/// Near-collinear float inputs can yield a vertex set that does not survive
/// `Hull` validation; that surfaces as `DegenerateGeometry(AllCollinear)`.
pub fn brute_force_hull(points: &[Point]) -> Result<Hull> {
    validate(points)?;
    let mut vertices: Vec<Point> = Vec::new();
    for &p in points {
        for &q in points {
            if p == q || !is_hull_edge(points, p, q) {
                continue;
            }
            for v in [p, q] {
                if !vertices.contains(&v) {
                    vertices.push(v);
                }
            }
        }
    }
    debug!(
        n = points.len(),
        vertices = vertices.len(),
        "brute force vertex set"
    );
    Hull::from_cycle(sort_counter_clockwise(&vertices))
}

fn is_hull_edge(points: &[Point], p: Point, q: Point) -> bool {
    points
        .iter()
        .filter(|r| **r != p && **r != q)
        .all(|&r| match orientation(p, q, r) {
            Orientation::CounterClockwise => true,
            Orientation::Clockwise => false,
            Orientation::Collinear => on_segment(p, q, r),
        })
}

/// `r` is known collinear with `p, q`; test it against their bounding box.
#[inline]
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    p.x.min(q.x) <= r.x && r.x <= p.x.max(q.x) && p.y.min(q.y) <= r.y && r.y <= p.y.max(q.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn collinear_interior_of_edge_is_not_a_hull_edge() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![4.0, 0.0],
            vector![2.0, 2.0],
        ];
        assert!(is_hull_edge(&pts, pts[0], pts[2]));
        assert!(!is_hull_edge(&pts, pts[0], pts[1]));
        assert!(!is_hull_edge(&pts, pts[1], pts[2]));
        // reversed direction has the apex on its right
        assert!(!is_hull_edge(&pts, pts[2], pts[0]));
    }

    #[test]
    fn on_segment_bounds_are_closed() {
        let p = vector![0.0, 0.0];
        let q = vector![2.0, 2.0];
        assert!(on_segment(p, q, vector![1.0, 1.0]));
        assert!(on_segment(p, q, q));
        assert!(!on_segment(p, q, vector![3.0, 3.0]));
        assert!(!on_segment(p, q, vector![-1.0, -1.0]));
    }
}
