//! Convex hull construction (two builders, one result type).
//!
//! Purpose
//! - `brute_force_hull`: O(n³) exhaustive edge test, the obvious-correctness
//!   reference. Its vertex set is ordered afterwards by `sort_counter_clockwise`.
//! - `monotone_chain_hull`: O(n log n) sort + two stack sweeps; ordered by
//!   construction.
//!
//! Policy
//! - Strict convexity in both builders: points on a hull edge but strictly
//!   between its endpoints are never vertices.
//! - Fewer than 3 inputs → `InsufficientPoints`; no proper triangle among the
//!   inputs → `DegenerateGeometry`. Neither builder emits a 1- or 2-gon.
//! - Output is counter-clockwise. Start vertex differs per builder; use
//!   `Hull::normalized` or `Hull::same_polygon` to compare.

mod angular;
mod brute;
mod monotone;

pub use angular::{centroid, sort_counter_clockwise};
pub use brute::brute_force_hull;
pub use monotone::monotone_chain_hull;

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::orient::{cross, orientation, Orientation};
use crate::types::{Degeneracy, HullError, Point};

/// Which builder to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BruteForce,
    MonotoneChain,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::BruteForce, Algorithm::MonotoneChain];

    /// Build the hull of `points` with this algorithm.
    pub fn build(self, points: &[Point]) -> crate::Result<Hull> {
        match self {
            Algorithm::BruteForce => brute_force_hull(points),
            Algorithm::MonotoneChain => monotone_chain_hull(points),
        }
    }

    /// Short stable name used in logs and file names.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute",
            Algorithm::MonotoneChain => "graham",
        }
    }

    /// Default output file of the command-line runner.
    pub fn default_output(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "output_brute.txt",
            Algorithm::MonotoneChain => "output_graham.txt",
        }
    }
}

/// Strictly convex polygon, counter-clockwise, closed implicitly.
///
/// Invariants:
/// - At least 3 vertices, pairwise distinct by value.
/// - Every consecutive triple (cyclically) turns counter-clockwise.
/// - Every vertex is one of the input points it was built from.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    /// Wrap a counter-clockwise vertex cycle, enforcing the invariants.
    ///
    /// Near-collinear float inputs can make the builders disagree with
    /// themselves (the predicate is evaluated under different argument
    /// orders). Repeated values are dropped (first occurrence kept), then
    /// vertices whose `(prev, v, next)` turn is not strictly positive are
    /// removed until every cyclic triple passes. Exact inputs pass unchanged.
    /// Fewer than 3 survivors → `DegenerateGeometry(AllCollinear)`.
    pub(crate) fn from_cycle(vertices: Vec<Point>) -> crate::Result<Self> {
        let mut seen: HashSet<(u64, u64)> = HashSet::with_capacity(vertices.len());
        // `+ 0.0` maps -0.0 to 0.0 so the key agrees with `==`.
        let mut cycle: Vec<Point> = vertices
            .into_iter()
            .filter(|p| seen.insert(((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())))
            .collect();
        loop {
            let n = cycle.len();
            if n < 3 {
                return Err(HullError::DegenerateGeometry(Degeneracy::AllCollinear));
            }
            let mut kept: Vec<Point> = Vec::with_capacity(n);
            for k in 0..n {
                let prev = kept.last().copied().unwrap_or(cycle[n - 1]);
                if cross(prev, cycle[k], cycle[(k + 1) % n]) > 0.0 {
                    kept.push(cycle[k]);
                }
            }
            if kept.len() == n {
                return Ok(Self { vertices: cycle });
            }
            cycle = kept;
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false for a built hull; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices followed by the first one again, ready for polyline drawing.
    pub fn closed(&self) -> impl Iterator<Item = &Point> + '_ {
        self.vertices.iter().chain(self.vertices.first())
    }

    /// Shoelace area; positive because the order is counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        let mut acc = 0.0;
        for k in 0..n {
            let p = self.vertices[k];
            let q = self.vertices[(k + 1) % n];
            acc += p.x * q.y - q.x * p.y;
        }
        0.5 * acc
    }

    /// Closed containment: boundary points count as inside.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.vertices.len();
        (0..n).all(|k| {
            orientation(self.vertices[k], self.vertices[(k + 1) % n], p)
                != Orientation::Clockwise
        })
    }

    /// Every cyclic triple is a strict left turn.
    pub fn is_strictly_convex(&self) -> bool {
        let n = self.vertices.len();
        n >= 3
            && (0..n).all(|k| {
                cross(
                    self.vertices[k],
                    self.vertices[(k + 1) % n],
                    self.vertices[(k + 2) % n],
                ) > 0.0
            })
    }

    /// Same cycle, rotated to start at the lexicographically smallest vertex.
    pub fn normalized(&self) -> Hull {
        let start = self
            .vertices
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| lex_cmp(a, b))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let mut vertices = self.vertices.clone();
        vertices.rotate_left(start);
        Hull { vertices }
    }

    /// Equal up to the choice of start vertex.
    pub fn same_polygon(&self, other: &Hull) -> bool {
        self.len() == other.len() && self.normalized() == other.normalized()
    }
}

/// Order by x, then y. Finite inputs only (NaN compares equal).
#[inline]
pub(crate) fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}
