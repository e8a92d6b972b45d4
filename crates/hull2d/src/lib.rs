//! Planar convex hulls: exhaustive edge test and monotone-chain sweep.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` compared by exact value (no epsilon).
//! - Every built hull is strictly convex (no collinear boundary points) and
//!   listed counter-clockwise; the first vertex implicitly follows the last.
//! - Both builders share one orientation predicate (`orient::orientation`), so
//!   they agree on every input where floating-point arithmetic is exact.
//!
//! Layout
//! - `orient`: turn predicate and the shared degeneracy probe.
//! - `hull`: `Hull`, the two builders, angular ordering.
//! - `io`: text point-set parsing and hull serialization.
//! - `svg`: scatter + polygon rendering for visual checks.
//! - `rand`: reproducible point clouds for tests, benches and the CLI.

pub mod hull;
pub mod io;
pub mod orient;
pub mod rand;
pub mod svg;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{
    brute_force_hull, monotone_chain_hull, sort_counter_clockwise, Algorithm, Hull,
};
pub use orient::{orientation, Orientation};
pub use types::{Degeneracy, HullError, Point, Result};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{brute_force_hull, monotone_chain_hull, Algorithm, Hull};
    pub use crate::io::{format_hull, parse_points, read_points, write_hull};
    pub use crate::orient::{orientation, Orientation};
    pub use crate::rand::{draw_points, CloudShape, PointCloudCfg, ReplayToken};
    pub use crate::types::{Degeneracy, HullError, Point};
    pub use nalgebra::Vector2 as Vec2;
}
