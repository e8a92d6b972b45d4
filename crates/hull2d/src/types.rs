//! Shared point type and the error taxonomy of hull construction.

use std::fmt;

use nalgebra::Vector2;

/// A planar point. Identity is exact coordinate equality.
pub type Point = Vector2<f64>;

/// Why a point set with enough entries still has no 2D hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degeneracy {
    /// Fewer than two distinct coordinates.
    AllIdentical,
    /// Every distinct point lies on one line.
    AllCollinear,
}

/// Errors surfaced by hull construction and the text I/O layer.
#[derive(Debug)]
pub enum HullError {
    /// Fewer than 3 input points; no polygon can be formed.
    InsufficientPoints { count: usize },
    /// Enough points, but they span no proper triangle.
    DegenerateGeometry(Degeneracy),
    /// A coordinate is NaN or infinite.
    NonFinite { index: usize },
    /// Text input could not be turned into a complete point set.
    MalformedInput { line: usize, reason: String },
    Io(std::io::Error),
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientPoints { count } => write!(
                f,
                "convex hull not possible: {} point(s) given, at least 3 required",
                count
            ),
            HullError::DegenerateGeometry(Degeneracy::AllIdentical) => {
                write!(f, "convex hull not possible: all points are identical")
            }
            HullError::DegenerateGeometry(Degeneracy::AllCollinear) => {
                write!(f, "convex hull not possible: all points are collinear")
            }
            HullError::NonFinite { index } => {
                write!(f, "point {} has a non-finite coordinate", index)
            }
            HullError::MalformedInput { line, reason } => {
                write!(f, "malformed input at line {}: {}", line, reason)
            }
            HullError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for HullError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HullError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HullError {
    fn from(e: std::io::Error) -> Self {
        HullError::Io(e)
    }
}

impl HullError {
    /// True for the "hull not possible" outcomes (as opposed to bad input).
    #[inline]
    pub fn is_impossible(&self) -> bool {
        matches!(
            self,
            HullError::InsufficientPoints { .. } | HullError::DegenerateGeometry(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HullError>;
