use super::Point;

/// Arithmetic mean of `points`; `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Point::zeros(), |acc, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Order a duplicate-free convex vertex set counter-clockwise.
///
/// Sorts by `atan2` of each vertex relative to the vertex centroid, ascending
/// from -π. Exact angle ties keep input order (stable sort). The centroid of a
/// strictly convex vertex set is interior, so angles are distinct there.
pub fn sort_counter_clockwise(points: &[Point]) -> Vec<Point> {
    let Some(c) = centroid(points) else {
        return Vec::new();
    };
    let mut keyed: Vec<(f64, Point)> = points
        .iter()
        .map(|p| ((p.y - c.y).atan2(p.x - c.x), *p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, p)| p).collect()
}
