//! SVG rendering of a point set and its hull.
//!
//! Input points are drawn as red dots, the hull as a closed blue polygon
//! (first vertex repeated). The y axis points up; aspect ratio is 1:1.

use std::path::Path;

use crate::hull::Hull;
use crate::types::{Point, Result};

/// Render to an SVG document. `hull` may be absent when no hull exists.
pub fn render_svg(points: &[Point], hull: Option<&Hull>, title: &str) -> String {
    let (lo, hi) = bounds(points);
    let extent = (hi.x - lo.x).max(hi.y - lo.y);
    let extent = if extent > 0.0 { extent } else { 1.0 };
    let margin = 0.08 * extent;
    let (x0, y0) = (lo.x - margin, -(hi.y + margin));
    let (w, h) = (hi.x - lo.x + 2.0 * margin, hi.y - lo.y + 2.0 * margin);
    let dot = 0.006 * extent;

    let mut body = String::new();
    if let Some(hull) = hull {
        let ring = hull
            .closed()
            .map(|p| format!("{},{}", p.x, -p.y))
            .collect::<Vec<_>>()
            .join(" ");
        body.push_str(&format!(
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"blue\" stroke-width=\"1.5\" vector-effect=\"non-scaling-stroke\"/>\n",
            ring
        ));
    }
    for p in points {
        body.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"red\"/>\n",
            p.x, -p.y, dot
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="{x0} {y0} {w} {h}" width="640" height="640" preserveAspectRatio="xMidYMid meet">
  <title>{title}</title>
{body}</svg>
"#,
        title = escape(title),
    )
}

pub fn export_svg<P: AsRef<Path>>(
    path: P,
    points: &[Point],
    hull: Option<&Hull>,
    title: &str,
) -> Result<()> {
    std::fs::write(path, render_svg(points, hull, title))?;
    Ok(())
}

fn bounds(points: &[Point]) -> (Point, Point) {
    if points.is_empty() {
        return (Point::zeros(), Point::zeros());
    }
    points.iter().fold(
        (
            Point::new(f64::INFINITY, f64::INFINITY),
            Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ),
        |(lo, hi), p| (lo.inf(p), hi.sup(p)),
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::brute_force_hull;
    use nalgebra::vector;

    #[test]
    fn polygon_is_closed_and_points_drawn() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
            vector![1.0, 1.0],
        ];
        let hull = brute_force_hull(&pts).unwrap();
        let svg = render_svg(&pts, Some(&hull), "Slow <Convex> Hull");
        assert_eq!(svg.matches("<circle").count(), 5);
        assert_eq!(svg.matches("<polyline").count(), 1);
        assert!(svg.contains("<title>Slow &lt;Convex&gt; Hull</title>"));
        // 4 vertices + closing repeat
        let start = svg.find("points=\"").unwrap() + 8;
        let end = start + svg[start..].find('"').unwrap();
        let ring: Vec<&str> = svg[start..end].split(' ').collect();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn no_hull_still_renders_points() {
        let pts = vec![vector![1.0, 1.0], vector![1.0, 1.0]];
        let svg = render_svg(&pts, None, "x");
        assert!(!svg.contains("<polyline"));
        assert_eq!(svg.matches("<circle").count(), 2);
    }
}
