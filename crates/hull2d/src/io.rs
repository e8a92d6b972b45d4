//! Plain-text point sets and hull output.
//!
//! Input: a count line `n`, then exactly `n` lines `x y` (whitespace-separated
//! finite floats). Blank lines are skipped. Anything else is rejected: a
//! partially parsed point set never reaches a builder.
//!
//! Output: a count line `m`, then `m` lines `x y` fixed to `OUTPUT_DECIMALS`.

use std::fmt::Write as _;
use std::path::Path;

use crate::hull::Hull;
use crate::types::{HullError, Point, Result};

/// Fractional digits in serialized hull vertices.
pub const OUTPUT_DECIMALS: usize = 2;

fn malformed(line: usize, reason: impl Into<String>) -> HullError {
    HullError::MalformedInput {
        line,
        reason: reason.into(),
    }
}

/// Parse the count-prefixed point format. Line numbers in errors are 1-based.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (count_line, count_text) = lines
        .next()
        .ok_or_else(|| malformed(1, "missing point count"))?;
    let declared: usize = count_text
        .parse()
        .map_err(|_| malformed(count_line, format!("invalid point count {:?}", count_text)))?;

    // The count is untrusted: size the buffer by what the text can hold.
    let mut points = Vec::with_capacity(declared.min(text.len() / 4));
    let mut last_line = count_line;
    for (line, content) in lines {
        if points.len() == declared {
            return Err(malformed(
                line,
                format!("more points than the declared {}", declared),
            ));
        }
        points.push(parse_point(line, content)?);
        last_line = line;
    }
    if points.len() < declared {
        return Err(malformed(
            last_line,
            format!("expected {} points, found {}", declared, points.len()),
        ));
    }
    Ok(points)
}

fn parse_point(line: usize, content: &str) -> Result<Point> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    let [xs, ys] = fields.as_slice() else {
        return Err(malformed(
            line,
            format!("expected 2 coordinates, found {}", fields.len()),
        ));
    };
    let coord = |s: &str| -> Result<f64> {
        let v: f64 = s
            .parse()
            .map_err(|_| malformed(line, format!("invalid coordinate {:?}", s)))?;
        if !v.is_finite() {
            return Err(malformed(line, format!("non-finite coordinate {:?}", s)));
        }
        Ok(v)
    };
    Ok(Point::new(coord(*xs)?, coord(*ys)?))
}

/// Read and parse a point file.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)?;
    parse_points(&text)
}

/// Serialize points in the input format (full precision, round-trips).
pub fn format_points(points: &[Point]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        let _ = writeln!(out, "{} {}", p.x, p.y);
    }
    out
}

/// Serialize a hull: count line, then one `x y` line per vertex (CCW).
pub fn format_hull(hull: &Hull) -> String {
    let mut out = format!("{}\n", hull.len());
    for p in hull.vertices() {
        let _ = writeln!(
            out,
            "{:.prec$} {:.prec$}",
            p.x,
            p.y,
            prec = OUTPUT_DECIMALS
        );
    }
    out
}

pub fn write_hull<P: AsRef<Path>>(path: P, hull: &Hull) -> Result<()> {
    std::fs::write(path, format_hull(hull))?;
    Ok(())
}

pub fn write_points<P: AsRef<Path>>(path: P, points: &[Point]) -> Result<()> {
    std::fs::write(path, format_points(points))?;
    Ok(())
}
