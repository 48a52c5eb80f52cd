//! Planar geometry primitives used to project observations onto
//! network edges and to cut edges at those projections.
//!
//! All distances are Euclidean, in the units of the input coordinates.
//! Trajectories and networks are expected to share a projected CRS.

use geo::{
    Coord, Distance, Euclidean, Geometry, InterpolateLine, Length, LineLocatePoint, LineString,
    Point,
};
use thiserror::Error;

#[cfg(test)]
mod test;

/// The distance below which two positions along a line are considered equal.
pub const COORD_EQUAL_TOLERANCE: f64 = 1e-6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("cut range must satisfy 0 <= start <= end <= length, got [{start}, {end}] on {length}")]
    InvalidRange { start: f64, end: f64, length: f64 },

    #[error("cannot cut an empty linestring")]
    Empty,
}

/// The position of a point relative to a line, as found by [`locate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    /// Distance along the line, from its first coordinate, to the projected position.
    pub along: f64,

    /// Perpendicular distance between the point and its projected position.
    pub distance: f64,
}

/// Total length of the line.
pub fn length(line: &LineString) -> f64 {
    Euclidean.length(line)
}

/// Returns the line with its coordinates in reverse order.
pub fn reverse(line: &LineString) -> LineString {
    line.coords().rev().copied().collect()
}

/// Distance along `line` to the projection of `point` upon it.
pub fn project(point: &Point, line: &LineString) -> Option<f64> {
    locate(point, line).map(|location| location.along)
}

/// Projects `point` upon `line`, returning both the distance along the line
/// and the perpendicular distance to it.
///
/// The distance along the line is always within `[0, length(line)]`.
pub fn locate(point: &Point, line: &LineString) -> Option<Location> {
    let total = length(line);
    let fraction = line.line_locate_point(point)?;
    if !fraction.is_finite() {
        return None;
    }

    let along = (fraction * total).clamp(0.0, total);
    let projected = interpolate(line, along)?;

    Some(Location {
        along,
        distance: Euclidean.distance(*point, projected),
    })
}

/// The point lying at `distance` along the line.
///
/// Distances beyond either end resolve to that end.
pub fn interpolate(line: &LineString, distance: f64) -> Option<Point> {
    Euclidean.point_at_distance_from_start(line, distance)
}

/// Selects the part of `line` between the `start` and `end` distances.
///
/// Returns the line itself when the range covers it entirely, and a
/// zero-length pair of identical points when `start == end`.
pub fn cut(line: &LineString, start: f64, end: f64) -> Result<LineString, GeometryError> {
    if line.0.is_empty() {
        return Err(GeometryError::Empty);
    }

    let total = length(line);
    let valid = start >= -COORD_EQUAL_TOLERANCE
        && start <= end + COORD_EQUAL_TOLERANCE
        && end <= total + COORD_EQUAL_TOLERANCE;

    if !valid {
        return Err(GeometryError::InvalidRange {
            start,
            end,
            length: total,
        });
    }

    let start = start.clamp(0.0, total);
    let end = end.clamp(start, total);

    if start == 0.0 && end == total {
        return Ok(line.clone());
    }

    let head = interpolate(line, start).ok_or(GeometryError::Empty)?;
    if start == end {
        return Ok(LineString::from(vec![head.0, head.0]));
    }

    let tail = interpolate(line, end).ok_or(GeometryError::Empty)?;

    // Interior vertices strictly inside the range, bounded by the cut points.
    let mut coords: Vec<Coord> = vec![head.0];
    let mut travelled = 0.0;
    for segment in line.lines() {
        travelled += Euclidean.length(&segment);

        if travelled >= end - COORD_EQUAL_TOLERANCE {
            break;
        }

        if travelled > start + COORD_EQUAL_TOLERANCE {
            coords.push(segment.end);
        }
    }
    coords.push(tail.0);

    Ok(LineString::from(coords))
}

/// A readable name for the kind of geometry, used in validation errors.
#[allow(unreachable_patterns)]
pub fn kind(geometry: &Geometry) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
        _ => "Geometry",
    }
}
