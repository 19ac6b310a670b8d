//! Line-line intersection for pairs of drawn segments.
//!
//! Both segments are extended to infinite lines, so the reported point may sit
//! outside either stroke.

use crate::geom::{Point, Segment};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntersectError {
    #[error("lines are parallel or coincident")]
    ParallelOrCoincident,
}

/// Intersection of the lines through `a` and `b`, snapped to whole pixels.
pub fn intersect(a: &Segment, b: &Segment) -> Result<Point, IntersectError> {
    intersect_exact(a, b).map(Point::rounded)
}

/// Same as [`intersect`] without the pixel snapping.
pub fn intersect_exact(a: &Segment, b: &Segment) -> Result<Point, IntersectError> {
    let Point { x: x1, y: y1 } = a.start;
    let Point { x: x2, y: y2 } = a.end;
    let Point { x: x3, y: y3 } = b.start;
    let Point { x: x4, y: y4 } = b.end;

    let c2x = x3 - x4;
    let c2y = y3 - y4;
    let c3x = x1 - x2;
    let c3y = y1 - y2;

    let d = c3x * c2y - c3y * c2x;
    if d == 0.0 {
        return Err(IntersectError::ParallelOrCoincident);
    }

    let u1 = x1 * y2 - y1 * x2;
    let u4 = x3 * y4 - y3 * x4;

    let px = (u1 * c2x - c3x * u4) / d;
    let py = (u1 * c2y - c3y * u4) / d;

    // A denormal determinant can overflow the quotient, and NaN input slips past `d == 0.0`.
    if !(px.is_finite() && py.is_finite()) {
        return Err(IntersectError::ParallelOrCoincident);
    }

    Ok(Point::new(px, py))
}
