//! Wall intersection - one step of the tracer.
//!
//! From a point inside the plot rectangle, step `distance` along the stroke
//! angle. If that step would leave the rectangle, stop on whichever wall the
//! stroke strikes first instead.
//!
//! The stroke travels along `sign * (sin θ, -cos θ)`, where `sign` is `+1`
//! when `direction` is set. For first-quadrant angles that means
//! `direction = true` heads right and down, towards the right wall
//! (`x.max`) and the bottom wall (`y.min`); `false` heads left and up.

use crate::error::{PlotError, PlotResult};
use crate::geometry::{Bounds, Point};

/// Below this, `sin θ` or `cos θ` is treated as zero: the stroke runs
/// parallel to a wall and one of the intersections does not exist.
const PARALLEL_EPSILON: f64 = 1e-12;

/// `+1.0` for `true`, `-1.0` for `false`.
#[inline]
pub fn dir_sign(direction: bool) -> f64 {
    if direction { 1.0 } else { -1.0 }
}

/// Next point along the stroke from `pt`.
///
/// Three candidates are considered:
/// 1. the point on the vertical wall ahead,
/// 2. the point on the horizontal wall ahead,
/// 3. a free step of `distance`.
///
/// The free step wins when it stays inside `bounds`. Otherwise the nearer
/// wall point wins; on an exact tie the horizontal wall wins. The coordinate
/// that was solved for (not the one pinned to the wall) is clamped, so the
/// result never leaves `bounds`.
///
/// # Errors
///
/// [`PlotError::DegenerateAngle`] when the stroke is parallel to either axis
/// (`angle` a multiple of π/2) or the selected point is not finite.
pub fn dist_on_angle(
    pt: Point,
    distance: f64,
    angle: f64,
    direction: bool,
    bounds: &Bounds,
) -> PlotResult<Point> {
    let (sin, cos) = angle.sin_cos();
    if sin.abs() < PARALLEL_EPSILON || cos.abs() < PARALLEL_EPSILON {
        return Err(PlotError::DegenerateAngle { degrees: angle.to_degrees() });
    }

    let sign = dir_sign(direction);
    let dx = sign * sin;
    let dy = -sign * cos;

    // Walls ahead of the stroke. With a first-quadrant angle this is
    // x[(sign+1)/2] and y[1-(sign+1)/2].
    let wall_x = if dx > 0.0 { bounds.x.max } else { bounds.x.min };
    let wall_y = if dy > 0.0 { bounds.y.max } else { bounds.y.min };

    let vertical = Point::new(wall_x, pt.y + (wall_x - pt.x) * dy / dx);
    let horizontal = Point::new(pt.x + (wall_y - pt.y) * dx / dy, wall_y);
    let free = Point::new(pt.x + dx * distance, pt.y + dy * distance);

    if bounds.contains(free) {
        return Ok(free);
    }

    let target = nearest_wall(pt, distance, [vertical, horizontal]).unwrap_or(free);
    if !target.is_finite() {
        return Err(PlotError::DegenerateAngle { degrees: angle.to_degrees() });
    }

    Ok(bounds.clamp(target))
}

/// Scan wall candidates in order, keeping any whose distance from `pt` is
/// no more than the best so far (initially `limit`). Later candidates win
/// ties.
fn nearest_wall(pt: Point, limit: f64, candidates: [Point; 2]) -> Option<Point> {
    let mut best = limit;
    let mut target = None;
    for candidate in candidates {
        let sep = pt.distance(candidate);
        if sep <= best {
            best = sep;
            target = Some(candidate);
        }
    }
    target
}
