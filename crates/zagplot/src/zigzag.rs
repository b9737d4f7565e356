//! Zigzag raster fill - one continuous boustrophedon path.
//!
//! The path starts in a corner of the plot rectangle, runs a diagonal
//! stroke until it hits a wall, jogs a short way along that wall, turns
//! round, and runs the next stroke parallel to the last. Jogs always move
//! towards the end corner, so the strokes sweep across the rectangle and
//! the path finishes when a jog lands on the end corner.
//!
//! ```text
//!   end ─────────────────┐
//!   │ ╲ ╲ ╲ ╲ ╲ ╲ ╲ ╲ ╲ ╲│
//!   │╲ ╲ ╲ ╲ ╲ ╲ ╲ ╲ ╲ ╲ │
//!   │ ╲ ╲ ╲ ╲ ╲ ╲ ╲ ╲ ╲ ╲│
//! start ─────────────────┘
//! ```
//!
//! Which corner is the start depends on the quadrant of the plot angle:
//! the first quadrant starts at pixel (0, 0) and ends at the image's far
//! corner; the other quadrants are mirror images of it.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::angle::{Quadrant, normalize_degrees, whole_degrees};
use crate::config::Configuration;
use crate::error::{PlotError, PlotResult};
use crate::geometry::{Bounds, Pixel, PlotPath, Point, Rect, Scale};
use crate::scale::{pixel_to_position, scale};
use crate::wall::{dir_sign, dist_on_angle};

/// Points within this distance (per axis, mm) of the end corner count as
/// having arrived.
pub const END_TOLERANCE: f64 = 1e-9;

/// Upper bound on the derived point cap, whatever the layout says.
const MAX_POINTS: usize = 50_000_000;

/// How far a wall jog moves along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gap {
    /// Along the bottom and top walls.
    pub x: f64,
    /// Along the left and right walls.
    pub y: f64,
}

/// Everything fixed for one run: scale, corners, bounds, angle and step
/// sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub scale: Scale,
    pub bounds: Bounds,
    pub start: Point,
    pub end: Point,
    /// Stroke angle in radians, normalized to `[0, 2π)`.
    pub angle: f64,
    pub quadrant: Quadrant,
    pub gap: Gap,
    /// Longest single step along a stroke.
    pub density: f64,
    /// Direction flag before the first wall jog.
    pub initial_direction: bool,
    /// Points emitted before giving up.
    pub max_points: usize,
}

impl Layout {
    /// Plan a run for an image of `source` pixels.
    ///
    /// # Errors
    ///
    /// - [`PlotError::DegenerateInput`] for an invalid configuration or an
    ///   empty source.
    /// - [`PlotError::DegenerateAngle`] when the plot angle is a multiple
    ///   of 90°.
    pub fn new(source: Rect, config: &Configuration) -> PlotResult<Self> {
        config.validate()?;

        let scale = scale(source, config.size, config.force_dimensions)?;
        let origin = pixel_to_position(Pixel::new(0.0, 0.0), scale, config.position);
        let far = pixel_to_position(Pixel::far_corner(source), scale, config.position);
        let bounds = Bounds::from_corners(origin, far);

        let angle = normalize_degrees(config.plot_angle);
        let Some(quadrant) = Quadrant::of_degrees(config.plot_angle) else {
            return Err(PlotError::DegenerateAngle { degrees: whole_degrees(config.plot_angle) as f64 });
        };

        let (x, y) = (bounds.x, bounds.y);
        let (start, end) = match quadrant {
            Quadrant::First => (Point::new(x.min, y.min), Point::new(x.max, y.max)),
            Quadrant::Second => (Point::new(x.max, y.min), Point::new(x.min, y.max)),
            Quadrant::Third => (Point::new(x.max, y.max), Point::new(x.min, y.min)),
            Quadrant::Fourth => (Point::new(x.min, y.max), Point::new(x.max, y.min)),
        };

        let (sin, cos) = angle.sin_cos();
        let gap = Gap {
            x: (config.line_separation / cos).abs(),
            y: (config.line_separation / sin).abs(),
        };

        // The first jog flips the flag, and the stroke after it has to head
        // away from the start's vertical wall.
        let true_heads_to_end = (dir_sign(true) * sin > 0.0) == (end.x > start.x);
        let initial_direction = !true_heads_to_end ^ config.start_reversed;

        let max_points = config
            .max_points
            .unwrap_or_else(|| point_cap(bounds.extent(), gap, config.plot_density));

        let layout = Self {
            scale,
            bounds,
            start,
            end,
            angle,
            quadrant,
            gap,
            density: config.plot_density,
            initial_direction,
            max_points,
        };
        debug!(
            ?scale,
            ?start,
            ?end,
            ?quadrant,
            gap_x = gap.x,
            gap_y = gap.y,
            max_points,
            "planned zigzag layout"
        );
        Ok(layout)
    }

    /// A fresh tracer positioned on the start corner.
    pub fn trace(&self) -> Zigzag {
        Zigzag {
            bounds: self.bounds,
            end: self.end,
            angle: self.angle,
            density: self.density,
            gap: self.gap,
            next: self.start,
            on_wall: false,
            direction: self.initial_direction,
            emitted: 0,
            limit: self.max_points,
            finished: false,
        }
    }
}

/// Generous estimate of how many points a run can need.
///
/// Every jog advances `gap` along one wall, so there are at most
/// `w/gap.x + h/gap.y` of them (plus the snapped last ones). Each stroke
/// is no longer than the diagonal.
fn point_cap(extent: Rect, gap: Gap, density: f64) -> usize {
    let jogs = extent.width / gap.x + extent.height / gap.y;
    let per_stroke = (extent.diagonal() / density).ceil() + 2.0;
    let estimate = 2.0 * (jogs + 2.0) * per_stroke + 16.0;
    if estimate.is_finite() && estimate < MAX_POINTS as f64 {
        estimate as usize
    } else {
        MAX_POINTS
    }
}

/// Move `from` towards `to` by at most `gap`, landing exactly on `to` when
/// it is within reach.
#[inline]
pub(crate) fn jog(from: f64, to: f64, gap: f64) -> f64 {
    let room = (to - from).abs();
    if room <= gap {
        to
    } else if to > from {
        from + gap
    } else {
        from - gap
    }
}

/// Lazy point-by-point tracer.
///
/// ## Rust Lesson #24: Iterators you write yourself
///
/// Implementing `Iterator` means writing one method, `next`. Callers then
/// get every adapter for free: `.take(10)`, `.collect()`, and so on. Here
/// each item is a `Result`, and `collect::<Result<Vec<_>, _>>()` stops at
/// the first error.
///
/// The tracer yields the start corner first and the end corner last, then
/// `None` forever. An error is yielded at most once and ends the sequence.
#[derive(Debug, Clone)]
pub struct Zigzag {
    bounds: Bounds,
    end: Point,
    angle: f64,
    density: f64,
    gap: Gap,
    next: Point,
    on_wall: bool,
    direction: bool,
    emitted: usize,
    limit: usize,
    finished: bool,
}

impl Zigzag {
    /// Work out `self.next` from the point just emitted.
    ///
    /// A stroke that reaches a wall is followed by one jog, which flips the
    /// direction. A jog only lands in a corner by snapping onto one of the
    /// end's coordinates; when that corner is not the end, the jog carries
    /// on along the other wall without flipping again, so the next stroke
    /// never starts from a corner.
    fn advance(&mut self, position: Point) -> PlotResult<()> {
        if !self.on_wall {
            if let Some(next) = self.wall_jog(position) {
                self.on_wall = true;
                self.direction = !self.direction;
                self.next = next;
                return Ok(());
            }
        } else if self.bounds.on_vertical_wall(position) && self.bounds.on_horizontal_wall(position) {
            if let Some(next) = self.wall_jog(position) {
                trace!(x = position.x, y = position.y, "turning the corner");
                self.next = next;
                return Ok(());
            }
        }

        self.on_wall = false;
        self.next = dist_on_angle(position, self.density, self.angle, self.direction, &self.bounds)?;
        Ok(())
    }

    /// Jog along whichever wall `position` is on, towards the end corner.
    ///
    /// The vertical wall wins when both apply, unless `position` already
    /// shares the end's y; `None` when neither wall has room left.
    fn wall_jog(&self, position: Point) -> Option<Point> {
        if self.bounds.on_vertical_wall(position) && position.y != self.end.y {
            let y = jog(position.y, self.end.y, self.gap.y);
            trace!(x = position.x, from = position.y, to = y, "jog along vertical wall");
            Some(Point::new(position.x, y))
        } else if self.bounds.on_horizontal_wall(position) && position.x != self.end.x {
            let x = jog(position.x, self.end.x, self.gap.x);
            trace!(y = position.y, from = position.x, to = x, "jog along horizontal wall");
            Some(Point::new(x, position.y))
        } else {
            None
        }
    }
}

impl Iterator for Zigzag {
    type Item = PlotResult<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if self.emitted >= self.limit {
            self.finished = true;
            return Some(Err(PlotError::NonTerminatingPath { limit: self.limit }));
        }

        let position = self.next;
        self.emitted += 1;

        if position.approx_eq(self.end, END_TOLERANCE) {
            self.finished = true;
            return Some(Ok(self.end));
        }

        if let Err(e) = self.advance(position) {
            self.finished = true;
            return Some(Err(e));
        }
        Some(Ok(position))
    }
}

impl FusedIterator for Zigzag {}

/// Generate the whole path for an image of `source` pixels.
pub fn plot_path(source: Rect, config: &Configuration) -> PlotResult<PlotPath> {
    let layout = Layout::new(source, config)?;
    let path = layout.trace().collect::<PlotResult<PlotPath>>()?;
    debug!(points = path.len(), "zigzag path complete");
    Ok(path)
}
