//! Core geometry types for zagplot.
//!
//! Two coordinate spaces meet here:
//! - **pixel space** ([`Pixel`], source [`Rect`]) from the decoded image
//! - **physical space** ([`Point`], target [`Rect`], [`Bounds`]) in millimetres
//!
//! [`Scale`] is the bridge between them (see `scale.rs`).
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone` + `Copy` = small stack values copied implicitly
//! - `PartialEq` = can compare with `==`
//! - `Serialize` / `Deserialize` = serde can read/write it as YAML or JSON

use serde::{Deserialize, Serialize};

/// A 2D physical position (millimetres). The unit of the output path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A coordinate in the source image, in pixels.
///
/// Fractional values are allowed: the far corner of a 100×100 image is
/// `Pixel::new(100.0, 100.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

/// A width/height pair with no position of its own.
///
/// Used for both the source image extents (pixels) and the target plot
/// area (millimetres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub width: f64,
    pub height: f64,
}

/// Per-axis ratio mapping one source pixel onto physical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

/// A closed `[min, max]` range on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

/// The plotted rectangle as one interval per axis.
///
/// Computed once per run and never changed while the path is traced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: Interval,
    pub y: Interval,
}

/// An ordered sequence of positions. Index order is travel order.
pub type PlotPath = Vec<Point>;

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True when both axes differ by at most `tolerance`.
    #[inline]
    pub fn approx_eq(&self, other: Point, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Pixel {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The corner of the image opposite pixel (0, 0).
    #[inline]
    pub fn far_corner(extent: Rect) -> Self {
        Self::new(extent.width, extent.height)
    }
}

impl Rect {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both sides finite and strictly positive.
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn diagonal(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }
}

impl Scale {
    /// No scaling at all.
    pub const IDENTITY: Scale = Scale { x: 1.0, y: 1.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The same ratio on both axes.
    #[inline]
    pub fn uniform(ratio: f64) -> Self {
        Self::new(ratio, ratio)
    }
}

impl Interval {
    /// Build an interval from two endpoints in either order.
    #[inline]
    pub fn spanning(a: f64, b: f64) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// True when `v` sits exactly on one of the endpoints.
    #[inline]
    pub fn is_edge(&self, v: f64) -> bool {
        v == self.min || v == self.max
    }

    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}

impl Bounds {
    /// Bounds spanned by two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: Interval::spanning(a.x, b.x),
            y: Interval::spanning(a.y, b.y),
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.x.contains(p.x) && self.y.contains(p.y)
    }

    /// Pull a point onto the rectangle. Points already inside are returned
    /// bit-for-bit unchanged.
    #[inline]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(self.x.clamp(p.x), self.y.clamp(p.y))
    }

    /// On the left or right wall.
    #[inline]
    pub fn on_vertical_wall(&self, p: Point) -> bool {
        self.x.is_edge(p.x)
    }

    /// On the bottom or top wall.
    #[inline]
    pub fn on_horizontal_wall(&self, p: Point) -> bool {
        self.y.is_edge(p.y)
    }

    #[inline]
    pub fn extent(&self) -> Rect {
        Rect::new(self.x.length(), self.y.length())
    }
}

// ============================================================================
// TESTS
// ============================================================================
