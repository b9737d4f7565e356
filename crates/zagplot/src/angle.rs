//! Plot angle normalization.
//!
//! Angles arrive in degrees from the configuration. They are reduced to a
//! whole number of degrees in `[0, 360)` before conversion, so sub-degree
//! precision is dropped: `45.9` plots exactly like `45`.

use std::f64::consts::PI;

/// Which quarter-turn an angle falls in.
///
/// The quadrant decides which corner of the plot the path starts from and
/// which it finishes on (see `zigzag::Layout`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// (0°, 90°)
    First,
    /// (90°, 180°)
    Second,
    /// (180°, 270°)
    Third,
    /// (270°, 360°)
    Fourth,
}

/// Truncate to whole degrees and reduce into `0..360`.
///
/// The fractional part is discarded *before* the modulo, and the modulo is
/// Euclidean so `-45` becomes `315`.
#[inline]
pub fn whole_degrees(deg: f64) -> i64 {
    (deg.trunc() as i64).rem_euclid(360)
}

/// Degrees to radians in `[0, 2π)`, via [`whole_degrees`].
///
/// Lossy: only the integer part of `deg` is honoured.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    (PI / 180.0) * whole_degrees(deg) as f64
}

impl Quadrant {
    /// Classify a degree value after the same truncation as
    /// [`normalize_degrees`]. Axis-aligned angles (multiples of 90°) have no
    /// quadrant.
    pub fn of_degrees(deg: f64) -> Option<Quadrant> {
        let whole = whole_degrees(deg);
        if whole % 90 == 0 {
            return None;
        }
        Some(match whole / 90 {
            0 => Quadrant::First,
            1 => Quadrant::Second,
            2 => Quadrant::Third,
            _ => Quadrant::Fourth,
        })
    }
}
