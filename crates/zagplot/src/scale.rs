//! Pixel space to physical space.

use crate::error::{PlotError, PlotResult};
use crate::geometry::{Pixel, Point, Rect, Scale};

/// Scale factor that maps `source` (pixels) onto `target` (millimetres).
///
/// - `force`: independent per-axis ratios, aspect ratio is not kept.
/// - `source == target`: exactly `(1, 1)`, no floating-point drift.
/// - otherwise: the smaller of the two ratios on both axes, so the image
///   fits inside the target with its aspect ratio intact.
pub fn scale(source: Rect, target: Rect, force: bool) -> PlotResult<Scale> {
    if !source.is_proper() {
        return Err(PlotError::DegenerateInput(format!(
            "source extent {}x{} must be positive",
            source.width, source.height
        )));
    }
    if !target.is_proper() {
        return Err(PlotError::DegenerateInput(format!(
            "target extent {}x{} must be positive",
            target.width, target.height
        )));
    }

    let width_scale = target.width / source.width;
    let height_scale = target.height / source.height;

    if force {
        Ok(Scale::new(width_scale, height_scale))
    } else if source == target {
        Ok(Scale::IDENTITY)
    } else {
        Ok(Scale::uniform(width_scale.min(height_scale)))
    }
}

/// Physical position of a pixel: `offset + pixel * scale`.
#[inline]
pub fn pixel_to_position(pixel: Pixel, scale: Scale, offset: Point) -> Point {
    Point::new(offset.x + pixel.x * scale.x, offset.y + pixel.y * scale.y)
}
