//! PNG preview of a generated path.
//!
//! The path is written out as SVG first (`common::path_to_svg`) and then
//! rasterized with resvg.

use std::path::Path;

use anyhow::{Context, Result, bail};
use image::RgbaImage;
use resvg::usvg;
use tiny_skia::{Color, Pixmap, Transform};

use zagplot::{Bounds, Point};

use super::common::path_to_svg;

const MM_PER_INCH: f64 = 25.4;

/// Longest side of a preview, in pixels. Larger requests are scaled down.
const MAX_PREVIEW_PX: f64 = 8192.0;

/// Pixel size of a preview of `bounds` at `dpi`.
pub fn preview_size(bounds: &Bounds, dpi: f64) -> (u32, u32) {
    let extent = bounds.extent();
    let mut px_per_mm = dpi / MM_PER_INCH;
    let longest = extent.width.max(extent.height) * px_per_mm;
    if longest > MAX_PREVIEW_PX {
        px_per_mm *= MAX_PREVIEW_PX / longest;
    }
    let width = ((extent.width * px_per_mm).ceil() as u32).max(1);
    let height = ((extent.height * px_per_mm).ceil() as u32).max(1);
    (width, height)
}

/// Rasterize `path` and save it as an image at `output`.
pub fn render_png(path: &[Point], bounds: &Bounds, dpi: f64, output: &Path) -> Result<()> {
    if !(dpi.is_finite() && dpi > 0.0) {
        bail!("DPI must be positive, got {dpi}");
    }

    let svg = path_to_svg(path, bounds);
    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default())
        .context("Failed to parse preview SVG")?;

    let (width, height) = preview_size(bounds, dpi);
    let mut pixmap = Pixmap::new(width, height).context("Failed to create pixmap")?;
    pixmap.fill(Color::WHITE);

    let size = tree.size();
    let transform = Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let rgba = RgbaImage::from_raw(width, height, pixmap.take())
        .context("Failed to create image")?;
    rgba.save(output)
        .with_context(|| format!("Failed to write preview {}", output.display()))?;

    Ok(())
}
