//! Common utilities shared across CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use zagplot::{Bounds, Layout, Point, Scale};

/// Output format for a generated path.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Svg,
}

/// JSON output: the layout corners plus every point in travel order.
#[derive(Serialize)]
struct JsonOutput<'a> {
    scale: Scale,
    start: Point,
    end: Point,
    points: &'a [Point],
}

/// Serialize a path and the layout it was traced in.
pub fn path_to_json(layout: &Layout, path: &[Point]) -> serde_json::Result<String> {
    serde_json::to_string(&JsonOutput {
        scale: layout.scale,
        start: layout.start,
        end: layout.end,
        points: path,
    })
}

/// Convert a path to an SVG document with a single `<polyline>`.
///
/// The viewBox is the plotted rectangle in millimetres. Plotter space has y
/// pointing up, so the drawing group flips y about the rectangle's middle.
pub fn path_to_svg(path: &[Point], bounds: &Bounds) -> String {
    let extent = bounds.extent();
    let (x0, y0) = (bounds.x.min, bounds.y.min);
    let (w, h) = (extent.width, extent.height);
    let flip = bounds.y.min + bounds.y.max;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="{x0} {y0} {w} {h}">
<rect x="{x0}" y="{y0}" width="{w}" height="{h}" fill="white"/>
<g transform="translate(0 {flip}) scale(1 -1)" stroke="rgb(64,64,64)" stroke-opacity="0.5" stroke-width="0.1" stroke-linejoin="round" fill="none">
"#
    ));

    if path.len() >= 2 {
        // Build points string: "x1,y1 x2,y2 x3,y3 ..."
        let points: String = path
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        svg.push_str(&format!("  <polyline points=\"{}\"/>\n", points));
    }

    svg.push_str("</g>\n</svg>\n");
    svg
}
