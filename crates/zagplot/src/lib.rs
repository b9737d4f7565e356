//! # zagplot
//!
//! Turns an image's bounding rectangle into one continuous zigzag path for
//! a pen plotter.
//!
//! ```text
//! image extent ──scale──▶ plot rectangle ──zigzag──▶ Vec<Point>
//! ```
//!
//! The pieces, leaves first:
//! - [`scale`]: pixel space to millimetres
//! - [`angle`]: degrees to a canonical radian angle
//! - [`wall`]: one step along a stroke, stopping on the first wall hit
//! - [`zigzag`]: the tracer that strings steps and wall jogs together
//!
//! ## Rust Lesson #7: Modules
//!
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod angle;
pub mod config;
pub mod error;
pub mod geometry;
pub mod scale;
pub mod wall;
pub mod zigzag;

// Re-export common types at crate root for convenience.
pub use angle::{Quadrant, normalize_degrees};
pub use config::Configuration;
pub use error::{PlotError, PlotResult};
pub use geometry::{Bounds, Interval, Pixel, PlotPath, Point, Rect, Scale};
pub use scale::{pixel_to_position, scale};
pub use wall::dist_on_angle;
pub use zigzag::{Gap, Layout, Zigzag, plot_path};
