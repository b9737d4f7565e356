//! Plot configuration.
//!
//! One flat record, read-only once a run starts. The CLI fills it from
//! built-in defaults, then an optional YAML file, then command-line flags.
//!
//! Several fields (`nozzle_gap`, the speeds, the start/end markers) belong
//! to the device-output side and are carried here untouched so a config
//! file can describe a whole job.

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::geometry::{Point, Rect};

/// Everything the path generator needs besides the source extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Maximum plot area in millimetres.
    pub size: Rect,

    /// Physical position of pixel (0, 0).
    pub position: Point,

    /// Stretch to exactly `size` instead of fitting inside it.
    pub force_dimensions: bool,

    /// Perpendicular spacing between strokes (mm).
    pub line_separation: f64,

    /// Gap between nozzle and print target (mm).
    pub nozzle_gap: f64,

    /// Stroke angle in degrees. Only the integer part is used.
    pub plot_angle: f64,

    /// Start with the direction flag set, so the first stroke after the
    /// opening wall jog runs back into the start wall.
    pub start_reversed: bool,

    /// Longest single step along a stroke (mm).
    pub plot_density: f64,

    /// Speed that produces black (mm/s).
    pub speed_black: f64,

    /// Minimum speed that produces white (mm/s).
    pub speed_white: f64,

    /// Shapes the speed curve between black and white.
    pub speed_coefficient: f64,

    /// Device code emitted before the plot.
    pub plot_start: String,

    /// Device code emitted after the plot.
    pub plot_end: String,

    /// Give up after this many points. `None` derives a cap from the layout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_points: Option<usize>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            size: Rect::new(100.0, 100.0),
            position: Point::new(0.0, 0.0),
            force_dimensions: false,
            line_separation: 0.4,
            nozzle_gap: 0.2,
            plot_angle: 45.0,
            start_reversed: false,
            plot_density: 0.5,
            speed_black: 3.0,
            speed_white: 10.0,
            speed_coefficient: 1.0,
            plot_start: "STARTPLOT".to_string(),
            plot_end: "ENDPLOT".to_string(),
            max_points: None,
        }
    }
}

impl Configuration {
    /// Check the fields the path generator depends on.
    ///
    /// The angle is not checked here; `Layout::new` rejects axis-aligned
    /// angles with [`PlotError::DegenerateAngle`].
    pub fn validate(&self) -> PlotResult<()> {
        if !self.size.is_proper() {
            return Err(PlotError::DegenerateInput(format!(
                "plot size {}x{} must be positive",
                self.size.width, self.size.height
            )));
        }
        if !self.position.is_finite() {
            return Err(PlotError::DegenerateInput(format!(
                "start position ({}, {}) must be finite",
                self.position.x, self.position.y
            )));
        }
        positive("line separation", self.line_separation)?;
        positive("plot density", self.plot_density)?;
        if !self.plot_angle.is_finite() {
            return Err(PlotError::DegenerateInput("plot angle must be finite".into()));
        }
        if self.max_points == Some(0) {
            return Err(PlotError::DegenerateInput("max points must be at least 1".into()));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> PlotResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PlotError::DegenerateInput(format!("{name} must be positive, got {value}")))
    }
}
