//! Error types for path generation.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` writes the
//! `Display` and `std::error::Error` impls for us from the `#[error(...)]`
//! attributes, so each variant documents its own message.
//!
//! Every variant is fatal for the run: a zigzag path with a hole in it is
//! useless to the plotter, so nothing here carries a partial path.

use thiserror::Error;

/// Errors that can occur while planning or tracing a path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// A size, spacing or step is zero, negative or not finite.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// The plot angle puts strokes parallel to a wall, so wall intersections
    /// are singular.
    #[error("Degenerate plot angle {degrees}°: strokes must not be parallel to the plot edges")]
    DegenerateAngle { degrees: f64 },

    /// The tracer gave up before landing on the end corner.
    #[error("Path did not reach the end corner within {limit} points")]
    NonTerminatingPath { limit: usize },
}

/// Result type alias for path generation.
pub type PlotResult<T> = Result<T, PlotError>;
