//! CLI command implementations.
//!
//! - `plot` - Trace a zigzag fill over an image and write JSON or SVG
//! - `config` - Print the default configuration as YAML

pub mod common;
pub mod config;
pub mod plot;
pub mod render;

pub use config::cmd_config;
pub use plot::{PlotArgs, cmd_plot};
