//! Plot command - trace a zigzag fill over an image's plot rectangle.
//!
//! Settings come from three layers, later ones winning:
//! built-in defaults, then `--config <yaml>`, then individual flags.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use zagplot::{Configuration, Layout, PlotPath, PlotResult, Rect};

use super::common::{OutputFormat, path_to_json, path_to_svg};
use super::config::load_config;
use super::render::render_png;

/// Arguments for `zagplot plot`.
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Image to plot (only its pixel dimensions are used)
    pub image: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    // ========================================================================
    // Placement
    // ========================================================================
    /// Maximum plot width (mm)
    #[arg(long)]
    pub width: Option<f64>,

    /// Maximum plot height (mm)
    #[arg(long)]
    pub height: Option<f64>,

    /// X position of the image origin (mm)
    #[arg(long, allow_hyphen_values = true)]
    pub start_x: Option<f64>,

    /// Y position of the image origin (mm)
    #[arg(long, allow_hyphen_values = true)]
    pub start_y: Option<f64>,

    /// Stretch to exactly --width x --height instead of keeping aspect
    #[arg(long)]
    pub force_dimensions: bool,

    // ========================================================================
    // Path shape
    // ========================================================================
    /// Spacing between strokes (mm)
    #[arg(short, long)]
    pub separation: Option<f64>,

    /// Nozzle gap (mm)
    #[arg(long)]
    pub gap: Option<f64>,

    /// Stroke angle in degrees; multiples of 90 are rejected
    #[arg(short, long, allow_hyphen_values = true)]
    pub angle: Option<f64>,

    /// Longest step along a stroke (mm)
    #[arg(short, long)]
    pub density: Option<f64>,

    /// Start with the direction flag reversed
    #[arg(long)]
    pub reversed: bool,

    /// Give up after this many points
    #[arg(long)]
    pub max_points: Option<usize>,

    // ========================================================================
    // Device settings (carried into the config, not used by the tracer)
    // ========================================================================
    /// Speed that produces black (mm/s)
    #[arg(long)]
    pub speed_black: Option<f64>,

    /// Minimum speed that produces white (mm/s)
    #[arg(long)]
    pub speed_white: Option<f64>,

    /// Speed curve coefficient
    #[arg(long)]
    pub speed_coefficient: Option<f64>,

    /// Device code emitted before the plot
    #[arg(long)]
    pub print_start: Option<String>,

    /// Device code emitted after the plot
    #[arg(long)]
    pub print_end: Option<String>,

    // ========================================================================
    // Output
    // ========================================================================
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also render a PNG preview to this file
    #[arg(long)]
    pub png: Option<PathBuf>,

    /// Preview resolution in dots per inch
    #[arg(long, default_value_t = 500.0)]
    pub dpi: f64,
}

impl PlotArgs {
    /// Overlay the flags that were given onto `config`.
    pub fn apply(&self, config: &mut Configuration) {
        if let Some(width) = self.width {
            config.size.width = width;
        }
        if let Some(height) = self.height {
            config.size.height = height;
        }
        if let Some(x) = self.start_x {
            config.position.x = x;
        }
        if let Some(y) = self.start_y {
            config.position.y = y;
        }
        if self.force_dimensions {
            config.force_dimensions = true;
        }
        if let Some(separation) = self.separation {
            config.line_separation = separation;
        }
        if let Some(gap) = self.gap {
            config.nozzle_gap = gap;
        }
        if let Some(angle) = self.angle {
            config.plot_angle = angle;
        }
        if let Some(density) = self.density {
            config.plot_density = density;
        }
        if self.reversed {
            config.start_reversed = true;
        }
        if self.max_points.is_some() {
            config.max_points = self.max_points;
        }
        if let Some(speed) = self.speed_black {
            config.speed_black = speed;
        }
        if let Some(speed) = self.speed_white {
            config.speed_white = speed;
        }
        if let Some(coefficient) = self.speed_coefficient {
            config.speed_coefficient = coefficient;
        }
        if let Some(code) = &self.print_start {
            config.plot_start = code.clone();
        }
        if let Some(code) = &self.print_end {
            config.plot_end = code.clone();
        }
    }

    /// Resolve the full configuration: defaults, file, then flags.
    pub fn resolve(&self) -> Result<Configuration> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Configuration::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }
}

/// `zagplot plot`.
pub fn cmd_plot(args: PlotArgs) -> Result<()> {
    let config = args.resolve()?;
    debug!(?config, "resolved configuration");

    let (width, height) = image::image_dimensions(&args.image)
        .with_context(|| format!("Failed to read image {}", args.image.display()))?;
    info!("Loaded {} ({}x{} px)", args.image.display(), width, height);

    let layout = Layout::new(Rect::new(width as f64, height as f64), &config)
        .context("Invalid plot settings")?;
    info!(
        "Plot area {:.2}x{:.2} mm, from ({:.2}, {:.2}) to ({:.2}, {:.2})",
        layout.bounds.x.length(),
        layout.bounds.y.length(),
        layout.start.x,
        layout.start.y,
        layout.end.x,
        layout.end.y,
    );

    let started = Instant::now();
    let path: PlotPath = layout
        .trace()
        .collect::<PlotResult<_>>()
        .context("Failed to trace path")?;
    info!("Traced {} points in {:?}", path.len(), started.elapsed());

    let output = match args.format {
        OutputFormat::Json => path_to_json(&layout, &path).context("Failed to serialize path")?,
        OutputFormat::Svg => path_to_svg(&path, &layout.bounds),
    };

    match &args.output {
        Some(file) => {
            fs::write(file, &output)
                .with_context(|| format!("Failed to write {}", file.display()))?;
            info!("Wrote: {}", file.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            if args.format == OutputFormat::Json {
                stdout.write_all(b"\n")?;
            }
        }
    }

    if let Some(png) = &args.png {
        render_png(&path, &layout.bounds, args.dpi, png)?;
        info!("Wrote: {}", png.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: PlotArgs,
    }

    fn parse(argv: &[&str]) -> PlotArgs {
        let mut full = vec!["zagplot", "in.png"];
        full.extend_from_slice(argv);
        Harness::try_parse_from(full).unwrap().args
    }

    #[test]
    fn no_flags_leaves_config_alone() {
        let mut config = Configuration::default();
        parse(&[]).apply(&mut config);
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn flags_override_fields() {
        let mut config = Configuration::default();
        parse(&[
            "--width", "50", "--height", "25", "--angle", "-30", "--separation", "1.5",
            "--reversed", "--max-points", "1000", "--print-start", "G28",
        ])
        .apply(&mut config);

        assert_eq!(config.size, Rect::new(50.0, 25.0));
        assert_eq!(config.plot_angle, -30.0);
        assert_eq!(config.line_separation, 1.5);
        assert!(config.start_reversed);
        assert_eq!(config.max_points, Some(1000));
        assert_eq!(config.plot_start, "G28");
        assert_eq!(config.plot_end, "ENDPLOT");
    }

    #[test]
    fn negative_origin_parses() {
        let args = parse(&["--start-x", "-10", "--start-y", "-2.5"]);
        assert_eq!(args.start_x, Some(-10.0));
        assert_eq!(args.start_y, Some(-2.5));
    }

    #[test]
    fn format_defaults_to_json() {
        let args = parse(&[]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.dpi, 500.0);
        assert!(parse(&["-f", "svg"]).format == OutputFormat::Svg);
    }
}
