//! zagplot - zigzag fill paths for pen plotters
//!
//! Usage:
//!   zagplot plot <image> [options]   Trace a fill over the image's plot area
//!   zagplot config [-o file]         Print the default configuration (YAML)
//!
//! Paths go to stdout (or `-o`); logs go to stderr. `RUST_LOG` refines
//! the log filter set by `-v` / `-q`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

mod cli;

use cli::{PlotArgs, cmd_config, cmd_plot};

#[derive(Parser)]
#[command(name = "zagplot")]
#[command(about = "Zigzag raster-fill paths for pen plotters", long_about = None)]
#[command(version)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trace a zigzag path over an image's plot rectangle
    #[command(alias = "p")]
    Plot(PlotArgs),

    /// Print the default configuration as YAML
    Config {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Log to stderr, keeping stdout clean for path output.
fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Plot(args) => cmd_plot(args),
        Commands::Config { output } => cmd_config(output),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
