//! Command-line front end for the Recamán tube generator.
//!
//! ```text
//! recaman-tube -n 80 --twist_factor 0.3 --output recaman.obj
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use recaman_tube::RecamanConfig;
use tracing::{info, Level};

/// Generates an OBJ model of a twisted tube visualization of Recamán's sequence.
#[derive(Parser, Debug)]
#[command(name = "recaman-tube")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Length of the sequence to be generated
    #[arg(short = 'n', default_value_t = 50)]
    n: usize,

    /// Strength of the twist on the model (must be non-zero)
    #[arg(long = "twist_factor", default_value_t = 0.2, allow_negative_numbers = true)]
    twist_factor: f64,

    /// Arc samples per unit along the number axis
    #[arg(long = "arc_resolution", default_value_t = 10)]
    arc_resolution: u32,

    /// Radius of the tube following the curve
    #[arg(long = "tube_radius", default_value_t = 1.0)]
    tube_radius: f64,

    /// Points around each ring of the tube
    #[arg(long = "tube_resolution", default_value_t = 8)]
    tube_resolution: usize,

    /// Draw a straight reference tube along the number axis
    #[arg(
        long = "number_axis",
        default_value_t = true,
        action = ArgAction::Set,
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    number_axis: bool,

    /// Radius of the number axis tube
    #[arg(long = "number_axis_radius", default_value_t = 1.0)]
    number_axis_radius: f64,

    /// Output OBJ file
    #[arg(long, default_value = "a.obj")]
    output: PathBuf,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn config(&self) -> RecamanConfig {
        RecamanConfig::default()
            .with_length(self.n)
            .with_twist_factor(self.twist_factor)
            .with_arc_resolution(self.arc_resolution)
            .with_tube_radius(self.tube_radius)
            .with_tube_resolution(self.tube_resolution)
            .with_number_axis(self.number_axis)
            .with_number_axis_radius(self.number_axis_radius)
    }

    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let summary = recaman_tube::generate(&cli.config(), &cli.output)?;

    info!(
        output = %cli.output.display(),
        vertices = summary.vertices,
        faces = summary.faces,
        "Done"
    );

    Ok(())
}
