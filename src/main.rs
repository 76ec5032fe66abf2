use std::path::Path;

use clap::{Parser, Subcommand};

use stmv::metrics;
use stmv::relativity::input::{RestMass, VelocityRatio};
use stmv::tui;

/// STMV - Space-Time Motion Visualizer
#[derive(Parser)]
#[command(name = "stmv", about = "Interactive terminal visualizer for special relativity")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive visualizer
    Tui,
    /// Sweep the velocity range, export CSV and chart PNGs
    Metrics {
        /// Rest mass in pounds for the energy curves
        #[arg(long, default_value_t = 1.0)]
        mass_lbs: f64,
        /// Velocity ratio (v/c) marked on the direction diagram
        #[arg(long, default_value_t = 0.6)]
        velocity: f64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Tui) | None => tui::start()?,
        Some(Commands::Metrics { mass_lbs, velocity }) => run_metrics(mass_lbs, velocity)?,
    }

    Ok(())
}

fn run_metrics(mass_lbs: f64, velocity: f64) -> anyhow::Result<()> {
    let mass = RestMass::from_lbs(mass_lbs)?;
    let velocity = VelocityRatio::new(velocity)?;

    let log = metrics::sweep(mass);
    metrics::export_csv(&log, Path::new("metrics.csv"))?;
    metrics::plot_curves(&log, Path::new("curves.png"))?;
    metrics::plot_compass(velocity, Path::new("compass.png"))?;

    println!("wrote metrics.csv, curves.png, compass.png");
    Ok(())
}
