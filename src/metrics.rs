//! Velocity sweep, CSV export, and chart rendering.
//!
//! The `metrics` subcommand samples every slider position, writes the
//! table to CSV, and renders the classic curves (time dilation, Lorentz
//! factor, energy) plus the circular motion-direction diagram as PNGs.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::relativity::input::{RestMass, SLIDER_STEPS, VelocityRatio};
use crate::relativity::special;

#[derive(Debug, Clone, Copy)]
pub struct DataPoint {
    pub velocity_fraction: f64,
    pub gamma: f64,
    pub time_dilation: f64,
    pub rest_energy: f64,
    pub total_energy: f64,
    pub kinetic_energy: f64,
}

/// Evaluate the full bundle of derived quantities at one velocity.
pub fn sample(velocity: VelocityRatio, mass: RestMass) -> DataPoint {
    let v = velocity.ratio();
    let energies = special::energy_calculations(mass.kg(), v);
    DataPoint {
        velocity_fraction: v,
        gamma: special::gamma(v),
        time_dilation: special::time_dilation(v),
        rest_energy: energies.rest,
        total_energy: energies.total,
        kinetic_energy: energies.kinetic,
    }
}

/// Sample every slider position, 0.000c through 0.999c.
pub fn sweep(mass: RestMass) -> Vec<DataPoint> {
    (0..SLIDER_STEPS)
        .map(|position| sample(VelocityRatio::from_slider(position), mass))
        .collect()
}

pub fn export_csv(log: &[DataPoint], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record([
        "velocity_fraction",
        "gamma",
        "time_dilation",
        "rest_energy_j",
        "total_energy_j",
        "kinetic_energy_j",
    ])?;
    for dp in log {
        writer.write_record([
            format!("{:.3}", dp.velocity_fraction),
            format!("{:.6}", dp.gamma),
            format!("{:.6}", dp.time_dilation),
            format!("{:.6e}", dp.rest_energy),
            format!("{:.6e}", dp.total_energy),
            format!("{:.6e}", dp.kinetic_energy),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Render the three effect curves as stacked panels in one PNG.
pub fn plot_curves(log: &[DataPoint], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (800, 1200)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((3, 1));

    // Time dilation, as percent of the normal clock rate.
    let mut chart = ChartBuilder::on(&panels[0])
        .caption("Time Dilation", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..1f64, 0f64..100f64)?;
    chart
        .configure_mesh()
        .x_desc("Velocity (fraction of c)")
        .y_desc("Clock rate (%)")
        .draw()?;
    chart.draw_series(LineSeries::new(
        log.iter().map(|d| (d.velocity_fraction, d.time_dilation * 100.0)),
        &BLUE,
    ))?;

    // Lorentz factor.
    let gamma_max = log.iter().map(|d| d.gamma).fold(1.0, f64::max).ceil();
    let mut chart = ChartBuilder::on(&panels[1])
        .caption("Lorentz Factor", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..1f64, 1f64..gamma_max)?;
    chart
        .configure_mesh()
        .x_desc("Velocity (fraction of c)")
        .y_desc("γ")
        .draw()?;
    chart.draw_series(LineSeries::new(
        log.iter().map(|d| (d.velocity_fraction, d.gamma)),
        &GREEN,
    ))?;

    // Energy decomposition.
    let energy_max = log.iter().map(|d| d.total_energy).fold(0.0, f64::max);
    let mut chart = ChartBuilder::on(&panels[2])
        .caption("Energy (E = γmc²)", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..1f64, 0f64..energy_max)?;
    chart
        .configure_mesh()
        .x_desc("Velocity (fraction of c)")
        .y_desc("Energy (J)")
        .draw()?;
    chart
        .draw_series(LineSeries::new(
            log.iter().map(|d| (d.velocity_fraction, d.total_energy)),
            &BLUE,
        ))?
        .label("Total")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLUE));
    chart
        .draw_series(LineSeries::new(
            log.iter().map(|d| (d.velocity_fraction, d.rest_energy)),
            &BLACK,
        ))?
        .label("Rest")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLACK));
    chart
        .draw_series(LineSeries::new(
            log.iter().map(|d| (d.velocity_fraction, d.kinetic_energy)),
            &RED,
        ))?
        .label("Kinetic")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &RED));
    chart.configure_series_labels().border_style(&BLACK).draw()?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Render the circular motion-direction analogy diagram.
///
/// The circle is the pedagogical time-vs-space tradeoff, not real
/// Minkowski geometry; the red arrow shows where the given velocity sits
/// between "all time" (up) and "all space" (right).
pub fn plot_compass(velocity: VelocityRatio, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (600, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Motion Through Space vs. Time", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(-1.2f64..1.2f64, -1.2f64..1.2f64)?;
    chart
        .configure_mesh()
        .x_desc("Space (light speed)")
        .y_desc("Time (100%)")
        .draw()?;

    // Unit circle and compass axes.
    chart.draw_series(LineSeries::new(
        (0..=100).map(|i| {
            let theta = i as f64 / 100.0 * std::f64::consts::TAU;
            (theta.cos(), theta.sin())
        }),
        &BLACK,
    ))?;
    chart.draw_series(LineSeries::new(vec![(0.0, -1.0), (0.0, 1.0)], &BLACK))?;
    chart.draw_series(LineSeries::new(vec![(-1.0, 0.0), (1.0, 0.0)], &BLACK))?;

    let angle = special::direction_angle(velocity.ratio());
    let arrow = special::create_arrow_coordinates(angle, 1.0, 0.1);
    chart.draw_series(LineSeries::new(arrow.to_vec(), RED.stroke_width(3)))?;

    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
