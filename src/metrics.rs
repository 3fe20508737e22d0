use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::scene::Scenario;

/// One row per animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    pub frame: usize,
    pub velocity_fraction: f64,
    pub gamma: f64,
    pub a_x: f64,
    pub a_ct: f64,
    pub b_x: f64,
    pub b_ct: f64,
    pub a_interval: f64,
    pub b_interval: f64,
}

pub const HEADER: [&str; 9] = [
    "frame",
    "velocity_fraction",
    "gamma",
    "a_x_prime",
    "a_ct_prime",
    "b_x_prime",
    "b_ct_prime",
    "a_interval_prime",
    "b_interval_prime",
];

pub fn collect(scenario: Scenario) -> Vec<FrameRecord> {
    (0..scenario.total_frames())
        .map(|frame| {
            let st = scenario.frame_state(frame);
            FrameRecord {
                frame,
                velocity_fraction: st.v,
                gamma: st.gamma,
                a_x: st.a_prime.x,
                a_ct: st.a_prime.ct,
                b_x: st.b_prime.x,
                b_ct: st.b_prime.ct,
                a_interval: st.a_prime.interval(),
                b_interval: st.b_prime.interval(),
            }
        })
        .collect()
}

pub fn export_csv(log: &[FrameRecord], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    wtr.write_record(HEADER)?;
    for r in log {
        wtr.write_record([
            r.frame.to_string(),
            format!("{:.4}", r.velocity_fraction),
            format!("{:.6}", r.gamma),
            format!("{:.6}", r.a_x),
            format!("{:.6}", r.a_ct),
            format!("{:.6}", r.b_x),
            format!("{:.6}", r.b_ct),
            format!("{:.6}", r.a_interval),
            format!("{:.6}", r.b_interval),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Transformed coordinates of A and B against velocity.
pub fn plot_results(log: &[FrameRecord], path: &Path, caption: &str) -> Result<()> {
    let root = BitMapBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let values = || log.iter().flat_map(|d| [d.a_x, d.a_ct, d.b_x, d.b_ct, d.gamma]);
    let y_min = values().fold(0.0, f64::min).floor();
    let y_max = values().fold(1.0, f64::max).ceil();

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..1f64, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Velocity (fraction of c)")
        .y_desc("Coordinate in S'")
        .draw()?;

    let columns: [(&str, fn(&FrameRecord) -> f64, RGBColor); 5] = [
        ("x'_A", |d| d.a_x, RED),
        ("ct'_A", |d| d.a_ct, MAGENTA),
        ("x'_B", |d| d.b_x, GREEN),
        ("ct'_B", |d| d.b_ct, CYAN),
        ("Lorentz factor γ", |d| d.gamma, BLACK),
    ];
    for (label, value, color) in columns {
        chart
            .draw_series(LineSeries::new(
                log.iter().map(|d| (d.velocity_fraction, value(d))),
                &color,
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], color));
    }

    chart.configure_series_labels().border_style(&BLACK).draw()?;
    root.present()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
