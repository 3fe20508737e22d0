//! Physical-space panels: the S' ruler at rest and the S ruler drifting
//! with the moving frame, ticked at 1/γ.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use super::Chart2d;
use super::style::{self, Anchor, Heads};
use crate::relativity::grid::Window;
use crate::relativity::special::length_contraction;
use crate::scene::{FrameState, SpatialSnapshot, VelocityArrow};

const TICK_HALF: f64 = 0.08;
/// The moving x axis is lifted slightly so it stays visible when the frames coincide.
const MOVING_AXIS_Y: f64 = 0.03;

pub fn spatial_chart<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    window: &Window,
) -> anyhow::Result<Chart2d<'a, DB>>
where
    DB::ErrorType: 'static,
{
    let chart = ChartBuilder::on(area).build_cartesian_2d(window.x.0..window.x.1, window.y.0..window.y.1)?;
    Ok(chart)
}

/// Background grid, both axes and both sets of tick marks. Draws no text.
pub fn draw_rulers<DB: DrawingBackend>(chart: &mut Chart2d<'_, DB>, snap: &SpatialSnapshot) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let w = snap.window;
    let faint = style::BACKGROUND_GRID.mix(0.4).stroke_width(1);
    let mut background = Vec::new();
    for val in snap.background_lines().map(f64::from) {
        if val > w.x.0 && val < w.x.1 {
            background.push(vec![(val, w.y.0), (val, w.y.1)]);
        }
        if val > w.y.0 && val < w.y.1 {
            background.push(vec![(w.x.0, val), (w.x.1, val)]);
        }
    }
    chart.draw_series(background.into_iter().map(|p| PathElement::new(p, faint)))?;

    let rest = style::REST.stroke_width(2);
    chart
        .draw_series([
            PathElement::new(vec![(w.x.0, 0.0), (w.x.1, 0.0)], rest),
            PathElement::new(vec![(0.0, w.y.0), (0.0, w.y.1)], rest),
        ])?
        .label("S' frame (at rest)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], rest));
    chart.draw_series(
        snap.rest_ticks()
            .into_iter()
            .map(|t| PathElement::new(vec![(t, -TICK_HALF), (t, TICK_HALF)], rest)),
    )?;

    let moving = style::MOVING.mix(0.8).stroke_width(2);
    let mut axes = vec![PathElement::new(
        vec![(w.x.0, MOVING_AXIS_Y), (w.x.1, MOVING_AXIS_Y)],
        moving,
    )];
    if snap.origin_visible() {
        axes.push(PathElement::new(vec![(snap.origin, w.y.0), (snap.origin, w.y.1)], moving));
    }
    chart
        .draw_series(axes)?
        .label("S frame (moving at −v)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], moving));
    chart.draw_series(snap.moving_ticks().into_iter().map(|(_, pos)| {
        PathElement::new(
            vec![(pos, MOVING_AXIS_Y - TICK_HALF), (pos, MOVING_AXIS_Y + TICK_HALF)],
            moving,
        )
    }))?;
    Ok(())
}

fn draw_ruler_labels<DB: DrawingBackend>(chart: &mut Chart2d<'_, DB>, snap: &SpatialSnapshot) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let w = snap.window;
    let rest = style::bold(17).color(&style::REST);
    let moving = style::bold(17).color(&style::MOVING);

    style::text_at(chart, "x'", (w.x.1 - 0.3, -0.3), &rest, HPos::Left)?;
    style::text_at(chart, "y'", (0.15, w.y.1 - 0.3), &rest, HPos::Left)?;
    style::text_at(chart, "x", (w.x.1 - 0.3, 0.2), &moving, HPos::Left)?;
    if snap.y_label_visible() {
        style::text_at(chart, "y", (snap.origin - 0.35, w.y.1 - 0.3), &moving, HPos::Left)?;
    }

    let tick_style = style::font(11).color(&style::MOVING);
    for (n, pos) in snap.moving_ticks() {
        style::text_at(chart, &n.to_string(), (pos, 0.25), &tick_style, HPos::Center)?;
    }

    style::text_at(chart, "O'", (0.12, -0.45), &style::bold(14).color(&style::REST), HPos::Left)?;
    if snap.origin_label_visible() {
        style::text_at(
            chart,
            "O",
            (snap.origin + 0.12, -0.45),
            &style::bold(14).color(&style::MOVING),
            HPos::Left,
        )?;
    }
    Ok(())
}

pub fn velocity_label(arrow: VelocityArrow, v: f64) -> String {
    match arrow {
        VelocityArrow::Displacement { .. } => format!("v = {v:.2}c"),
        VelocityArrow::Direction => format!("S moves at −{v:.2}c"),
    }
}

fn draw_velocity_arrow<DB: DrawingBackend>(chart: &mut Chart2d<'_, DB>, snap: &SpatialSnapshot) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let Some(kind) = snap.velocity_arrow() else {
        return Ok(());
    };
    let label = velocity_label(kind, snap.v);
    let (from, to, label_pos, size) = match kind {
        VelocityArrow::Displacement { to: origin } => {
            let y = -1.2;
            ((-0.05, y), (origin + 0.05, y), (origin / 2.0, y - 0.35), 16)
        }
        VelocityArrow::Direction => {
            let y = snap.window.y.0 + 0.6;
            ((0.8, y), (-0.8, y), (0.0, y - 0.35), 12)
        }
    };
    style::arrow(chart, from, to, style::ARROW, Heads::End)?;
    style::text_at(chart, &label, label_pos, &style::bold(size).color(&style::ARROW), HPos::Center)?;
    Ok(())
}

fn draw_event_marker<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    x: f64,
    name: &str,
    marker: RGBColor,
    text: &TextStyle,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    chart.draw_series(std::iter::once(Circle::new((x, 0.0), 10, marker.filled())))?;
    style::label_at(chart, name, (x, 0.6), text)
}

/// Title, equal-aspect chart, rulers and velocity arrow; `extras` then adds
/// the scenario-specific markers on the same chart, and the frame legend
/// goes on top when `legend` is set.
pub fn draw_spatial_panel<DB, F>(
    area: &DrawingArea<DB, Shift>,
    snap: &SpatialSnapshot,
    title: &str,
    legend: bool,
    extras: F,
) -> anyhow::Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    F: FnOnce(&mut Chart2d<'_, DB>) -> anyhow::Result<()>,
{
    let body = area.titled(title, style::bold(16))?;
    let fitted = style::fit_aspect(&body, snap.window.width(), snap.window.height(), (0, 0));
    let mut chart = spatial_chart(&fitted, &snap.window)?;
    draw_rulers(&mut chart, snap)?;
    draw_ruler_labels(&mut chart, snap)?;
    draw_velocity_arrow(&mut chart, snap)?;
    extras(&mut chart)?;
    if legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK.mix(0.4))
            .label_font(style::font(15))
            .draw()?;
    }
    Ok(())
}

/// Single snapshot at ct = 1, valid because Galilean time is absolute.
pub fn draw_galilean_panel<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, state: &FrameState) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let snap = state.galilean_snapshot();
    draw_spatial_panel(area, &snap, "Physical Space (S' Frame)", true, |chart| {
        // A happens at t = 0 while the frames coincide, so it is always at x' = 1.
        draw_event_marker(chart, 1.0, "A", style::EVENT_A, &style::bold(16).color(&style::EVENT_A_TEXT))?;
        draw_event_marker(
            chart,
            state.b_prime.x,
            "B",
            style::EVENT_B,
            &style::bold(16).color(&style::EVENT_B_TEXT),
        )
    })
}

/// Length of the S unit rod as seen from S'.
pub fn contraction_label(v: f64) -> String {
    format!("Δx' = 1/γ = {:.2}", length_contraction(1.0, v))
}

pub fn time_dilation_lines(gamma: f64) -> Vec<String> {
    vec![
        "S clock:  ct = 1".to_string(),
        format!("S' clock: ct' = γ = {gamma:.2}"),
    ]
}

/// Event A at its own ct': the S ruler is contracted to 1/γ.
pub fn draw_lorentz_event_a<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, state: &FrameState) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let snap = state.lorentz_snapshot(state.a_prime);
    draw_spatial_panel(area, &snap, &snap.title("A"), false, |chart| {
        if snap.contains_x(state.a_prime.x) {
            draw_event_marker(
                chart,
                state.a_prime.x,
                "A",
                style::EVENT_A,
                &style::bold(16).color(&style::EVENT_A_TEXT),
            )?;
        }
        if let Some((from, to)) = state.contraction_bracket() {
            let y = -0.8;
            style::arrow(chart, (from, y), (to, y), style::EVENT_A_TEXT, Heads::Both)?;
            style::text_at(
                chart,
                &contraction_label(state.v),
                ((from + to) / 2.0, y - 0.35),
                &style::bold(13).color(&style::EVENT_A_TEXT),
                HPos::Center,
            )?;
        }
        Ok(())
    })
}

/// Event B at its own ct': the S clock reads 1 while the S' clock reads γ.
pub fn draw_lorentz_event_b<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, state: &FrameState) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let snap = state.lorentz_snapshot(state.b_prime);
    draw_spatial_panel(area, &snap, &snap.title("B"), false, |chart| {
        if snap.contains_x(state.b_prime.x) {
            draw_event_marker(
                chart,
                state.b_prime.x,
                "B",
                style::EVENT_B,
                &style::bold(16).color(&style::EVENT_B_TEXT),
            )?;
        }
        if state.shows_time_dilation() {
            let plot = chart.plotting_area().strip_coord_spec();
            style::text_box(
                &plot,
                &time_dilation_lines(state.gamma),
                Anchor::new(0.98, 0.92, HPos::Right, VPos::Top),
                &style::bold(13),
                style::LIGHT_CYAN.mix(0.9),
            )?;
        }
        Ok(())
    })
}
