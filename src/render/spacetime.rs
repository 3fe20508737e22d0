//! Spacetime diagram in S' coordinates: the fixed S' grid, the boosted S
//! grid on top of it, and the canonical events A and B.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, VPos};

use super::Chart2d;
use super::style::{self, Anchor};
use crate::relativity::grid::{self, Segment, Window};
use crate::relativity::special::{Boost, EVENT_A, EVENT_B, ORIGIN};
use crate::scene::FrameState;

const X_LABEL_AREA: u32 = 45;
const Y_LABEL_AREA: u32 = 55;

pub fn spacetime_chart<'a, DB: DrawingBackend>(
    area: &'a DrawingArea<DB, Shift>,
    (x_label, y_label): (u32, u32),
) -> anyhow::Result<Chart2d<'a, DB>>
where
    DB::ErrorType: 'static,
{
    let w = Window::SPACETIME;
    let chart = ChartBuilder::on(area)
        .x_label_area_size(x_label as i32)
        .y_label_area_size(y_label as i32)
        .build_cartesian_2d(w.x.0..w.x.1, w.y.0..w.y.1)?;
    Ok(chart)
}

fn draw_segments<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    segments: &[Segment],
    thin: ShapeStyle,
    thick: ShapeStyle,
    label: &str,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    chart.draw_series(
        segments
            .iter()
            .filter(|s| !s.axis)
            .map(|s| PathElement::new(vec![s.from, s.to], thin)),
    )?;
    chart
        .draw_series(
            segments
                .iter()
                .filter(|s| s.axis)
                .map(|s| PathElement::new(vec![s.from, s.to], thick)),
        )?
        .label(label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], thick));
    Ok(())
}

/// Gray orthogonal S' grid, identical in every spacetime panel.
pub fn draw_reference_grid<DB: DrawingBackend>(chart: &mut Chart2d<'_, DB>) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    draw_segments(
        chart,
        &grid::reference_grid(&Window::SPACETIME),
        style::REST.mix(0.5).stroke_width(1),
        style::REST.stroke_width(2),
        "S' coordinates (x', ct')",
    )
}

/// Blue S grid as seen from S' under `boost`.
pub fn draw_moving_grid<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    boost: Boost,
    v: f64,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    draw_segments(
        chart,
        &grid::moving_grid(boost, v, &Window::SPACETIME),
        style::MOVING.mix(0.7).stroke_width(1),
        style::MOVING.stroke_width(3),
        "S coordinates (x, ct)",
    )
}

/// Coordinate summary for O→A and O→B. Intervals are only listed for
/// boosts that preserve them.
pub fn event_summary(state: &FrameState) -> Vec<String> {
    let (a, b) = (state.a_prime, state.b_prime);
    if !state.boost.preserves_interval() {
        return vec![
            format!(
                "O → A:  Δx = 1, Δct = 0  →  Δx' = {:.2}, Δct' = {:.2}",
                a.x, a.ct
            ),
            format!(
                "O → B:  Δx = 0, Δct = 1  →  Δx' = {:.2}, Δct' = {:.2}",
                b.x, b.ct
            ),
        ];
    }
    vec![
        format!("O→A: Δx=1, Δct=0 → Δx'={:.2}, Δct'={:.2}", a.x, a.ct),
        format!(
            "  s²=Δx²−Δ(ct)²:  S:{:.0}   S':{:.1}",
            EVENT_A.interval(),
            a.interval()
        ),
        String::new(),
        format!("O→B: Δx=0, Δct=1 → Δx'={:.2}, Δct'={:.2}", b.x, b.ct),
        format!(
            "  s²=Δx²−Δ(ct)²:  S:{:.0}   S':{:.1}",
            EVENT_B.interval(),
            b.interval()
        ),
    ]
}

/// v readout, plus γ for the Lorentz boost.
pub fn velocity_readout(state: &FrameState) -> Vec<String> {
    let mut lines = vec![format!("v = {:.2}c", state.v)];
    if state.boost == Boost::Lorentz {
        lines.push(format!("γ = {:.2}", state.gamma));
    }
    lines
}

fn draw_events<DB: DrawingBackend>(chart: &mut Chart2d<'_, DB>, state: &FrameState) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let (origin_label, a_lines, b_lines) = match state.boost {
        Boost::Galilean => ("O (origin)", vec!["A", "(x=1, ct=0)"], vec!["B", "(x=0, ct=1)"]),
        Boost::Lorentz => ("O", vec!["A"], vec!["B"]),
    };

    chart.draw_series(std::iter::once(Circle::new((ORIGIN.x, ORIGIN.ct), 8, BLACK.filled())))?;
    style::text_at(chart, origin_label, (ORIGIN.x + 0.5, ORIGIN.ct + 0.5), &style::bold(14), HPos::Left)?;

    let events = [
        (state.a_prime, style::EVENT_A, style::bold(13).color(&style::EVENT_A_TEXT), a_lines, -1.5),
        (state.b_prime, style::EVENT_B, style::bold(13).color(&style::EVENT_B_TEXT), b_lines, 1.0),
    ];
    for (event, marker, label_style, lines, dy) in events {
        if !Window::SPACETIME.contains((event.x, event.ct)) {
            continue;
        }
        chart.draw_series(std::iter::once(Circle::new((event.x, event.ct), 8, marker.filled())))?;
        for (i, line) in lines.iter().enumerate() {
            let at = (event.x + 1.0, event.ct + dy - 0.6 * i as f64);
            style::label_at(chart, line, at, &label_style)?;
        }
    }
    Ok(())
}

/// Full spacetime panel: title, equal-aspect axes, both grids, events,
/// legend and the summary boxes.
pub fn draw_spacetime_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    state: &FrameState,
    title: &str,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let body = area.titled(title, style::bold(20))?;
    let window = Window::SPACETIME;
    let fitted = style::fit_aspect(&body, window.width(), window.height(), (X_LABEL_AREA, Y_LABEL_AREA));
    let mut chart = spacetime_chart(&fitted, (X_LABEL_AREA, Y_LABEL_AREA))?;

    chart
        .configure_mesh()
        .bold_line_style(style::BACKGROUND_GRID.mix(0.5))
        .light_line_style(style::BACKGROUND_GRID.mix(0.2))
        .x_labels(11)
        .y_labels(11)
        .x_desc("x'")
        .y_desc("ct'")
        .axis_desc_style(style::font(18))
        .label_style(style::font(13))
        .draw()?;

    draw_reference_grid(&mut chart)?;
    draw_moving_grid(&mut chart, state.boost, state.v)?;
    draw_events(&mut chart, state)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK.mix(0.4))
        .label_font(style::font(15))
        .draw()?;

    let plot = chart.plotting_area().strip_coord_spec();
    let summary_y = if state.boost.preserves_interval() { 0.15 } else { 0.12 };
    style::text_box(
        &plot,
        &event_summary(state),
        Anchor::new(0.02, summary_y, HPos::Left, VPos::Bottom),
        &style::mono(13),
        style::LIGHT_YELLOW.mix(0.9),
    )?;
    style::text_box(
        &plot,
        &velocity_readout(state),
        Anchor::new(0.98, 0.02, HPos::Right, VPos::Bottom),
        &style::bold(17),
        style::WHEAT.mix(0.9),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scenario;

    #[test]
    fn galilean_summary_skips_intervals() {
        let state = Scenario::GalileanSingle.frame_state(116);
        let lines = event_summary(&state);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| !l.contains("s²")));
        assert_eq!(lines[1], "O → B:  Δx = 0, Δct = 1  →  Δx' = -0.20, Δct' = 1.00");
    }

    #[test]
    fn lorentz_summary_lists_matching_intervals() {
        let state = Scenario::LorentzThreePanel.frame_state(900);
        let lines = event_summary(&state);
        assert_eq!(lines.len(), 5);
        assert!(lines[1].ends_with("S:1   S':1.0"));
        assert!(lines[4].ends_with("S:-1   S':-1.0"));
    }

    #[test]
    fn readout_shows_gamma_only_for_lorentz() {
        let galilean = Scenario::GalileanSingle.frame_state(0);
        assert_eq!(velocity_readout(&galilean), vec!["v = 0.00c".to_string()]);

        let mut lorentz = Scenario::LorentzThreePanel.frame_state(0);
        lorentz.v = 0.6;
        lorentz.gamma = 1.25;
        assert_eq!(velocity_readout(&lorentz), vec!["v = 0.60c", "γ = 1.25"]);
    }
}
