pub mod spacetime;
pub mod spatial;
pub mod style;

use std::path::Path;

use anyhow::Context;
use plotters::coord::Shift;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::scene::{FrameState, Scenario};

pub type Chart2d<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Paints one frame of `scenario` to a PNG at `path`. The canvas is cleared
/// and fully redrawn every time.
pub fn render_frame(scenario: Scenario, state: &FrameState, path: &Path) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, scenario.canvas()).into_drawing_area();
    draw_frame(&root, scenario, state)?;
    root.present()
        .with_context(|| format!("failed to write frame {}", path.display()))?;
    Ok(())
}

pub fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    scenario: Scenario,
    state: &FrameState,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;
    match scenario {
        Scenario::GalileanSingle => {
            spacetime::draw_spacetime_panel(&root.margin(10, 10, 10, 10), state, scenario.spacetime_title())?;
        }
        Scenario::GalileanTwoPanel => {
            let (w, _) = root.dim_in_pixel();
            let (left, right) = root.split_horizontally(w as i32 / 2);
            spacetime::draw_spacetime_panel(&left.margin(10, 10, 10, 10), state, scenario.spacetime_title())?;
            spatial::draw_galilean_panel(&right.margin(10, 10, 10, 10), state)?;
        }
        Scenario::LorentzThreePanel => {
            let (w, _) = root.dim_in_pixel();
            let (left, right) = root.split_horizontally((f64::from(w) * 1.2 / 2.2) as i32);
            spacetime::draw_spacetime_panel(&left.margin(10, 10, 10, 10), state, scenario.spacetime_title())?;
            let panels = right.margin(10, 10, 20, 10).split_evenly((2, 1));
            spatial::draw_lorentz_event_a(&panels[0], state)?;
            spatial::draw_lorentz_event_b(&panels[1], state)?;
        }
    }
    Ok(())
}
