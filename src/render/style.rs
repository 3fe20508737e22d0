use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::Chart2d;

/// S' frame, the observer at rest.
pub const REST: RGBColor = RGBColor(128, 128, 128);
/// S frame, the moving one.
pub const MOVING: RGBColor = RGBColor(0, 0, 255);
pub const EVENT_A: RGBColor = RGBColor(220, 20, 20);
pub const EVENT_A_TEXT: RGBColor = RGBColor(139, 0, 0);
pub const EVENT_B: RGBColor = RGBColor(20, 160, 20);
pub const EVENT_B_TEXT: RGBColor = RGBColor(0, 100, 0);
pub const ARROW: RGBColor = RGBColor(128, 0, 128);
pub const BACKGROUND_GRID: RGBColor = RGBColor(211, 211, 211);
pub const WHEAT: RGBColor = RGBColor(245, 222, 179);
pub const LIGHT_YELLOW: RGBColor = RGBColor(255, 255, 224);
pub const LIGHT_CYAN: RGBColor = RGBColor(224, 255, 255);

pub const SANS: &str = "sans-serif";
pub const MONO: &str = "monospace";

pub fn font(size: u32) -> TextStyle<'static> {
    TextStyle::from((SANS, size).into_font())
}

pub fn bold(size: u32) -> TextStyle<'static> {
    TextStyle::from((SANS, size).into_font().style(FontStyle::Bold))
}

pub fn mono(size: u32) -> TextStyle<'static> {
    TextStyle::from((MONO, size).into_font())
}

/// Where a text box is pinned inside its area, as fractions of width and height
/// measured from the bottom-left like axes coordinates.
#[derive(Clone, Copy)]
pub struct Anchor {
    pub fx: f64,
    pub fy: f64,
    pub h: HPos,
    pub v: VPos,
}

impl Anchor {
    pub const fn new(fx: f64, fy: f64, h: HPos, v: VPos) -> Self {
        Self { fx, fy, h, v }
    }
}

const BOX_PAD: i32 = 6;
const LINE_GAP: i32 = 3;

/// Draws `lines` in a filled, bordered box anchored inside `area`.
pub fn text_box<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    lines: &[String],
    anchor: Anchor,
    style: &TextStyle,
    fill: RGBAColor,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let (w, h) = area.dim_in_pixel();
    let mut width = 0;
    let mut line_h = 0;
    for line in lines.iter().filter(|l| !l.is_empty()) {
        let (lw, lh) = area.estimate_text_size(line, style)?;
        width = width.max(lw as i32);
        line_h = line_h.max(lh as i32);
    }
    let box_w = width + 2 * BOX_PAD;
    let box_h = lines.len() as i32 * (line_h + LINE_GAP) - LINE_GAP + 2 * BOX_PAD;

    let ax = (anchor.fx * f64::from(w)) as i32;
    let ay = ((1.0 - anchor.fy) * f64::from(h)) as i32;
    let x0 = match anchor.h {
        HPos::Left => ax,
        HPos::Center => ax - box_w / 2,
        HPos::Right => ax - box_w,
    };
    let y0 = match anchor.v {
        VPos::Top => ay,
        VPos::Center => ay - box_h / 2,
        VPos::Bottom => ay - box_h,
    };

    area.draw(&Rectangle::new([(x0, y0), (x0 + box_w, y0 + box_h)], fill.filled()))?;
    area.draw(&Rectangle::new(
        [(x0, y0), (x0 + box_w, y0 + box_h)],
        BLACK.mix(0.4).stroke_width(1),
    ))?;
    let text_style = style.clone().pos(Pos::new(HPos::Left, VPos::Top));
    for (i, line) in lines.iter().enumerate().filter(|(_, l)| !l.is_empty()) {
        let y = y0 + BOX_PAD + i as i32 * (line_h + LINE_GAP);
        area.draw(&Text::new(line.as_str(), (x0 + BOX_PAD, y), text_style.clone()))?;
    }
    Ok(())
}

/// Label with a white background centred on the data point `at`.
pub fn label_at<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    text: &str,
    at: (f64, f64),
    style: &TextStyle,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let (tw, th) = chart.plotting_area().estimate_text_size(text, style)?;
    let (hw, hh) = (tw as i32 / 2 + 3, th as i32 / 2 + 2);
    let centred = style.clone().pos(Pos::new(HPos::Center, VPos::Center));
    chart.draw_series(std::iter::once(
        EmptyElement::at(at)
            + Rectangle::new([(-hw, -hh), (hw, hh)], WHITE.mix(0.9).filled())
            + Text::new(text.to_string(), (0, 0), centred),
    ))?;
    Ok(())
}

/// Plain text whose bottom-left corner sits on `at`.
pub fn text_at<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    text: &str,
    at: (f64, f64),
    style: &TextStyle,
    h: HPos,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let anchored = style.clone().pos(Pos::new(h, VPos::Bottom));
    chart.draw_series(std::iter::once(Text::new(text.to_string(), at, anchored)))?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heads {
    End,
    Both,
}

/// Straight arrow in data coordinates. Relies on equal aspect so the heads
/// keep their shape.
pub fn arrow<DB: DrawingBackend>(
    chart: &mut Chart2d<'_, DB>,
    from: (f64, f64),
    to: (f64, f64),
    color: RGBColor,
    heads: Heads,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    chart.draw_series(std::iter::once(PathElement::new(vec![from, to], color.stroke_width(3))))?;
    chart.draw_series(std::iter::once(Polygon::new(arrow_head(from, to, ARROW_HEAD), color.filled())))?;
    if heads == Heads::Both {
        chart.draw_series(std::iter::once(Polygon::new(arrow_head(to, from, ARROW_HEAD), color.filled())))?;
    }
    Ok(())
}

const ARROW_HEAD: f64 = 0.15;

fn arrow_head(from: (f64, f64), tip: (f64, f64), size: f64) -> Vec<(f64, f64)> {
    let (dx, dy) = (tip.0 - from.0, tip.1 - from.1);
    let len = dx.hypot(dy).max(f64::EPSILON);
    let (ux, uy) = (dx / len, dy / len);
    let base = (tip.0 - ux * size, tip.1 - uy * size);
    let half = size * 0.45;
    vec![
        tip,
        (base.0 - uy * half, base.1 + ux * half),
        (base.0 + uy * half, base.1 - ux * half),
    ]
}

/// Pixel margins (top, bottom, left, right) that leave a plotting region
/// whose width/height ratio equals `x_span / y_span` once the label areas
/// of `label_px` (x axis, y axis) are taken out.
pub fn aspect_margins(
    (w, h): (u32, u32),
    x_span: f64,
    y_span: f64,
    (x_label, y_label): (u32, u32),
) -> (u32, u32, u32, u32) {
    let avail_w = f64::from(w.saturating_sub(y_label));
    let avail_h = f64::from(h.saturating_sub(x_label));
    let scale = (avail_w / x_span).min(avail_h / y_span);
    let slack_w = (avail_w - scale * x_span).max(0.0).round() as u32;
    let slack_h = (avail_h - scale * y_span).max(0.0).round() as u32;
    let left = slack_w / 2;
    let top = slack_h / 2;
    (top, slack_h - top, left, slack_w - left)
}

/// Sub-area in which one x unit and one y unit span the same number of pixels.
pub fn fit_aspect<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    x_span: f64,
    y_span: f64,
    labels: (u32, u32),
) -> DrawingArea<DB, Shift> {
    let (top, bottom, left, right) = aspect_margins(area.dim_in_pixel(), x_span, y_span, labels);
    area.margin(top as i32, bottom as i32, left as i32, right as i32)
}
