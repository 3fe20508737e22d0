//! Coordinate lines of the rest frame S' and the moving frame S, both
//! expressed in S' coordinates and clipped to the visible spacetime window.

use super::special::Boost;

pub const SPACETIME_LIMITS: (f64, f64) = (-10.0, 10.0);
/// Lines are generated over this parameter range, wider than the window.
pub const LINE_EXTENT: f64 = 15.0;
pub const GRID_STEP: f64 = 2.0;
pub const GRID_MAX: f64 = 8.0;

/// Axis-aligned visible region in (x, ct).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Window {
    pub const SPACETIME: Window = Window {
        x: SPACETIME_LIMITS,
        y: SPACETIME_LIMITS,
    };

    pub fn width(&self) -> f64 {
        self.x.1 - self.x.0
    }

    pub fn height(&self) -> f64 {
        self.y.1 - self.y.0
    }

    pub fn contains(&self, (x, y): (f64, f64)) -> bool {
        x >= self.x.0 && x <= self.x.1 && y >= self.y.0 && y <= self.y.1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFamily {
    /// Lines of constant time in the frame that owns the grid.
    TimeConst,
    /// Lines of constant position in the frame that owns the grid.
    SpaceConst,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub family: LineFamily,
    pub axis: bool,
}

impl Segment {
    fn new(from: (f64, f64), to: (f64, f64), family: LineFamily, axis: bool) -> Self {
        Self { from, to, family, axis }
    }

    /// Liang–Barsky clip against `window`; `None` when nothing is visible.
    pub fn clip(&self, window: &Window) -> Option<Segment> {
        let (x0, y0) = self.from;
        let dx = self.to.0 - x0;
        let dy = self.to.1 - y0;
        let mut t0 = 0.0f64;
        let mut t1 = 1.0f64;

        let edges = [
            (-dx, x0 - window.x.0),
            (dx, window.x.1 - x0),
            (-dy, y0 - window.y.0),
            (dy, window.y.1 - y0),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }

        if t1 - t0 <= 1e-12 {
            return None;
        }

        let inside = |x: f64, y: f64| {
            (
                x.clamp(window.x.0, window.x.1),
                y.clamp(window.y.0, window.y.1),
            )
        };
        Some(Segment {
            from: inside(x0 + t0 * dx, y0 + t0 * dy),
            to: inside(x0 + t1 * dx, y0 + t1 * dy),
            ..*self
        })
    }
}

/// Coordinate values that receive a thin grid line: -8, -6, ..., 8.
pub fn coord_values() -> impl Iterator<Item = f64> {
    let n = (2.0 * GRID_MAX / GRID_STEP) as i32;
    (0..=n).map(|i| -GRID_MAX + i as f64 * GRID_STEP)
}

fn clipped(segments: Vec<Segment>, window: &Window) -> Vec<Segment> {
    segments.iter().filter_map(|s| s.clip(window)).collect()
}

/// The orthogonal S' grid, identical in every spacetime panel.
pub fn reference_grid(window: &Window) -> Vec<Segment> {
    let e = LINE_EXTENT;
    let mut segments = Vec::new();
    for val in coord_values() {
        segments.push(Segment::new((-e, val), (e, val), LineFamily::TimeConst, false));
        segments.push(Segment::new((val, -e), (val, e), LineFamily::SpaceConst, false));
    }
    segments.push(Segment::new((-e, 0.0), (e, 0.0), LineFamily::TimeConst, true));
    segments.push(Segment::new((0.0, -e), (0.0, e), LineFamily::SpaceConst, true));
    clipped(segments, window)
}

/// The S grid drawn in S' coordinates for the given boost velocity.
///
/// Galilean: t=const stays horizontal, x=const follows x' = x − v·ct'.
/// Lorentz: t=const follows ct' = −v·x' + t/γ and x=const follows
/// x' = −v·ct' + x/γ, so both families tilt together as v grows.
pub fn moving_grid(boost: Boost, v: f64, window: &Window) -> Vec<Segment> {
    let e = LINE_EXTENT;
    let g = boost.gamma(v);
    let mut segments = Vec::new();

    for val in coord_values() {
        let time_const = match boost {
            Boost::Galilean => Segment::new((-e, val), (e, val), LineFamily::TimeConst, false),
            Boost::Lorentz => Segment::new(
                (-e, v * e + val / g),
                (e, -v * e + val / g),
                LineFamily::TimeConst,
                false,
            ),
        };
        let offset = match boost {
            Boost::Galilean => val,
            Boost::Lorentz => val / g,
        };
        let space_const = Segment::new(
            (offset + v * e, -e),
            (offset - v * e, e),
            LineFamily::SpaceConst,
            false,
        );
        segments.push(time_const);
        segments.push(space_const);
    }

    segments.push(Segment::new((v * e, -e), (-v * e, e), LineFamily::SpaceConst, true));
    let x_axis = match boost {
        Boost::Galilean => Segment::new((-e, 0.0), (e, 0.0), LineFamily::TimeConst, true),
        Boost::Lorentz => Segment::new((-e, v * e), (e, -v * e), LineFamily::TimeConst, true),
    };
    segments.push(x_axis);

    clipped(segments, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// d(ct)/dx, `None` for vertical segments.
    fn slope(s: &Segment) -> Option<f64> {
        let dx = s.to.0 - s.from.0;
        if dx.abs() < 1e-12 {
            None
        } else {
            Some((s.to.1 - s.from.1) / dx)
        }
    }

    fn axes(segments: &[Segment]) -> Vec<&Segment> {
        segments.iter().filter(|s| s.axis).collect()
    }

    #[test]
    fn coord_values_lie_inside_window() {
        let values: Vec<f64> = coord_values().collect();
        assert_eq!(values.len(), 9);
        assert_eq!(values[0], -8.0);
        assert_eq!(values[8], 8.0);
        assert!(values.iter().all(|&v| v > SPACETIME_LIMITS.0 && v < SPACETIME_LIMITS.1));
        assert!(LINE_EXTENT > SPACETIME_LIMITS.1);
    }

    #[test]
    fn clip_trims_to_window_edges() {
        let s = Segment::new((-15.0, 0.0), (15.0, 0.0), LineFamily::TimeConst, false);
        let c = s.clip(&Window::SPACETIME).unwrap();
        assert_abs_diff_eq!(c.from.0, -10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.to.0, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn clip_drops_segments_outside() {
        let s = Segment::new((11.0, -15.0), (11.0, 15.0), LineFamily::SpaceConst, false);
        assert!(s.clip(&Window::SPACETIME).is_none());
        let diagonal = Segment::new((12.0, -15.0), (30.0, 15.0), LineFamily::SpaceConst, false);
        assert!(diagonal.clip(&Window::SPACETIME).is_none());
    }

    #[test]
    fn clipped_diagonal_stays_on_its_line() {
        let s = Segment::new((-15.0, -15.0), (15.0, 15.0), LineFamily::SpaceConst, false);
        let c = s.clip(&Window::SPACETIME).unwrap();
        assert_abs_diff_eq!(c.from.0, -10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c.from.1, -10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(slope(&c).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn reference_grid_is_orthogonal() {
        let grid = reference_grid(&Window::SPACETIME);
        assert_eq!(grid.len(), 2 * 9 + 2);
        for s in &grid {
            match s.family {
                LineFamily::TimeConst => assert_eq!(slope(&s), Some(0.0)),
                LineFamily::SpaceConst => assert_eq!(slope(&s), None),
            }
        }
        assert_eq!(axes(&grid).len(), 2);
    }

    #[test]
    fn moving_grid_at_rest_matches_reference() {
        for boost in [Boost::Galilean, Boost::Lorentz] {
            let grid = moving_grid(boost, 0.0, &Window::SPACETIME);
            let reference = reference_grid(&Window::SPACETIME);
            assert_eq!(grid.len(), reference.len());
            for s in &grid {
                match s.family {
                    LineFamily::TimeConst => assert_abs_diff_eq!(slope(&s).unwrap(), 0.0, epsilon = 1e-12),
                    LineFamily::SpaceConst => assert!(slope(&s).is_none()),
                }
            }
        }
    }

    #[test]
    fn galilean_keeps_simultaneity_lines_horizontal() {
        let v = 0.5;
        let grid = moving_grid(Boost::Galilean, v, &Window::SPACETIME);
        for s in &grid {
            match s.family {
                LineFamily::TimeConst => assert_eq!(slope(&s), Some(0.0)),
                LineFamily::SpaceConst => {
                    assert_abs_diff_eq!(slope(&s).unwrap(), -1.0 / v, epsilon = 1e-9)
                }
            }
        }
    }

    #[test]
    fn lorentz_tilts_both_families() {
        let v = 0.6;
        let grid = moving_grid(Boost::Lorentz, v, &Window::SPACETIME);
        let mut saw_time = false;
        let mut saw_space = false;
        for s in &grid {
            match s.family {
                LineFamily::TimeConst => {
                    saw_time = true;
                    assert_abs_diff_eq!(slope(&s).unwrap(), -v, epsilon = 1e-9);
                }
                LineFamily::SpaceConst => {
                    saw_space = true;
                    assert_abs_diff_eq!(slope(&s).unwrap(), -1.0 / v, epsilon = 1e-9);
                }
            }
        }
        assert!(saw_time && saw_space);
    }

    #[test]
    fn lorentz_lines_contract_toward_origin() {
        let v = 0.8;
        let g = Boost::Lorentz.gamma(v);
        let grid = moving_grid(Boost::Lorentz, v, &Window::SPACETIME);
        // The ct'=0 crossing of the x=8 line sits at 8/γ.
        let line = grid
            .iter()
            .filter(|s| s.family == LineFamily::SpaceConst && !s.axis)
            .find(|s| {
                let t = -s.from.1 / (s.to.1 - s.from.1);
                let x = s.from.0 + t * (s.to.0 - s.from.0);
                (x - 8.0 / g).abs() < 1e-9
            });
        assert!(line.is_some());
    }

    #[test]
    fn every_moving_segment_is_visible() {
        for v in [0.0, 0.3, 0.9, 0.99] {
            for boost in [Boost::Galilean, Boost::Lorentz] {
                for s in moving_grid(boost, v, &Window::SPACETIME) {
                    assert!(Window::SPACETIME.contains(s.from));
                    assert!(Window::SPACETIME.contains(s.to));
                }
            }
        }
    }
}
