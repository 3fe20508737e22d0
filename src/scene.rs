//! The three fixed animations and everything each frame needs, derived
//! from the frame index alone.

use crate::relativity::grid::Window;
use crate::relativity::special::{Boost, EVENT_A, EVENT_B, Event};
use crate::timeline::Ramp;

/// Below this speed the velocity arrow and moving-origin label are hidden.
pub const ARROW_THRESHOLD: f64 = 0.05;

pub const SPATIAL_WINDOW: Window = Window {
    x: (-3.5, 3.5),
    y: (-2.5, 2.5),
};

pub const GALILEAN_SPATIAL_WINDOW: Window = Window {
    x: (-3.0, 3.0),
    y: (-2.5, 2.5),
};

/// Keeps tick marks and labels off the panel border.
const EDGE_INSET: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    GalileanSingle,
    GalileanTwoPanel,
    LorentzThreePanel,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::GalileanSingle,
        Scenario::GalileanTwoPanel,
        Scenario::LorentzThreePanel,
    ];

    pub fn boost(self) -> Boost {
        match self {
            Scenario::GalileanSingle | Scenario::GalileanTwoPanel => Boost::Galilean,
            Scenario::LorentzThreePanel => Boost::Lorentz,
        }
    }

    pub fn ramp(self) -> Ramp {
        match self {
            Scenario::GalileanSingle | Scenario::GalileanTwoPanel => Ramp::DEFAULT,
            Scenario::LorentzThreePanel => Ramp::SLOW,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            Scenario::GalileanSingle => "galilean_animation.mp4",
            Scenario::GalileanTwoPanel => "galilean_twopanel_animation.mp4",
            Scenario::LorentzThreePanel => "lorentz_twopanel_animation.mp4",
        }
    }

    /// Canvas size in pixels.
    pub fn canvas(self) -> (u32, u32) {
        match self {
            Scenario::GalileanSingle => (900, 900),
            Scenario::GalileanTwoPanel => (1800, 900),
            Scenario::LorentzThreePanel => (1600, 1000),
        }
    }

    pub fn spacetime_title(self) -> &'static str {
        match self {
            Scenario::GalileanSingle => "Galilean Transformation of Coordinates",
            _ => "Spacetime Diagram (S' Frame)",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scenario::GalileanSingle => "galilean_single",
            Scenario::GalileanTwoPanel => "galilean_twopanel",
            Scenario::LorentzThreePanel => "lorentz_threepanel",
        }
    }

    pub fn total_frames(self) -> usize {
        self.ramp().total_frames()
    }

    pub fn frame_state(self, frame: usize) -> FrameState {
        FrameState::at(self, frame)
    }
}

/// Everything a single frame draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub frame: usize,
    pub boost: Boost,
    pub v: f64,
    pub gamma: f64,
    pub a_prime: Event,
    pub b_prime: Event,
}

impl FrameState {
    pub fn at(scenario: Scenario, frame: usize) -> Self {
        let boost = scenario.boost();
        let v = scenario.ramp().velocity(frame);
        Self {
            frame,
            boost,
            v,
            gamma: boost.gamma(v),
            a_prime: boost.apply(EVENT_A, v),
            b_prime: boost.apply(EVENT_B, v),
        }
    }

    /// Galilean two-panel snapshot. Time is absolute there, so one moment
    /// (ct = 1, when event B happens) describes both events. That does not
    /// carry over to the Lorentz case, which needs one snapshot per event.
    pub fn galilean_snapshot(&self) -> SpatialSnapshot {
        SpatialSnapshot {
            v: self.v,
            gamma: 1.0,
            origin: -self.v,
            ct_prime: 1.0,
            window: GALILEAN_SPATIAL_WINDOW,
        }
    }

    /// Physical space at the moment ct' of `event`, with the S origin at x' = −v·ct'.
    pub fn lorentz_snapshot(&self, event: Event) -> SpatialSnapshot {
        SpatialSnapshot {
            v: self.v,
            gamma: self.gamma,
            origin: -self.v * event.ct,
            ct_prime: event.ct,
            window: SPATIAL_WINDOW,
        }
    }

    /// x' − x distance between the S origin and event A in its snapshot,
    /// shown as the contracted unit length when it fits inside the panel.
    pub fn contraction_bracket(&self) -> Option<(f64, f64)> {
        if self.v <= ARROW_THRESHOLD {
            return None;
        }
        let snap = self.lorentz_snapshot(self.a_prime);
        let (lo, hi) = snap.window.x;
        let inside = |x: f64| lo + EDGE_INSET < x && x < hi - EDGE_INSET;
        let (from, to) = (snap.origin, self.a_prime.x);
        (inside(from) && inside(to) && (to - from).abs() > 0.1).then_some((from, to))
    }

    pub fn shows_time_dilation(&self) -> bool {
        self.v > ARROW_THRESHOLD
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VelocityArrow {
    /// Spans O' to O, showing the Galilean displacement.
    Displacement { to: f64 },
    /// Fixed-length leftward indicator for the Lorentz panels.
    Direction,
}

/// One physical-space panel: the rest axis through O' and the moving axis
/// through the drifting S origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialSnapshot {
    pub v: f64,
    pub gamma: f64,
    /// x' of the S origin at this moment.
    pub origin: f64,
    pub ct_prime: f64,
    pub window: Window,
}

impl SpatialSnapshot {
    fn inside(&self, pos: f64, inset: f64) -> bool {
        self.window.x.0 + inset < pos && pos < self.window.x.1 - inset
    }

    /// Integer ticks of the rest frame, skipping the origin.
    pub fn rest_ticks(&self) -> Vec<f64> {
        let lo = self.window.x.0.ceil() as i32;
        let hi = self.window.x.1.floor() as i32;
        (lo..=hi)
            .filter(|&t| t != 0)
            .map(f64::from)
            .filter(|&t| self.inside(t, EDGE_INSET))
            .collect()
    }

    /// Ticks of the moving ruler at origin + n/γ, labelled by n.
    pub fn moving_ticks(&self) -> Vec<(i32, f64)> {
        let spacing = 1.0 / self.gamma;
        (-8..=8)
            .map(|n| (n, self.origin + f64::from(n) * spacing))
            .filter(|&(_, pos)| self.inside(pos, EDGE_INSET))
            .collect()
    }

    /// Integer positions of the faint background grid.
    pub fn background_lines(&self) -> std::ops::RangeInclusive<i32> {
        self.window.x.0 as i32..=self.window.x.1 as i32
    }

    pub fn origin_visible(&self) -> bool {
        self.inside(self.origin, 0.0)
    }

    pub fn origin_label_visible(&self) -> bool {
        self.v > ARROW_THRESHOLD && self.inside(self.origin, 0.3) && self.origin.abs() > 0.3
    }

    pub fn y_label_visible(&self) -> bool {
        self.inside(self.origin, 0.5)
    }

    pub fn contains_x(&self, x: f64) -> bool {
        self.inside(x, 0.0)
    }

    pub fn velocity_arrow(&self) -> Option<VelocityArrow> {
        if self.v <= ARROW_THRESHOLD {
            None
        } else if self.gamma <= 1.001 {
            Some(VelocityArrow::Displacement { to: self.origin })
        } else {
            Some(VelocityArrow::Direction)
        }
    }

    pub fn title(&self, event_name: &str) -> String {
        format!("Event {event_name}:  snapshot at ct' = {:.2}", self.ct_prime)
    }
}
