/// Velocity for this frame: 0 during the pause, then a linear ramp to `v_max`
/// over `n_ramp` frames. Frames past the ramp hold `v_max`.
pub fn ramp_v(frame: usize, pause: usize, n_ramp: usize, v_max: f64) -> f64 {
    if n_ramp == 0 {
        return if frame < pause { 0.0 } else { v_max };
    }
    let ramped = frame.saturating_sub(pause).min(n_ramp);
    v_max * (ramped as f64 / n_ramp as f64)
}

/// Pause window followed by a ramp window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    pub pause: usize,
    pub ramp_frames: usize,
    pub v_max: f64,
}

impl Ramp {
    /// ~3 s pause at 12 fps, then 401 ramp frames.
    pub const DEFAULT: Ramp = Ramp {
        pause: 36,
        ramp_frames: 401,
        v_max: 0.99,
    };

    /// Three times slower so relativistic effects develop gradually.
    pub const SLOW: Ramp = Ramp {
        pause: 108,
        ramp_frames: 1203,
        v_max: 0.99,
    };

    pub fn total_frames(&self) -> usize {
        self.pause + self.ramp_frames
    }

    /// The last frame of the ramp window lands exactly on `v_max`.
    pub fn velocity(&self, frame: usize) -> f64 {
        ramp_v(frame, self.pause, self.ramp_frames.saturating_sub(1), self.v_max)
    }

    pub fn in_pause(&self, frame: usize) -> bool {
        frame < self.pause
    }
}
