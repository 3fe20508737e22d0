use std::path::PathBuf;

use crate::scene::Scenario;

pub const DEFAULT_FPS: u32 = 12;

/// Everything a render run needs that is not derived from the frame index.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub out_dir: PathBuf,
    pub fps: u32,
    /// Leave the numbered PNG frames on disk after encoding.
    pub keep_frames: bool,
    pub ffmpeg: PathBuf,
    /// Log a progress line every this many frames.
    pub progress_every: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("output"),
            fps: DEFAULT_FPS,
            keep_frames: false,
            ffmpeg: PathBuf::from("ffmpeg"),
            progress_every: 120,
        }
    }
}

impl RenderConfig {
    pub fn output_path(&self, scenario: Scenario) -> PathBuf {
        self.out_dir.join(scenario.file_name())
    }

    pub fn frames_dir(&self, scenario: Scenario) -> PathBuf {
        self.out_dir.join(format!("{}_frames", scenario.name()))
    }
}
