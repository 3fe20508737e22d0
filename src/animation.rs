use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::encode::{FrameSequence, Mp4Encoder};
use crate::render;
use crate::scene::Scenario;

/// Renders every frame of `scenario` from scratch, then encodes the sequence
/// once. Any failed frame aborts the run.
pub fn render_animation(scenario: Scenario, config: &RenderConfig) -> Result<PathBuf> {
    let encoder = Mp4Encoder::new(&config.ffmpeg, config.fps);
    encoder.ensure_available()?;

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed to create {}", config.out_dir.display()))?;
    let frames_dir = config.frames_dir(scenario);
    let mut frames = FrameSequence::create(&frames_dir, config.keep_frames)
        .with_context(|| format!("failed to prepare {}", frames_dir.display()))?;

    let total = scenario.total_frames();
    let ramp = scenario.ramp();
    info!(
        scenario = scenario.name(),
        total,
        pause = ramp.pause,
        "rendering frames"
    );
    let every = config.progress_every.max(1);
    for frame in 0..total {
        let state = scenario.frame_state(frame);
        let path = frames.next_path();
        render::render_frame(scenario, &state, &path)
            .with_context(|| format!("{}: frame {frame} failed", scenario.name()))?;
        if frame % every == 0 {
            debug!(
                "Frame {}/{}  v={:.3}c  γ={:.3}  {}",
                frame,
                total,
                state.v,
                state.gamma,
                if ramp.in_pause(frame) { "pause" } else { "ramp" }
            );
        }
    }

    let out = config.output_path(scenario);
    info!("Saving {} ...", scenario.file_name());
    encoder
        .encode(&frames, &out)
        .with_context(|| format!("failed to encode {}", out.display()))?;
    info!("✅ {}", out.display());
    Ok(out)
}

pub fn render_all(scenarios: &[Scenario], config: &RenderConfig) -> Result<Vec<PathBuf>> {
    scenarios.iter().map(|&s| render_animation(s, config)).collect()
}
