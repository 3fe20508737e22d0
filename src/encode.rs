//! Numbered PNG frames on disk and the system `ffmpeg` binary that turns
//! them into an MP4.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("video encoder `{0}` not found; install ffmpeg or pass --ffmpeg")]
    Missing(String),

    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("encoder exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("no frames to encode in {0}")]
    EmptySequence(PathBuf),
}

/// Directory of `frame_000000.png`, `frame_000001.png`, ... The directory is
/// removed when the sequence is dropped unless it was created with `keep`.
#[derive(Debug)]
pub struct FrameSequence {
    dir: PathBuf,
    written: usize,
    keep: bool,
}

impl FrameSequence {
    pub const PATTERN: &'static str = "frame_%06d.png";

    /// Starts an empty sequence, clearing frames left by an earlier run.
    pub fn create(dir: impl Into<PathBuf>, keep: bool) -> io::Result<Self> {
        let dir = dir.into();
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, written: 0, keep })
    }

    /// Path for the next frame; the caller is expected to write it.
    pub fn next_path(&mut self) -> PathBuf {
        let path = self.dir.join(format!("frame_{:06}.png", self.written));
        self.written += 1;
        path
    }

    pub fn len(&self) -> usize {
        self.written
    }

    pub fn is_empty(&self) -> bool {
        self.written == 0
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn input_pattern(&self) -> PathBuf {
        self.dir.join(Self::PATTERN)
    }
}

impl Drop for FrameSequence {
    fn drop(&mut self) {
        if self.keep {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.dir) {
            warn!("could not remove frame directory {}: {e}", self.dir.display());
        }
    }
}

/// H.264 MP4 encoder driven through `ffmpeg`.
#[derive(Debug, Clone)]
pub struct Mp4Encoder {
    program: PathBuf,
    fps: u32,
}

impl Mp4Encoder {
    pub fn new(program: impl Into<PathBuf>, fps: u32) -> Self {
        Self {
            program: program.into(),
            fps,
        }
    }

    fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    pub fn ensure_available(&self) -> Result<(), EncodeError> {
        if self.is_available() {
            Ok(())
        } else {
            Err(EncodeError::Missing(self.program_name()))
        }
    }

    pub fn args(&self, frames: &FrameSequence, out: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-y", "-loglevel", "error", "-framerate"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(self.fps.to_string().into());
        args.push("-i".into());
        args.push(frames.input_pattern().into_os_string());
        for a in ["-c:v", "libx264", "-pix_fmt", "yuv420p"] {
            args.push(a.into());
        }
        args.push(out.as_os_str().to_owned());
        args
    }

    /// Encodes the whole sequence in one blocking call.
    pub fn encode(&self, frames: &FrameSequence, out: &Path) -> Result<(), EncodeError> {
        if frames.is_empty() {
            return Err(EncodeError::EmptySequence(frames.dir().to_path_buf()));
        }
        debug!(frames = frames.len(), fps = self.fps, "encoding {}", out.display());
        let output = Command::new(&self.program)
            .args(self.args(frames, out))
            .stdin(Stdio::null())
            .output()
            .map_err(|source| EncodeError::Spawn {
                program: self.program_name(),
                source,
            })?;
        if !output.status.success() {
            return Err(EncodeError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("boostviz-{}-{name}", std::process::id()))
    }

    #[test]
    fn frame_paths_are_numbered() {
        let dir = scratch("numbered");
        let mut frames = FrameSequence::create(&dir, false).unwrap();
        assert!(frames.is_empty());
        assert_eq!(frames.next_path(), dir.join("frame_000000.png"));
        assert_eq!(frames.next_path(), dir.join("frame_000001.png"));
        assert_eq!(frames.len(), 2);
        assert_eq!(frames.input_pattern(), dir.join("frame_%06d.png"));
    }

    #[test]
    fn directory_removed_on_drop() {
        let dir = scratch("dropped");
        {
            let frames = FrameSequence::create(&dir, false).unwrap();
            fs::write(frames.dir().join("frame_000000.png"), b"x").unwrap();
            assert!(dir.exists());
        }
        assert!(!dir.exists());
    }

    #[test]
    fn kept_directory_survives_drop() {
        let dir = scratch("kept");
        {
            let _frames = FrameSequence::create(&dir, true).unwrap();
        }
        assert!(dir.exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn create_clears_stale_frames() {
        let dir = scratch("stale");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("frame_000099.png"), b"old").unwrap();
        let _frames = FrameSequence::create(&dir, false).unwrap();
        assert!(!dir.join("frame_000099.png").exists());
    }

    #[test]
    fn ffmpeg_arguments() {
        let dir = scratch("args");
        let frames = FrameSequence::create(&dir, false).unwrap();
        let out = PathBuf::from("out/galilean_animation.mp4");
        let args = Mp4Encoder::new("ffmpeg", 12).args(&frames, &out);
        let args: Vec<String> = args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        let rate = args.iter().position(|a| a == "-framerate").unwrap();
        assert_eq!(args[rate + 1], "12");
        assert!(args.contains(&"libx264".to_string()));
        assert!(args.contains(&"yuv420p".to_string()));
        assert_eq!(args.last().unwrap(), "out/galilean_animation.mp4");
    }

    #[test]
    fn missing_encoder_is_reported() {
        let encoder = Mp4Encoder::new("boostviz-no-such-encoder", 12);
        assert!(!encoder.is_available());
        assert!(matches!(encoder.ensure_available(), Err(EncodeError::Missing(_))));
    }

    #[test]
    fn empty_sequence_is_rejected() {
        let dir = scratch("empty");
        let frames = FrameSequence::create(&dir, false).unwrap();
        let err = Mp4Encoder::new("boostviz-no-such-encoder", 12)
            .encode(&frames, Path::new("never.mp4"))
            .unwrap_err();
        assert!(matches!(err, EncodeError::EmptySequence(_)));
    }

    #[test]
    fn spawn_failure_is_reported() {
        let dir = scratch("spawn");
        let mut frames = FrameSequence::create(&dir, false).unwrap();
        frames.next_path();
        let err = Mp4Encoder::new("boostviz-no-such-encoder", 12)
            .encode(&frames, Path::new("never.mp4"))
            .unwrap_err();
        assert!(matches!(err, EncodeError::Spawn { .. }));
    }
}
