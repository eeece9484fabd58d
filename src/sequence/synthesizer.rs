use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    catalog::Pair,
    engine::{cross_dissolve, EngineHandle},
    error::{PairError, Result},
    frame::Frame,
};

/// Deterministic frame file path: `<dir>/frame_<index:03>.jpg`
pub fn frame_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("frame_{index:03}.jpg"))
}

/// How one pair's frame set was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// All frames were rendered and written on this run
    Rendered { frames_written: usize },
    /// The pair directory already held a complete frame set for the
    /// requested frame count
    SkippedComplete { frames_present: usize },
}

/// Renders the frame set for one pair
///
/// For a frame count F, produces F+1 images at alpha = k/F, k in 0..=F. Each
/// alpha tries the engine first and silently falls back to the cross-dissolve
/// when the engine declines or misbehaves; that choice is made per frame.
/// Only an unreadable source/target image or an unwritable output directory
/// fails the pair.
pub struct FrameSynthesizer<'a> {
    engine: &'a EngineHandle,
    frame_count: u32,
}

impl<'a> FrameSynthesizer<'a> {
    pub fn new(engine: &'a EngineHandle, frame_count: u32) -> Self {
        Self {
            engine,
            frame_count: frame_count.max(1),
        }
    }

    /// Total images a successful pair directory holds
    pub fn frames_per_pair(&self) -> usize {
        self.frame_count as usize + 1
    }

    /// Render (or skip) the frame set for `pair` under `out_dir`
    pub fn render_pair(&self, pair: &Pair, out_dir: &Path) -> Result<PairOutcome> {
        if self.is_complete(out_dir) {
            debug!("{} already complete, skipping", pair.identifier());
            return Ok(PairOutcome::SkippedComplete {
                frames_present: self.frames_per_pair(),
            });
        }

        fs::create_dir_all(out_dir).map_err(|_| PairError::OutputDirFailed {
            path: out_dir.display().to_string(),
        })?;
        self.clear_stale_frames(out_dir);

        let source = Frame::load(&pair.source)?;
        let target = Frame::load(&pair.target)?;

        for k in 0..=self.frame_count {
            let alpha = k as f32 / self.frame_count as f32;
            let frame = self.blend_at(&source, &target, alpha);
            frame.save_jpeg(frame_path(out_dir, k))?;
        }

        Ok(PairOutcome::Rendered {
            frames_written: self.frames_per_pair(),
        })
    }

    fn blend_at(&self, source: &Frame, target: &Frame, alpha: f32) -> Frame {
        match self.engine.blend(source.as_image(), target.as_image(), alpha) {
            Some(blended) => Frame::new(blended),
            None => cross_dissolve(source, target, alpha),
        }
    }

    /// A pair directory counts as complete only when it holds exactly the
    /// frame files the current frame count calls for. A run at frames=5 never
    /// satisfies a later request for frames=10.
    fn is_complete(&self, out_dir: &Path) -> bool {
        if !out_dir.is_dir() {
            return false;
        }
        if existing_frames(out_dir).len() != self.frames_per_pair() {
            return false;
        }
        (0..=self.frame_count).all(|k| frame_path(out_dir, k).is_file())
    }

    /// Remove leftover frames from an interrupted or differently-sized run so
    /// the directory only ever holds the current frame set.
    fn clear_stale_frames(&self, out_dir: &Path) {
        for stale in existing_frames(out_dir) {
            let _ = fs::remove_file(stale);
        }
    }
}

fn existing_frames(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| name.starts_with("frame_") && name.ends_with(".jpg"))
                    .unwrap_or(false)
        })
        .collect()
}
