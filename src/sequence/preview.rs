use std::path::Path;
use std::process::Stdio;
use std::sync::OnceLock;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

/// Name of the animated preview written next to a pair's frames
pub const PREVIEW_FILENAME: &str = "morph.gif";

/// Result of a preview assembly attempt
///
/// A preview that was not produced is a recorded condition, never an error:
/// the pair's frame sequence stands on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    Produced,
    NotProduced { reason: String },
}

impl PreviewOutcome {
    pub fn produced(&self) -> bool {
        matches!(self, Self::Produced)
    }

    fn not_produced<S: Into<String>>(reason: S) -> Self {
        Self::NotProduced {
            reason: reason.into(),
        }
    }
}

static ENCODER_AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Bundles a pair's frame directory into a single GIF via the external
/// encoder, invoked as a scoped subprocess with a bounded wait
pub struct PreviewAssembler {
    fps: u32,
    timeout: Duration,
    encoder_available: bool,
}

impl PreviewAssembler {
    pub fn new(fps: u32, timeout: Duration) -> Self {
        Self {
            fps: fps.max(1),
            timeout,
            // The probe result cannot change mid-run; spawn it at most once
            // per process, not once per pair
            encoder_available: *ENCODER_AVAILABLE.get_or_init(Self::check_encoder_available),
        }
    }

    /// Probe for the external encoder on this host
    pub fn check_encoder_available() -> bool {
        std::process::Command::new("ffmpeg")
            .arg("-version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Assemble `<frames_dir>/morph.gif` from the frame sequence in
    /// `frames_dir`
    pub async fn assemble(&self, frames_dir: &Path) -> PreviewOutcome {
        if !self.encoder_available {
            return PreviewOutcome::not_produced("ffmpeg not found on this host");
        }

        if !frames_dir.join("frame_000.jpg").is_file() {
            return PreviewOutcome::not_produced("no frames to assemble");
        }

        let output_path = frames_dir.join(PREVIEW_FILENAME);
        debug!("Assembling preview: {:?} at {} fps", output_path, self.fps);

        let mut child = match Command::new("ffmpeg")
            .arg("-y")
            .arg("-v")
            .arg("error")
            .arg("-framerate")
            .arg(self.fps.to_string())
            .arg("-i")
            .arg(frames_dir.join("frame_%03d.jpg"))
            .arg(&output_path)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) => {
                return PreviewOutcome::not_produced(format!("failed to spawn encoder: {e}"))
            }
        };

        match tokio::time::timeout(self.timeout, child.wait()).await {
            Ok(Ok(status)) if status.success() => PreviewOutcome::Produced,
            Ok(Ok(status)) => {
                PreviewOutcome::not_produced(format!("encoder exited with {status}"))
            }
            Ok(Err(e)) => PreviewOutcome::not_produced(format!("encoder wait failed: {e}")),
            Err(_) => {
                let _ = child.kill().await;
                PreviewOutcome::not_produced(format!(
                    "encoder timed out after {}s",
                    self.timeout.as_secs()
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_empty_frame_directory_is_not_produced() {
        let dir = tempdir().unwrap();

        let assembler = PreviewAssembler::new(12, Duration::from_secs(5));
        let outcome = assembler.assemble(dir.path()).await;

        assert!(!outcome.produced());
    }

    #[tokio::test]
    async fn test_missing_encoder_short_circuits_without_spawning() {
        let dir = tempdir().unwrap();

        let assembler = PreviewAssembler {
            fps: 12,
            timeout: Duration::from_secs(5),
            encoder_available: false,
        };
        let outcome = assembler.assemble(dir.path()).await;

        assert_eq!(
            outcome,
            PreviewOutcome::NotProduced {
                reason: "ffmpeg not found on this host".to_string()
            }
        );
    }

    #[test]
    fn test_outcome_predicate() {
        assert!(PreviewOutcome::Produced.produced());
        assert!(!PreviewOutcome::not_produced("anything").produced());
    }
}
