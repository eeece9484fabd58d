//! # Frame Sequences
//!
//! Renders the frame set for one morph pair and optionally bundles it into
//! an animated preview via the external encoder.

pub mod preview;
pub mod synthesizer;

// Re-exports for convenience
pub use preview::{PreviewAssembler, PreviewOutcome, PREVIEW_FILENAME};
pub use synthesizer::{frame_path, FrameSynthesizer, PairOutcome};
