//! # Morph-Batcher
//!
//! Batch-generate morph sequences between images grouped into on-disk
//! categories, with optional animated GIF previews.
//!
//! The batcher pairs up each category's images (sequentially or all-pairs),
//! renders an evenly spaced blend sequence per pair through a pluggable morph
//! engine (falling back to a linear cross-dissolve whenever the engine is
//! absent or declines a frame), and writes frames under a deterministic,
//! resumable directory layout.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use morph_batcher::{batch::BatchOrchestrator, config::Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let mut config = Config::default();
//! config.paths.image_root = "images/data".into();
//! config.batch.frames = 10;
//!
//! let orchestrator = BatchOrchestrator::new(config);
//! let report = orchestrator.run().await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`catalog`] - Category image discovery and pair enumeration
//! - [`engine`] - Morph capability adapter and cross-dissolve fallback
//! - [`sequence`] - Frame synthesis and preview assembly
//! - [`batch`] - Batch orchestration and reporting
//! - [`config`] - Configuration management
//!
//! ## Plugging in a morph engine
//!
//! An external morphing implementation is installed once per process through
//! [`engine::install_providers`] and bound by capability shape at discovery:
//!
//! ```rust,no_run
//! use image::RgbImage;
//! use morph_batcher::engine::{install_providers, EngineProviders, MorphEngine};
//!
//! struct LandmarkMorpher;
//!
//! impl MorphEngine for LandmarkMorpher {
//!     fn blend(&self, _source: &RgbImage, _target: &RgbImage, _alpha: f32) -> Option<RgbImage> {
//!         // Warping implementation lives outside this crate
//!         None
//!     }
//! }
//!
//! install_providers(EngineProviders {
//!     factory: Some(|| Ok(Box::new(LandmarkMorpher))),
//!     ..Default::default()
//! });
//! ```

pub mod batch;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod sequence;

// Re-export commonly used types for convenience
pub use crate::{
    batch::{BatchOrchestrator, BatchReport},
    catalog::PairingMode,
    config::Config,
    engine::EngineHandle,
    error::{MorphError, Result},
};
