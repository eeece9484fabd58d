use std::fs;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::{
    batch::report::{BatchReport, CategoryReport},
    catalog::{self, enumerate_pairs},
    config::Config,
    engine::EngineHandle,
    error::{ConfigError, Result},
    sequence::{FrameSynthesizer, PairOutcome, PreviewAssembler, PreviewOutcome, PREVIEW_FILENAME},
};

/// Drives the whole batch: categories × pairing strategy × frame synthesis
///
/// Execution is strictly sequential: one category at a time, one pair at a
/// time, one frame at a time. The engine handle is discovered once and shared
/// read-only across every pair; a pair failure is tallied and logged, never
/// fatal. The only fatal conditions are a missing image root and an empty
/// resolved category list.
pub struct BatchOrchestrator {
    config: Config,
    engine: EngineHandle,
}

impl BatchOrchestrator {
    /// Create an orchestrator, discovering the morph capability for this
    /// process
    pub fn new(config: Config) -> Self {
        Self {
            config,
            engine: EngineHandle::discover(),
        }
    }

    /// Create an orchestrator with an explicitly bound engine handle
    pub fn with_engine(config: Config, engine: EngineHandle) -> Self {
        Self { config, engine }
    }

    /// Run the batch over every requested category
    pub async fn run(&self) -> Result<BatchReport> {
        let image_root = &self.config.paths.image_root;
        if !image_root.is_dir() {
            return Err(ConfigError::ImageRootMissing {
                path: image_root.display().to_string(),
            }
            .into());
        }

        let categories = if self.config.batch.categories.is_empty() {
            catalog::list_categories(image_root)
        } else {
            self.config.batch.categories.clone()
        };
        if categories.is_empty() {
            return Err(ConfigError::NoCategories.into());
        }

        fs::create_dir_all(&self.config.paths.results_root)?;

        info!("Morphing by category (mode: {})", self.config.batch.mode);
        info!("Frames per morph: {}", self.config.batch.frames);
        info!(
            "Preview: {}",
            if self.config.batch.preview { "on" } else { "off" }
        );
        debug!("Engine capability: {}", self.engine.mode());

        let synthesizer = FrameSynthesizer::new(&self.engine, self.config.batch.frames);
        let assembler = self.config.batch.preview.then(|| {
            PreviewAssembler::new(
                self.config.preview.fps,
                Duration::from_secs(self.config.preview.timeout_secs),
            )
        });

        let mut report = BatchReport::default();
        for category in &categories {
            let outcome = self
                .run_category(category, &synthesizer, assembler.as_ref())
                .await;
            report.push(outcome);
        }

        info!(
            "Done: {} morph(s) produced, {} failed",
            report.total_produced(),
            report.total_failed()
        );
        Ok(report)
    }

    /// Process one category: list, pair, then synthesize each pair in order
    async fn run_category(
        &self,
        category: &str,
        synthesizer: &FrameSynthesizer<'_>,
        assembler: Option<&PreviewAssembler>,
    ) -> CategoryReport {
        let category_dir = self.config.paths.image_root.join(category);
        let images = catalog::list_images(&category_dir);

        info!("📁 {}: {} image(s)", category, images.len());

        if images.len() < 2 {
            info!("[SKIP] '{}': fewer than 2 images found", category);
            return CategoryReport::skipped(category, images.len());
        }

        let pairs = enumerate_pairs(&images, self.config.batch.mode);
        let category_results = self
            .config
            .paths
            .results_root
            .join(catalog::sanitize_category_name(category));

        let mut report = CategoryReport::new(category, images.len());
        for pair in &pairs {
            report.pairs_attempted += 1;
            let pair_dir = category_results.join(pair.identifier());

            match synthesizer.render_pair(pair, &pair_dir) {
                Ok(outcome) => {
                    report.pairs_produced += 1;
                    match outcome {
                        PairOutcome::Rendered { .. } => info!("  [OK] {}", pair.label()),
                        PairOutcome::SkippedComplete { .. } => {
                            report.pairs_skipped_complete += 1;
                            debug!("  [SKIP] {} already complete", pair.label());
                        }
                    }

                    if let Some(assembler) = assembler {
                        // A resumed pair may still be missing its preview
                        if pair_dir.join(PREVIEW_FILENAME).is_file() {
                            report.previews_produced += 1;
                        } else {
                            match assembler.assemble(&pair_dir).await {
                                PreviewOutcome::Produced => report.previews_produced += 1,
                                PreviewOutcome::NotProduced { reason } => warn!(
                                    "  [WARN] preview not produced for {}: {}",
                                    pair.identifier(),
                                    reason
                                ),
                            }
                        }
                    }
                }
                Err(e) => {
                    report.pairs_failed += 1;
                    warn!("  [ERR] {} ({}): {}", pair.label(), pair.identifier(), e);
                }
            }
        }

        info!("   -> {} morph(s) created", report.pairs_produced);
        report
    }
}
