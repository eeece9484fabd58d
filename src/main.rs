use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::{info, Level};

use morph_batcher::{batch::BatchOrchestrator, catalog::PairingMode, config::Config};

#[derive(Parser)]
#[command(
    name = "morph-batcher",
    version,
    about = "Batch-generate morph sequences between categorised images",
    long_about = "Morph-batcher pairs up the images inside each category directory and renders \
an evenly spaced morph sequence per pair, with optional animated GIF previews. Categories are \
never mixed with one another."
)]
struct Cli {
    /// Pairing strategy within each category [default: sequential]
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Number of morph steps per pair; renders frames + 1 images [default: 10]
    #[arg(long)]
    frames: Option<u32>,

    /// Assemble an animated GIF in each pair directory
    #[arg(long)]
    gif: bool,

    /// Comma-separated category names (e.g. "white men,white women"); empty = all
    #[arg(long, default_value = "")]
    categories: String,

    /// Root directory holding one subdirectory of images per category
    #[arg(short, long)]
    images: Option<PathBuf>,

    /// Root directory for rendered results
    #[arg(short, long)]
    results: Option<PathBuf>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Sequential,
    AllPairs,
}

impl From<Mode> for PairingMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Sequential => PairingMode::Sequential,
            Mode::AllPairs => PairingMode::AllPairs,
        }
    }
}

/// Apply CLI flags on top of the loaded configuration
///
/// Only flags the user actually supplied override file values; absent flags
/// leave the file's settings in place.
fn apply_overrides(config: &mut Config, cli: Cli) {
    if let Some(mode) = cli.mode {
        config.batch.mode = mode.into();
    }
    if let Some(frames) = cli.frames {
        config.batch.frames = frames;
    }
    if cli.gif {
        config.batch.preview = true;
    }
    if !cli.categories.trim().is_empty() {
        config.batch.categories = cli
            .categories
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
    }
    if let Some(images) = cli.images {
        config.paths.image_root = images;
    }
    if let Some(results) = cli.results {
        config.paths.results_root = results;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting morph-batcher v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match cli.config.take() {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => Config::default(),
    };

    apply_overrides(&mut config, cli);

    config.validate()?;

    info!("Images: {:?}", config.paths.image_root);
    info!("Results: {:?}", config.paths.results_root);

    let preview_enabled = config.batch.preview;
    let orchestrator = BatchOrchestrator::new(config);
    let report = orchestrator.run().await?;

    println!("{report}");
    if preview_enabled {
        info!("Previews produced: {}", report.total_previews());
    }
    Ok(())
}
