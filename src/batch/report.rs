use std::fmt;

/// Per-category tallies of the run
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub name: String,
    pub image_count: usize,
    pub pairs_attempted: usize,
    pub pairs_produced: usize,
    pub pairs_failed: usize,
    pub pairs_skipped_complete: usize,
    pub previews_produced: usize,
}

impl CategoryReport {
    pub fn new(name: &str, image_count: usize) -> Self {
        Self {
            name: name.to_string(),
            image_count,
            pairs_attempted: 0,
            pairs_produced: 0,
            pairs_failed: 0,
            pairs_skipped_complete: 0,
            previews_produced: 0,
        }
    }

    /// A category skipped for holding fewer than 2 images
    pub fn skipped(name: &str, image_count: usize) -> Self {
        Self::new(name, image_count)
    }
}

/// Aggregated result of a batch run
///
/// Accumulated only by the orchestrator and never persisted beyond the run's
/// console output.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub categories: Vec<CategoryReport>,
}

impl BatchReport {
    pub fn push(&mut self, category: CategoryReport) {
        self.categories.push(category);
    }

    pub fn total_attempted(&self) -> usize {
        self.categories.iter().map(|c| c.pairs_attempted).sum()
    }

    pub fn total_produced(&self) -> usize {
        self.categories.iter().map(|c| c.pairs_produced).sum()
    }

    pub fn total_failed(&self) -> usize {
        self.categories.iter().map(|c| c.pairs_failed).sum()
    }

    pub fn total_previews(&self) -> usize {
        self.categories.iter().map(|c| c.previews_produced).sum()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(70))?;
        for category in &self.categories {
            writeln!(
                f,
                "{}: {} image(s), {} pair(s) produced / {} attempted, {} failed",
                category.name,
                category.image_count,
                category.pairs_produced,
                category.pairs_attempted,
                category.pairs_failed,
            )?;
        }
        writeln!(
            f,
            "Total: {} morph(s) produced / {} attempted, {} failed",
            self.total_produced(),
            self.total_attempted(),
            self.total_failed(),
        )?;
        write!(f, "{}", "=".repeat(70))
    }
}
