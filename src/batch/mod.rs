//! # Batch Orchestration
//!
//! Drives the whole run: category discovery, pairing, per-pair frame
//! synthesis with fault isolation, optional preview assembly, and the final
//! summary report.

pub mod orchestrator;
pub mod report;

// Re-exports for convenience
pub use orchestrator::BatchOrchestrator;
pub use report::{BatchReport, CategoryReport};
