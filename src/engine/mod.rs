//! # Morph Engine
//!
//! Capability-based dispatch to an optional external morphing implementation,
//! with an always-available cross-dissolve fallback.
//!
//! The adapter probes the installed capability once per process and exposes a
//! single normalized `blend(source, target, alpha)` call regardless of which
//! shape the engine exports. Every blend that the engine declines (or panics
//! on) is silently served by the fallback instead; that decision is made per
//! frame, never per pair.

pub mod adapter;
pub mod fallback;

// Re-exports for convenience
pub use adapter::{
    install_providers, EngineHandle, EngineMode, EngineProviders, MorphEngine,
};
pub use fallback::cross_dissolve;
