//! # Image Catalog
//!
//! Discovery of category image sets and enumeration of morph pairs.
//!
//! A category is a subdirectory of the image root; its images are listed in
//! filename-lexicographic order so that pair identifiers derived from
//! positional indices stay stable across runs.

pub mod pairing;
pub mod resolver;

// Re-exports for convenience
pub use pairing::{enumerate_pairs, Pair, PairingMode};
pub use resolver::{list_categories, list_images, sanitize_category_name};
