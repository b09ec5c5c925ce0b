//! Dataset module for leaf image data handling
//!
//! This module provides functionality for:
//! - Scanning the source tree for species and condition directories
//! - Deterministic split-size arithmetic and seeded shuffling
//! - The partition pass that copies images into the output tree
//!
//! ## Split strategy
//!
//! Every `{species}_{condition}` label group is partitioned independently
//! (stratified splitting), so each label keeps roughly the same class balance
//! across the three splits:
//! 1. **Train (70%)**: the bulk of the data, `floor(0.70 * n)` images
//! 2. **Validation (15%)**: `floor(0.15 * n)` images
//! 3. **Test (remainder)**: everything left, absorbing the rounding slack

pub mod prepare;
pub mod scan;
pub mod split;

// Re-export main types for convenience
pub use prepare::{prepare_dataset, LabelStat, PrepareStats};
pub use scan::{discover_species, list_images};
pub use split::{shuffled_indices, SplitConfig};

/// Condition subdirectory names, matched exactly (case-sensitive)
pub const CONDITIONS: [&str; 2] = ["HEALTHY", "DISEASED"];

/// Output split directory names
pub const SPLIT_NAMES: [&str; 3] = ["train", "validation", "test"];

/// Recognized image filename suffixes, matched case-insensitively
pub const IMAGE_EXTENSIONS: [&str; 3] = [".jpg", ".jpeg", ".png"];

/// Default shuffle seed for reproducible partitions
pub const DEFAULT_SEED: u64 = 42;
