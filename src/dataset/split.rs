//! Split arithmetic and deterministic shuffling
//!
//! The partition is stratified: each label group is shuffled and sliced
//! independently. Every shuffle uses a fresh ChaCha8 generator seeded with
//! the same constant, which matches the reference data-preparation pipeline
//! and makes the assignment reproducible for a fixed listing order. Groups of
//! equal size therefore receive the same permutation pattern; determinism is
//! the priority over cross-group independence.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::DEFAULT_SEED;
use crate::utils::error::{Error, Result};

/// Configuration for dataset splitting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Fraction of each label group assigned to the train split
    pub train_fraction: f64,
    /// Fraction of each label group assigned to the validation split
    pub validation_fraction: f64,
    /// Random seed for reproducibility
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_fraction: 0.70,
            validation_fraction: 0.15,
            seed: DEFAULT_SEED,
        }
    }
}

impl SplitConfig {
    /// Create a new split configuration with custom fractions
    pub fn new(train_fraction: f64, validation_fraction: f64, seed: u64) -> Result<Self> {
        if !(0.0..=1.0).contains(&train_fraction) {
            return Err(Error::Config(
                "Train fraction must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&validation_fraction) {
            return Err(Error::Config(
                "Validation fraction must be between 0.0 and 1.0".to_string(),
            ));
        }
        if train_fraction + validation_fraction >= 1.0 {
            return Err(Error::Config(
                "Train + validation fractions must be less than 1.0".to_string(),
            ));
        }

        Ok(Self {
            train_fraction,
            validation_fraction,
            seed,
        })
    }

    /// Default fractions with a custom seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Compute `(train, validation, test)` sizes for a label group.
    ///
    /// Train and validation round down; the test split takes the remainder,
    /// so the three sizes always sum to `total`.
    pub fn split_sizes(&self, total: usize) -> (usize, usize, usize) {
        let train = (total as f64 * self.train_fraction) as usize;
        let validation = (total as f64 * self.validation_fraction) as usize;
        let test = total - train - validation;
        (train, validation, test)
    }
}

/// Produce a seeded permutation of `0..len`.
///
/// The generator is local to this call; two calls with the same seed and
/// length return the same permutation.
pub fn shuffled_indices(seed: u64, len: usize) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..len).collect();
    indices.shuffle(&mut rng);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SplitConfig::default();
        assert_eq!(config.train_fraction, 0.70);
        assert_eq!(config.validation_fraction, 0.15);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_split_sizes_examples() {
        let config = SplitConfig::default();
        assert_eq!(config.split_sizes(0), (0, 0, 0));
        assert_eq!(config.split_sizes(1), (0, 0, 1));
        assert_eq!(config.split_sizes(10), (7, 1, 2));
        assert_eq!(config.split_sizes(100), (70, 15, 15));
    }

    #[test]
    fn test_split_sizes_sum_to_total() {
        let config = SplitConfig::default();
        for n in 0..500 {
            let (train, validation, test) = config.split_sizes(n);
            assert_eq!(train + validation + test, n);
        }
    }

    #[test]
    fn test_test_split_absorbs_slack() {
        let config = SplitConfig::default();
        for n in 1..500 {
            let (train, validation, test) = config.split_sizes(n);
            assert_eq!(train, (n as f64 * 0.70) as usize);
            assert_eq!(validation, (n as f64 * 0.15) as usize);
            // test takes the rounding slack, so it never undershoots validation
            assert!(test >= validation);
        }
    }

    #[test]
    fn test_config_rejects_bad_fractions() {
        assert!(SplitConfig::new(0.9, 0.2, 42).is_err());
        assert!(SplitConfig::new(-0.1, 0.15, 42).is_err());
        assert!(SplitConfig::new(0.7, 1.5, 42).is_err());
        assert!(SplitConfig::new(0.7, 0.15, 42).is_ok());
    }

    #[test]
    fn test_shuffled_indices_is_permutation() {
        let indices = shuffled_indices(42, 100);
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffled_indices_deterministic() {
        assert_eq!(shuffled_indices(42, 50), shuffled_indices(42, 50));
        assert_ne!(shuffled_indices(42, 50), shuffled_indices(43, 50));
    }

    #[test]
    fn test_shuffled_indices_empty() {
        assert!(shuffled_indices(42, 0).is_empty());
    }
}
