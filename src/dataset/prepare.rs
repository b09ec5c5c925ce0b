//! Dataset partition pass
//!
//! Walks the source tree, shuffles each `{species}_{condition}` label group
//! with the configured seed, slices it into train/validation/test, and copies
//! the files into the mirrored output tree. Counts are accumulated during the
//! same pass and written to a JSON manifest in the output directory.

use std::fs;
use std::path::Path;

use filetime::FileTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::scan::{discover_species, list_images};
use super::split::{shuffled_indices, SplitConfig};
use super::{CONDITIONS, SPLIT_NAMES};
use crate::utils::error::{Error, Result};

/// Filename of the manifest written into the output directory
pub const MANIFEST_NAME: &str = "split_manifest.json";

/// Per-label image counts accumulated during the partition pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelStat {
    pub species: String,
    pub condition: String,
    pub total: usize,
    pub train: usize,
    pub validation: usize,
    pub test: usize,
}

impl LabelStat {
    /// Composite label used as the output directory name
    pub fn label(&self) -> String {
        format!("{}_{}", self.species, self.condition)
    }
}

/// Summary of one partition run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareStats {
    /// Number of species directories discovered, including ones that
    /// contributed no images
    pub species_processed: usize,
    /// Total images copied across all labels
    pub total_images: usize,
    /// One entry per discovered condition group, in processing order
    pub labels: Vec<LabelStat>,
    /// Configuration used for this run
    pub config: SplitConfig,
}

impl std::fmt::Display for PrepareStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Dataset prepared successfully!")?;
        writeln!(f, "Plant species processed: {}", self.species_processed)?;
        for label in &self.labels {
            writeln!(
                f,
                "{} {}: {} images",
                label.species, label.condition, label.total
            )?;
        }
        Ok(())
    }
}

/// Partition a source dataset into stratified train/validation/test splits.
///
/// For each species directory and each of the fixed conditions (`HEALTHY`,
/// `DISEASED`), the image files are shuffled deterministically, sliced by the
/// configured fractions, and copied into
/// `{output}/{split}/{species}_{condition}/`. Missing condition directories
/// are skipped silently. The source tree is never modified.
///
/// Fails if the source directory does not exist or a copy fails; work already
/// done is not rolled back.
pub fn prepare_dataset(source: &Path, output: &Path, config: &SplitConfig) -> Result<PrepareStats> {
    let species_names = discover_species(source)?;
    info!(
        "Preparing dataset: {} species, {} -> {}",
        species_names.len(),
        source.display(),
        output.display()
    );

    for split in SPLIT_NAMES {
        fs::create_dir_all(output.join(split))?;
    }

    let mut labels = Vec::new();
    let mut total_images = 0;

    for species in &species_names {
        let species_dir = source.join(species);

        for condition in CONDITIONS {
            let condition_dir = species_dir.join(condition);
            if !condition_dir.is_dir() {
                continue;
            }

            let images = list_images(&condition_dir)?;
            let total = images.len();

            // Fresh generator per group, same seed every time: equal-sized
            // groups share a permutation pattern, and the whole run is
            // reproducible for a fixed listing order.
            let order = shuffled_indices(config.seed, total);
            let (n_train, n_val, n_test) = config.split_sizes(total);

            let label = format!("{}_{}", species, condition);
            let ranges = [
                0..n_train,
                n_train..n_train + n_val,
                n_train + n_val..total,
            ];

            for (split_name, range) in SPLIT_NAMES.iter().zip(ranges) {
                let split_dir = output.join(split_name).join(&label);
                fs::create_dir_all(&split_dir)?;

                for &image_idx in &order[range] {
                    let src = &images[image_idx];
                    if let Some(file_name) = src.file_name() {
                        copy_preserving_times(src, &split_dir.join(file_name))?;
                    }
                }
            }

            debug!(
                "{}: {} images -> train {}, validation {}, test {}",
                label, total, n_train, n_val, n_test
            );

            total_images += total;
            labels.push(LabelStat {
                species: species.clone(),
                condition: condition.to_string(),
                total,
                train: n_train,
                validation: n_val,
                test: n_test,
            });
        }
    }

    let stats = PrepareStats {
        species_processed: species_names.len(),
        total_images,
        labels,
        config: config.clone(),
    };

    let manifest = serde_json::to_string_pretty(&stats)?;
    fs::write(output.join(MANIFEST_NAME), manifest)?;

    info!("Copied {} images total", total_images);
    Ok(stats)
}

/// Copy a file, carrying over its access and modification times.
///
/// `fs::copy` already preserves permission bits; timestamps are set
/// explicitly afterwards.
fn copy_preserving_times(src: &Path, dst: &Path) -> Result<()> {
    fs::copy(src, dst).map_err(|e| Error::Copy {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source: e,
    })?;

    let metadata = fs::metadata(src)?;
    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    filetime::set_file_times(dst, atime, mtime)?;

    Ok(())
}
