//! Source tree scanning
//!
//! Discovers species directories and lists the image files inside a condition
//! directory. Listings are sorted so the downstream shuffle sees the same
//! order regardless of how the filesystem enumerates entries.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::IMAGE_EXTENSIONS;
use crate::utils::error::{Error, Result};

/// Discover species directories under the source root.
///
/// A species is any non-hidden subdirectory (name not starting with `.`).
/// Names are returned sorted for a stable processing order.
pub fn discover_species(source: &Path) -> Result<Vec<String>> {
    if !source.is_dir() {
        return Err(Error::SourceNotFound(source.to_path_buf()));
    }

    let mut species = Vec::new();
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.starts_with('.') {
                continue;
            }
            species.push(name.to_string());
        }
    }
    species.sort();

    debug!("Discovered {} species directories", species.len());
    Ok(species)
}

/// Check whether a filename carries a recognized image extension.
pub fn is_image_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// List image files directly inside a condition directory.
///
/// Nested directories and files without a recognized extension are ignored.
/// Results are sorted by path.
pub fn list_images(condition_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images: Vec<PathBuf> = WalkDir::new(condition_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map(is_image_file)
                .unwrap_or(false)
        })
        .collect();
    images.sort();

    debug!(
        "Listed {} images in {}",
        images.len(),
        condition_dir.display()
    );
    Ok(images)
}
