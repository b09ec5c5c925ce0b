//! # leafsplit
//!
//! A dataset-preparation library for leaf disease classification. It takes a
//! source tree of plant species folders, each with `HEALTHY` and `DISEASED`
//! image subfolders, and reorganizes it into stratified `train`/`validation`/
//! `test` splits suitable for model training.
//!
//! ## Source layout
//!
//! ```text
//! leafdataset/
//! ├── Mango/
//! │   ├── HEALTHY/
//! │   │   ├── leaf_001.jpg
//! │   │   └── leaf_002.jpg
//! │   └── DISEASED/
//! │       └── ...
//! ├── Apple/
//! │   └── ...
//! └── ...
//! ```
//!
//! ## Output layout
//!
//! ```text
//! output/
//! ├── train/Mango_HEALTHY/...
//! ├── validation/Mango_HEALTHY/...
//! └── test/Mango_HEALTHY/...
//! ```
//!
//! Splitting is stratified per `{species}_{condition}` label and fully
//! deterministic: every label group is shuffled with a fixed-seed ChaCha8
//! generator, so re-running against an unchanged source reproduces the same
//! partition. Source files are copied, never moved.
//!
//! ## Modules
//!
//! - `dataset`: source tree scanning, split arithmetic, and the partition pass
//! - `utils`: error types and logging setup
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use leafsplit::{prepare_dataset, SplitConfig};
//!
//! let config = SplitConfig::default();
//! let stats = prepare_dataset("leafdataset".as_ref(), "output".as_ref(), &config)?;
//! println!("{}", stats);
//! ```

pub mod dataset;
pub mod utils;

// Re-export commonly used items for convenience
pub use dataset::prepare::{prepare_dataset, LabelStat, PrepareStats};
pub use dataset::scan::{discover_species, list_images};
pub use dataset::split::{shuffled_indices, SplitConfig};
pub use dataset::{CONDITIONS, DEFAULT_SEED, IMAGE_EXTENSIONS, SPLIT_NAMES};
pub use utils::error::{Error, Result};
