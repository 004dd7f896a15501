// ============================================================
// Layer 3 - Data Configuration
// ============================================================
// Everything the data loader needs to know about a run:
// where the corpus lives, how much of it to read, how to
// batch it and how to carve out a validation subset.
//
// The same struct is read from a JSON config file and then
// patched with command line overrides, so every field has a
// serde default. A config file only needs the fields that
// differ from the defaults.
//
// Reference: Rust Book §5 (Structs)
//            serde documentation (field defaults)

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Settings shared by every data type (train, valid, finetune).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the SMILES corpus, one molecule per line
    pub data_filename: String,

    /// Maximum number of lines to read. 0 means the whole file.
    pub data_length: usize,

    /// Number of samples per batch
    pub batch_size: usize,

    /// Fraction of the corpus reserved for validation, in [0, 1].
    /// The validation size is rounded up.
    pub validation_split: f64,

    /// Seed for the train/validation permutation
    pub seed: u64,

    /// Show a progress bar while tokenizing
    pub verbose_training: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_filename:    "datasets/dataset.smi".to_string(),
            data_length:      0,
            batch_size:       256,
            validation_split: 0.10,
            seed:             71,
            verbose_training: false,
        }
    }
}

impl DataConfig {
    /// Reject settings that would make batching or splitting meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            bail!("batch_size must be > 0");
        }

        if !(0.0..=1.0).contains(&self.validation_split) {
            bail!(
                "validation_split must be within [0, 1], got {}",
                self.validation_split
            );
        }

        if self.data_filename.trim().is_empty() {
            bail!("data_filename must not be empty");
        }

        Ok(())
    }
}
