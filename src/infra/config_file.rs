// ============================================================
// Layer 6 - Config File
// ============================================================
// Reads and writes DataConfig as pretty-printed JSON.
//
// Example file:
//   {
//     "data_filename": "datasets/dataset_cleansed.smi",
//     "data_length": 0,
//     "batch_size": 256,
//     "validation_split": 0.1,
//     "seed": 71,
//     "verbose_training": true
//   }
//
// Missing fields take their Default values, and unrelated keys
// (model or optimiser settings living in the same file) are
// ignored, so one JSON file can drive the whole training job.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::domain::config::DataConfig;

/// Load a DataConfig from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<DataConfig> {
    let path = path.as_ref();

    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg: DataConfig = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

    tracing::debug!("Loaded data config from '{}'", path.display());
    Ok(cfg)
}

/// Save a DataConfig as pretty JSON, creating parent directories.
pub fn save_config(path: impl AsRef<Path>, cfg: &DataConfig) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::debug!("Saved data config to '{}'", path.display());
    Ok(())
}
