// ============================================================
// Layer 2 - Loader Request
// ============================================================
// Turns "a config file, some overrides and a data type name"
// into a ready SmilesDataLoader:
//
//   Step 1: Parse the data type name  (fails fast on unknown names)
//   Step 2: Load the JSON config, or start from defaults
//   Step 3: Apply command line overrides
//   Step 4: Validate and build the loader
//
// Every use case starts here, so they all resolve settings the
// same way.

use anyhow::Result;

use crate::data::data_loader::SmilesDataLoader;
use crate::domain::{config::DataConfig, data_type::DataType};
use crate::infra::config_file::load_config;

/// Per-field overrides; `None` keeps the config file's value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_filename:    Option<String>,
    pub data_length:      Option<usize>,
    pub batch_size:       Option<usize>,
    pub validation_split: Option<f64>,
    pub seed:             Option<u64>,
    pub verbose_training: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, cfg: &mut DataConfig) {
        if let Some(v) = &self.data_filename    { cfg.data_filename    = v.clone(); }
        if let Some(v) = self.data_length       { cfg.data_length      = v; }
        if let Some(v) = self.batch_size        { cfg.batch_size       = v; }
        if let Some(v) = self.validation_split  { cfg.validation_split = v; }
        if let Some(v) = self.seed              { cfg.seed             = v; }
        if self.verbose_training                { cfg.verbose_training = true; }
    }
}

#[derive(Debug, Clone)]
pub struct LoaderRequest {
    pub config_path: Option<String>,
    pub overrides:   ConfigOverrides,
    pub data_type:   String,
}

impl LoaderRequest {
    /// Resolve the final DataConfig (file, then overrides).
    pub fn resolve_config(&self) -> Result<DataConfig> {
        let mut cfg = match &self.config_path {
            Some(path) => load_config(path)?,
            None       => DataConfig::default(),
        };
        self.overrides.apply(&mut cfg);
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn data_type(&self) -> Result<DataType> {
        self.data_type.parse()
    }

    pub fn build_loader(&self) -> Result<SmilesDataLoader> {
        let data_type = self.data_type()?;
        let cfg       = self.resolve_config()?;
        SmilesDataLoader::new(&cfg, data_type)
    }
}
