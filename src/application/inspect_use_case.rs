// ============================================================
// Layer 2 - InspectUseCase
// ============================================================
// Builds a loader and summarises what it would feed a model:
// corpus size, the active subset, padded length and batch count.
// Useful to sanity check a config before a long training run.

use anyhow::Result;
use serde::Serialize;

use crate::application::request::LoaderRequest;
use crate::data::data_loader::SmilesDataLoader;
use crate::domain::traits::SymbolVocabulary;

/// Summary of one loader, printable as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct LoaderReport {
    pub data_type:   String,
    pub corpus_size: usize,
    pub subset_size: usize,
    pub valid_size:  usize,
    pub max_len:     usize,
    pub padded_len:  usize,
    pub vocab_size:  usize,
    pub batch_size:  usize,
    pub batches:     usize,
}

impl LoaderReport {
    pub fn from_loader(loader: &SmilesDataLoader) -> Self {
        Self {
            data_type:   loader.data_type().to_string(),
            corpus_size: loader.corpus_size(),
            subset_size: loader.subset_size(),
            valid_size:  loader.valid_size(),
            max_len:     loader.max_len(),
            padded_len:  loader.padded_len(),
            vocab_size:  loader.tokenizer().vocab_size(),
            batch_size:  loader.config().batch_size,
            batches:     loader.len(),
        }
    }
}

pub struct InspectUseCase {
    request: LoaderRequest,
}

impl InspectUseCase {
    pub fn new(request: LoaderRequest) -> Self {
        Self { request }
    }

    pub fn execute(&self) -> Result<LoaderReport> {
        let loader = self.request.build_loader()?;
        let report = LoaderReport::from_loader(&loader);

        tracing::info!(
            "{}: {} batches of up to {} ({} samples)",
            report.data_type,
            report.batches,
            report.batch_size,
            report.subset_size,
        );

        Ok(report)
    }
}
