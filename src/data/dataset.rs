use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

use crate::data::padding::shift_pair;

/// One padded SMILES sample as one-hot indices.
/// Sequence format: G tokens... E A...
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmilesSample {
    pub symbol_ids: Vec<usize>,
}

impl SmilesSample {
    pub fn new(symbol_ids: Vec<usize>) -> Self {
        Self { symbol_ids }
    }

    /// Everything except the last symbol
    pub fn input_ids(&self) -> &[usize] {
        shift_pair(&self.symbol_ids).0
    }

    /// Everything except the first symbol
    pub fn target_ids(&self) -> &[usize] {
        shift_pair(&self.symbol_ids).1
    }

    pub fn padded_len(&self) -> usize {
        self.symbol_ids.len()
    }
}

/// The active subset of a loader, already padded, exposed through
/// Burn's Dataset trait so it also works with `DataLoaderBuilder`.
pub struct SmilesDataset {
    samples: Vec<SmilesSample>,
}

impl SmilesDataset {
    pub fn new(samples: Vec<SmilesSample>) -> Self { Self { samples } }

    pub fn sample_count(&self) -> usize { self.samples.len() }
}

impl Dataset<SmilesSample> for SmilesDataset {
    fn get(&self, index: usize) -> Option<SmilesSample> {
        self.samples.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.samples.len()
    }
}
