// ============================================================
// Layer 2 - BatchUseCase
// ============================================================
// Materialises one batch on the CPU backend and reports its
// tensor shapes together with the first sample decoded back
// into symbols, so the G/E/A framing and the one-step shift
// can be checked by eye.

use anyhow::{bail, Result};
use burn::backend::{ndarray::NdArrayDevice, NdArray};
use serde::Serialize;

use crate::application::request::LoaderRequest;
use crate::data::data_loader::SmilesDataLoader;
use crate::domain::traits::SymbolVocabulary;

type CpuBackend = NdArray;

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub data_type:    String,
    pub index:        usize,
    pub x_shape:      [usize; 3],
    pub y_shape:      [usize; 3],
    /// First sample's input row, decoded
    pub first_input:  String,
    /// First sample's target row, decoded
    pub first_target: String,
}

pub struct BatchUseCase {
    request: LoaderRequest,
    index:   usize,
}

impl BatchUseCase {
    pub fn new(request: LoaderRequest, index: usize) -> Self {
        Self { request, index }
    }

    pub fn execute(&self) -> Result<BatchReport> {
        let loader = self.request.build_loader()?;
        build_report(&loader, self.index)
    }
}

fn build_report(loader: &SmilesDataLoader, index: usize) -> Result<BatchReport> {
    let device = NdArrayDevice::Cpu;
    let batch  = loader.get::<CpuBackend>(index, &device)?;

    let samples = loader.batch_samples(index)?;
    let Some(first) = samples.first() else {
        bail!("batch {} is empty", index);
    };

    let decode = |ids: &[usize]| -> String {
        ids.iter()
            .filter_map(|&i| loader.tokenizer().symbol(i))
            .collect()
    };

    Ok(BatchReport {
        data_type:    loader.data_type().to_string(),
        index,
        x_shape:      batch.x.dims(),
        y_shape:      batch.y.dims(),
        first_input:  decode(first.input_ids()),
        first_target: decode(first.target_ids()),
    })
}
