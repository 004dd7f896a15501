// ============================================================
// Layer 4 - SMILES Batcher
// ============================================================
// Implements Burn's Batcher trait to turn a Vec<SmilesSample>
// into a pair of one-hot tensors for next-symbol training.
//
// How batching works here:
//   Input:  N SmilesSamples, each max_len + 2 symbol ids long
//   Output: SmilesBatch with
//             x = one-hot(input_ids)   shape [N, max_len + 1, vocab]
//             y = one-hot(target_ids)  shape [N, max_len + 1, vocab]
//
//   We write a single 1.0 per (sample, step) into a flat zeroed
//   buffer, then hand it to Burn as TensorData with the 3D shape:
//   offset(n, t, v) = (n * steps + t) * vocab + v
//
// All samples in a batch share one length because the loader
// pads against the corpus-wide maximum.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    tensor::{backend::Backend, Tensor, TensorData},
};

use crate::data::dataset::SmilesSample;

// ─── SmilesBatch ──────────────────────────────────────────────────────────────
/// Teacher-forcing batch: y[n, t] is the symbol that follows x[n, t].
#[derive(Debug, Clone)]
pub struct SmilesBatch<B: Backend> {
    /// One-hot inputs, shape [batch_size, steps, vocab_size]
    pub x: Tensor<B, 3>,

    /// One-hot targets, shape [batch_size, steps, vocab_size]
    pub y: Tensor<B, 3>,
}

impl<B: Backend> SmilesBatch<B> {
    /// Number of samples in this batch
    pub fn size(&self) -> usize {
        self.x.dims()[0]
    }
}

// ─── SmilesBatcher ────────────────────────────────────────────────────────────
/// Holds the target device and the one-hot width.
#[derive(Clone, Debug)]
pub struct SmilesBatcher<B: Backend> {
    pub device: B::Device,
    pub vocab_size: usize,
}

impl<B: Backend> SmilesBatcher<B> {
    pub fn new(device: B::Device, vocab_size: usize) -> Self {
        Self { device, vocab_size }
    }

    /// Flat one-hot buffer for `rows`, each `steps` ids long.
    fn one_hot_rows<'a>(
        &self,
        rows: impl Iterator<Item = &'a [usize]>,
        count: usize,
        steps: usize,
    ) -> Vec<f32> {
        let vocab    = self.vocab_size;
        let mut flat = vec![0.0f32; count * steps * vocab];

        for (n, row) in rows.enumerate() {
            for (t, &id) in row.iter().enumerate() {
                flat[(n * steps + t) * vocab + id] = 1.0;
            }
        }

        flat
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
impl<B: Backend> Batcher<SmilesSample, SmilesBatch<B>> for SmilesBatcher<B> {
    fn batch(&self, items: Vec<SmilesSample>) -> SmilesBatch<B> {
        let count = items.len();
        let steps = items.first().map_or(0, |s| s.input_ids().len());

        let x_flat = self.one_hot_rows(items.iter().map(SmilesSample::input_ids), count, steps);
        let y_flat = self.one_hot_rows(items.iter().map(SmilesSample::target_ids), count, steps);

        let shape = [count, steps, self.vocab_size];

        let x = Tensor::<B, 3>::from_data(TensorData::new(x_flat, shape), &self.device);
        let y = Tensor::<B, 3>::from_data(TensorData::new(y_flat, shape), &self.device);

        SmilesBatch { x, y }
    }
}
