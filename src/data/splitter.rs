// ============================================================
// Layer 4 - Train/Validation Splitter
// ============================================================
// Builds a seeded permutation of sample indices and cuts it
// into two blocks:
//
//   permutation = shuffle([0, 1, ..., N-1], seed)
//   valid       = permutation[..valid_size]
//   train       = permutation[valid_size..]
//
//   valid_size  = ceil(N * validation_split)
//
// The validation block comes FIRST, so even a tiny split ratio
// reserves at least one sample whenever N > 0 and the ratio is
// non-zero.
//
// The same seed always yields the same permutation, which lets
// a `train` loader and a `valid` loader built separately over the
// same corpus agree on who goes where.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom driven by
// a StdRng seeded from the config seed.
//
// Reference: rand crate documentation (SeedableRng)

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// The two disjoint index blocks of a seeded split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitIndices {
    /// Indices reserved for validation
    pub valid: Vec<usize>,
    /// Indices used for training
    pub train: Vec<usize>,
}

impl SplitIndices {
    pub fn valid_size(&self) -> usize {
        self.valid.len()
    }
}

/// ceil(total * validation_split), clamped to `total`.
pub fn validation_size(total: usize, validation_split: f64) -> usize {
    let size = (total as f64 * validation_split).ceil() as usize;
    size.min(total)
}

/// Seeded permutation of 0..total.
pub fn shuffled_indices(total: usize, seed: u64) -> Vec<usize> {
    let mut rng     = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..total).collect();
    indices.shuffle(&mut rng);
    indices
}

/// Shuffle 0..total with `seed` and split off the validation block.
pub fn split_indices(total: usize, validation_split: f64, seed: u64) -> SplitIndices {
    let mut train = shuffled_indices(total, seed);
    let valid_n   = validation_size(total, validation_split);

    // After this: train = permutation[valid_n..], valid = permutation[..valid_n]
    let rest  = train.split_off(valid_n);
    let valid = std::mem::replace(&mut train, rest);

    tracing::debug!(
        "Index split (seed={}): {} training, {} validation",
        seed,
        train.len(),
        valid.len(),
    );

    SplitIndices { valid, train }
}
