//! SMILES data feeding for next-token sequence models.
//!
//! Reads a corpus with one SMILES string per line, tokenizes each line into
//! chemistry-aware symbols, pads every sample to the corpus-wide maximum,
//! splits train/validation with a seeded permutation and serves one-hot
//! `(x, y)` batches where `y` is `x` shifted by one symbol.
//!
//! ```ignore
//! use smiles_feeder::{DataConfig, DataType, SmilesDataLoader};
//! use burn::backend::NdArray;
//!
//! let cfg    = DataConfig { data_filename: "zinc.smi".into(), ..Default::default() };
//! let loader = SmilesDataLoader::new(&cfg, DataType::Train)?;
//! for i in 0..loader.len() {
//!     let batch = loader.get::<NdArray>(i, &Default::default())?;
//! }
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;

pub use data::batcher::{SmilesBatch, SmilesBatcher};
pub use data::data_loader::SmilesDataLoader;
pub use data::tokenizer::SmilesTokenizer;
pub use domain::config::DataConfig;
pub use domain::data_type::DataType;
