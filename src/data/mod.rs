// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything from a raw SMILES text file to one-hot tensor
// batches.
//
// The pipeline flows in this order:
//
//   corpus.smi
//       │
//       ▼
//   SmilesFileLoader  → reads lines, strips trailing whitespace
//       │
//       ▼
//   SmilesTokenizer   → splits each line into table symbols
//       │
//       ▼
//   splitter          → seeded train / valid index blocks
//       │
//       ▼
//   padding           → G tokens E A... to a common length
//       │
//       ▼
//   SmilesBatcher     → one-hot (x, y) tensors, shifted by one
//
// SmilesDataLoader ties the steps together and serves batch
// `idx` on demand. SmilesDataset exposes the same padded samples
// through Burn's Dataset trait.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Reads a SMILES corpus, one molecule per line
pub mod loader;

/// Table-driven SMILES tokenizer and one-hot lookup
pub mod tokenizer;

/// Seeded train/validation index split
pub mod splitter;

/// Start/end/pad framing and the input/target shift
pub mod padding;

/// Implements Burn's Dataset trait for padded samples
pub mod dataset;

/// Implements Burn's Batcher trait to create one-hot batches
pub mod batcher;

/// Indexable loader serving batches for one data type
pub mod data_loader;
