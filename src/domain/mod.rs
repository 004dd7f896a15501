// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types and traits describing what the data
// pipeline works with. No tensors, no file handles.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Corpus location, batching and split settings
pub mod config;

// train / valid / finetune selector
pub mod data_type;

// Seams the data layer implements
pub mod traits;
