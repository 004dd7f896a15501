// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// File formats that sit around the data pipeline:
//
//   config_file.rs  - DataConfig to and from JSON
//   vocab_store.rs  - the symbol table as a Hugging Face
//                     tokenizer.json, reloaded and verified
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// JSON config loading and saving
pub mod config_file;

/// tokenizer.json export of the SMILES symbol table
pub mod vocab_store;
