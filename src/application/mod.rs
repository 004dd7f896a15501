// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Orchestrates the other layers for one command at a time.
//
// Rules for this layer:
//   - No tokenizing, padding or tensor code here
//   - No printing here (that's Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Config file + overrides + data type → loader
pub mod request;

// Loader summary
pub mod inspect_use_case;

// One batch, shapes and decoded rows
pub mod batch_use_case;

// tokenizer.json export
pub mod export_use_case;
