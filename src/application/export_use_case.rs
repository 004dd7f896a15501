// ============================================================
// Layer 2 - ExportVocabUseCase
// ============================================================
// Saves the SMILES symbol table as tokenizer.json.

use anyhow::Result;
use std::path::PathBuf;

use crate::data::tokenizer::SmilesTokenizer;
use crate::infra::vocab_store::VocabStore;

pub struct ExportVocabUseCase {
    out_dir: String,
}

impl ExportVocabUseCase {
    pub fn new(out_dir: impl Into<String>) -> Self {
        Self { out_dir: out_dir.into() }
    }

    pub fn execute(&self) -> Result<PathBuf> {
        let store = VocabStore::new(&self.out_dir);
        store.save(&SmilesTokenizer::new())
    }
}
