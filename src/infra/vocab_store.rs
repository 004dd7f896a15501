// ============================================================
// Layer 6 - Vocabulary Store
// ============================================================
// Writes the SMILES symbol table as a Hugging Face
// `tokenizer.json` so the one-hot indices used for training
// can be reused by tooling built on the `tokenizers` crate.
//
// The file uses a WordLevel model whose ids equal the one-hot
// indices. It carries no pre-tokenizer: SMILES symbols are not
// whitespace separated, so callers must feed it symbols that
// SmilesTokenizer already produced. Unknown symbols map to the
// pad symbol.
//
// After writing, the file is loaded back through the
// `tokenizers` crate and every id is checked against the table.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tokenizers::Tokenizer;

use crate::domain::traits::SymbolVocabulary;

pub const TOKENIZER_FILE: &str = "tokenizer.json";

pub struct VocabStore {
    dir: PathBuf,
}

impl VocabStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(TOKENIZER_FILE)
    }

    /// Write `tokenizer.json`, reload it and verify the ids.
    pub fn save<V: SymbolVocabulary>(&self, vocab: &V) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Cannot create directory '{}'", self.dir.display()))?;

        let ids: serde_json::Map<String, serde_json::Value> = vocab
            .symbols()
            .iter()
            .enumerate()
            .map(|(i, s)| (s.to_string(), serde_json::json!(i)))
            .collect();

        let tokenizer_json = serde_json::json!({
            "version": "1.0",
            "truncation": null,
            "padding": null,
            "added_tokens": [],
            "normalizer": null,
            "pre_tokenizer": null,
            "post_processor": null,
            "decoder": null,
            "model": {
                "type": "WordLevel",
                "vocab": ids,
                "unk_token": vocab.pad_symbol()
            }
        });

        let path = self.path();
        std::fs::write(&path, serde_json::to_string_pretty(&tokenizer_json)?)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        let reloaded = self.load()?;
        verify(&reloaded, vocab)?;

        tracing::info!(
            "Vocabulary of {} symbols saved to '{}'",
            vocab.vocab_size(),
            path.display()
        );
        Ok(path)
    }

    /// Load a previously saved tokenizer.json
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.path();
        Tokenizer::from_file(&path)
            .map_err(|e| anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e))
    }
}

/// Check that `tokenizer` assigns every symbol its one-hot index.
pub fn verify<V: SymbolVocabulary>(tokenizer: &Tokenizer, vocab: &V) -> Result<()> {
    let size = tokenizer.get_vocab_size(true);
    if size != vocab.vocab_size() {
        bail!(
            "tokenizer has {} entries, symbol table has {}",
            size,
            vocab.vocab_size()
        );
    }

    for (i, symbol) in vocab.symbols().iter().enumerate() {
        match tokenizer.token_to_id(symbol) {
            Some(id) if id as usize == i => {}
            other => bail!("symbol '{}' expected id {}, found {:?}", symbol, i, other),
        }
    }

    Ok(())
}
