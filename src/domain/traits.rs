// ============================================================
// Layer 3 - Core Traits
// ============================================================
// The two seams of the data pipeline:
//
//   CorpusSource     - where raw SMILES lines come from
//   SymbolVocabulary - how a line becomes symbols, and how a
//                      symbol becomes a one-hot position
//
// The loader only talks to these traits, so a different
// corpus format or symbol table slots in without touching
// the splitting, padding or batching code.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Anything that can produce the raw lines of a SMILES corpus.
///
/// Implementations:
///   - SmilesFileLoader → one molecule per line in a text file
pub trait CorpusSource {
    /// Load every line this source provides, trailing whitespace stripped.
    fn load_lines(&self) -> Result<Vec<String>>;
}

// ─── SymbolVocabulary ─────────────────────────────────────────────────────────
/// A fixed, ordered symbol table.
///
/// The position of a symbol in `symbols()` is its one-hot index.
/// Symbols are `'static` so tokenized samples can borrow them
/// instead of allocating a String per token.
pub trait SymbolVocabulary {
    /// All symbols in one-hot index order
    fn symbols(&self) -> &[&'static str];

    /// Split one SMILES line into symbols from the table
    fn tokenize(&self, smiles: &str) -> Vec<&'static str>;

    /// One-hot index of a symbol, None if it is not in the table
    fn index_of(&self, symbol: &str) -> Option<usize>;

    /// Prepended to every padded sample
    fn start_symbol(&self) -> &'static str;

    /// Appended right after the last real token
    fn end_symbol(&self) -> &'static str;

    /// Fills the remainder up to the longest sample
    fn pad_symbol(&self) -> &'static str;

    /// Width of every one-hot vector
    fn vocab_size(&self) -> usize {
        self.symbols().len()
    }

    /// Symbol at a one-hot index
    fn symbol(&self, index: usize) -> Option<&'static str> {
        self.symbols().get(index).copied()
    }
}
