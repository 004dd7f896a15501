// ============================================================
// Layer 4 - SMILES Tokenizer
// ============================================================
// Splits a SMILES string into chemistry-aware symbols using a
// fixed table, and maps each symbol to a one-hot position.
//
// The table, in index order:
//   atoms    Li Na Al Si Cl Sc Zn As Se Br Sn Te Cn
//            H B C N O F P S K V I
//   special  ( ) [ ] = # % 0-9 + - se te c n o s
//   padding  G (start)  A (pad)  E (end)
//
// Tokenizing is a greedy left-to-right scan:
//   1. if the next two characters form a two-character symbol,
//      emit it and advance two
//   2. else if the next character is a one-character symbol,
//      emit it and advance one
//   3. else skip the character
//
// Greedy means "CSc1" reads as C, Sc, 1 and not C, S, c, 1.
// Characters outside the table (@, /, \, ., lowercase b, p...)
// are dropped silently.
//
// Reference: Weininger (1988) SMILES specification

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use burn::tensor::{backend::Backend, Tensor, TensorData};

use crate::domain::traits::SymbolVocabulary;

const ATOMS: [&str; 24] = [
    "Li", "Na", "Al", "Si", "Cl", "Sc", "Zn", "As", "Se", "Br", "Sn", "Te", "Cn",
    "H", "B", "C", "N", "O", "F", "P", "S", "K", "V", "I",
];

const SPECIAL: [&str; 25] = [
    "(", ")", "[", "]", "=", "#", "%",
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9",
    "+", "-", "se", "te", "c", "n", "o", "s",
];

pub const START_SYMBOL: &str = "G";
pub const PAD_SYMBOL:   &str = "A";
pub const END_SYMBOL:   &str = "E";

const PADDING: [&str; 3] = [START_SYMBOL, PAD_SYMBOL, END_SYMBOL];

/// Table-driven SMILES tokenizer with one-hot lookup.
#[derive(Debug, Clone)]
pub struct SmilesTokenizer {
    table:     Vec<&'static str>,
    index:     HashMap<&'static str, usize>,
    two_chars: Vec<&'static str>,
    one_chars: Vec<&'static str>,
}

impl SmilesTokenizer {
    pub fn new() -> Self {
        // Longest atoms first; sort_by_key is stable so equal
        // lengths keep their listed order.
        let mut atoms = ATOMS.to_vec();
        atoms.sort_by_key(|a| std::cmp::Reverse(a.len()));

        let table: Vec<&'static str> = atoms
            .into_iter()
            .chain(SPECIAL)
            .chain(PADDING)
            .collect();

        let index = table
            .iter()
            .enumerate()
            .map(|(i, &s)| (s, i))
            .collect();

        let two_chars = table.iter().copied().filter(|s| s.len() == 2).collect();
        let one_chars = table.iter().copied().filter(|s| s.len() == 1).collect();

        Self { table, index, two_chars, one_chars }
    }

    /// One-hot vector for a single symbol
    pub fn one_hot(&self, symbol: &str) -> Option<Vec<f32>> {
        let i = self.index_of(symbol)?;
        let mut v = vec![0.0f32; self.table.len()];
        v[i] = 1.0;
        Some(v)
    }

    /// Encode one symbol sequence as a [1, len, vocab_size] tensor,
    /// the shape a sampler feeds back into the model one molecule at a time.
    pub fn one_hot_encode<B: Backend>(
        &self,
        tokens: &[&str],
        device: &B::Device,
    ) -> Result<Tensor<B, 3>> {
        let vocab = self.table.len();
        let mut flat = vec![0.0f32; tokens.len() * vocab];

        for (t, symbol) in tokens.iter().enumerate() {
            let i = self
                .index_of(symbol)
                .ok_or_else(|| anyhow!("symbol '{}' is not in the SMILES table", symbol))?;
            flat[t * vocab + i] = 1.0;
        }

        let data = TensorData::new(flat, [1, tokens.len(), vocab]);
        Ok(Tensor::<B, 3>::from_data(data, device))
    }

    fn match_table(table: &[&'static str], candidate: &str) -> Option<&'static str> {
        table.iter().copied().find(|&s| s == candidate)
    }
}

impl Default for SmilesTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolVocabulary for SmilesTokenizer {
    fn symbols(&self) -> &[&'static str] {
        &self.table
    }

    fn tokenize(&self, smiles: &str) -> Vec<&'static str> {
        let mut tokens = Vec::with_capacity(smiles.len());
        let mut rest   = smiles;

        while let Some(c1) = rest.chars().next() {
            let one_end = c1.len_utf8();
            let two_end = rest
                .char_indices()
                .nth(2)
                .map_or(rest.len(), |(i, _)| i);

            if two_end > one_end {
                if let Some(sym) = Self::match_table(&self.two_chars, &rest[..two_end]) {
                    tokens.push(sym);
                    rest = &rest[two_end..];
                    continue;
                }
            }

            if let Some(sym) = Self::match_table(&self.one_chars, &rest[..one_end]) {
                tokens.push(sym);
            }
            rest = &rest[one_end..];
        }

        tokens
    }

    fn index_of(&self, symbol: &str) -> Option<usize> {
        self.index.get(symbol).copied()
    }

    fn start_symbol(&self) -> &'static str {
        START_SYMBOL
    }

    fn end_symbol(&self) -> &'static str {
        END_SYMBOL
    }

    fn pad_symbol(&self) -> &'static str {
        PAD_SYMBOL
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    #[test]
    fn test_table_layout() {
        let st = SmilesTokenizer::new();
        assert_eq!(st.vocab_size(), 52);
        assert_eq!(st.index_of("Li"), Some(0));
        assert_eq!(st.index_of("Cl"), Some(4));
        assert_eq!(st.index_of("H"),  Some(13));
        assert_eq!(st.index_of("("),  Some(24));
        assert_eq!(st.index_of("G"),  Some(49));
        assert_eq!(st.index_of("A"),  Some(50));
        assert_eq!(st.index_of("E"),  Some(51));
    }

    #[test]
    fn test_simple_chain() {
        let st = SmilesTokenizer::new();
        assert_eq!(st.tokenize("CCO"), vec!["C", "C", "O"]);
    }

    #[test]
    fn test_two_char_atoms_win() {
        let st = SmilesTokenizer::new();
        assert_eq!(st.tokenize("ClCBr"), vec!["Cl", "C", "Br"]);
        assert_eq!(st.tokenize("[se]"), vec!["[", "se", "]"]);
    }

    #[test]
    fn test_greedy_match_is_not_chemistry_aware() {
        // S followed by aromatic c reads as scandium
        let st = SmilesTokenizer::new();
        assert_eq!(st.tokenize("CSc1"), vec!["C", "Sc", "1"]);
    }

    #[test]
    fn test_aromatic_ring() {
        let st = SmilesTokenizer::new();
        assert_eq!(
            st.tokenize("c1ccccc1"),
            vec!["c", "1", "c", "c", "c", "c", "c", "1"]
        );
    }

    #[test]
    fn test_unknown_characters_skipped() {
        let st = SmilesTokenizer::new();
        assert_eq!(st.tokenize("[C@@H]"), vec!["[", "C", "H", "]"]);
        assert_eq!(st.tokenize("C/C=C\\C"), vec!["C", "C", "=", "C", "C"]);
        assert!(st.tokenize("").is_empty());
    }

    #[test]
    fn test_non_ascii_does_not_panic() {
        let st = SmilesTokenizer::new();
        assert_eq!(st.tokenize("Cé"), vec!["C"]);
    }

    #[test]
    fn test_one_hot_vector() {
        let st = SmilesTokenizer::new();
        let v  = st.one_hot("N").unwrap();
        assert_eq!(v.len(), 52);
        assert_eq!(v.iter().sum::<f32>(), 1.0);
        assert_eq!(v[st.index_of("N").unwrap()], 1.0);
        assert!(st.one_hot("Xx").is_none());
    }

    #[test]
    fn test_one_hot_encode_shape() {
        let st     = SmilesTokenizer::new();
        let device = Default::default();
        let tokens = st.tokenize("CCO");

        let t = st.one_hot_encode::<NdArray>(&tokens, &device).unwrap();
        assert_eq!(t.dims(), [1, 3, 52]);

        let values = t.into_data().to_vec::<f32>().unwrap();
        assert_eq!(values.iter().sum::<f32>(), 3.0);
        assert_eq!(values[2 * 52 + st.index_of("O").unwrap()], 1.0);
    }

    #[test]
    fn test_one_hot_encode_rejects_unknown_symbol() {
        let st     = SmilesTokenizer::new();
        let device = Default::default();
        assert!(st.one_hot_encode::<NdArray>(&["Q"], &device).is_err());
    }
}
