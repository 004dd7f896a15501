// ============================================================
// Layer 4 - Sequence Padding
// ============================================================
// Brings every tokenized sample to the same length before it
// is one-hot encoded:
//
//   [start] tokens... [end] [pad] * (max_len - len(tokens))
//
// so every padded sample is exactly max_len + 2 symbols.
//
// The model is trained on next-symbol prediction, so a padded
// sample yields one input/target pair shifted by one:
//
//   padded  G  C  C  O  E  A
//   input   G  C  C  O  E        (all but the last)
//   target     C  C  O  E  A     (all but the first)
//
// Reference: Rust Book §8 (Vectors), §13 (Iterators)

use std::iter;

use crate::domain::traits::SymbolVocabulary;

/// Pad one tokenized sample to `max_len + 2` symbols.
///
/// Samples longer than `max_len` get no pad symbols at all; the
/// loader never produces one because `max_len` is the corpus maximum.
pub fn pad_tokens<V: SymbolVocabulary + ?Sized>(
    vocab:   &V,
    tokens:  &[&'static str],
    max_len: usize,
) -> Vec<&'static str> {
    let pads = max_len.saturating_sub(tokens.len());

    iter::once(vocab.start_symbol())
        .chain(tokens.iter().copied())
        .chain(iter::once(vocab.end_symbol()))
        .chain(iter::repeat(vocab.pad_symbol()).take(pads))
        .collect()
}

/// Split a padded sample into its (input, target) halves.
/// Both halves have `padded.len() - 1` elements.
pub fn shift_pair<T>(padded: &[T]) -> (&[T], &[T]) {
    match padded.len() {
        0 => (padded, padded),
        n => (&padded[..n - 1], &padded[1..]),
    }
}
