// ============================================================
// Layer 4 - SMILES Data Loader
// ============================================================
// Indexable source of one-hot batches for one data type.
//
// Construction does all the one-off work:
//   Step 1: Read up to `data_length` lines      (loader.rs)
//   Step 2: Tokenize every line, track max_len  (tokenizer.rs)
//   Step 3: Seeded train/valid split            (splitter.rs)
//           - skipped for `finetune`, which serves every line
//
// After that the loader behaves like a random-access sequence:
//   len()      = ceil(subset_size / batch_size)
//   get(idx)   = subset[idx*batch_size .. (idx+1)*batch_size]
//                → padded (padding.rs) → one-hot (batcher.rs)
//
// max_len is measured over the WHOLE corpus, not per subset, so
// a train loader and a valid loader built from the same config
// produce tensors of the same width.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

use anyhow::{bail, Result};
use burn::{data::dataloader::batcher::Batcher, tensor::backend::Backend};
use indicatif::{ProgressBar, ProgressStyle};

use crate::data::{
    batcher::{SmilesBatch, SmilesBatcher},
    dataset::{SmilesDataset, SmilesSample},
    loader::SmilesFileLoader,
    padding::pad_tokens,
    splitter::{split_indices, SplitIndices},
    tokenizer::SmilesTokenizer,
};
use crate::domain::{
    config::DataConfig,
    data_type::DataType,
    traits::{CorpusSource, SymbolVocabulary},
};

/// Tokenized, split SMILES corpus serving batches for one data type.
pub struct SmilesDataLoader {
    config:    DataConfig,
    data_type: DataType,
    tokenizer: SmilesTokenizer,
    /// Every tokenized line, in file order
    tokenized: Vec<Vec<&'static str>>,
    /// Longest tokenized line across the whole corpus
    max_len:   usize,
    /// Present for train/valid only
    split:     Option<SplitIndices>,
    /// Corpus positions served by this loader, in serving order
    active:    Vec<usize>,
}

impl SmilesDataLoader {
    /// Build a loader reading `config.data_filename`.
    pub fn new(config: &DataConfig, data_type: DataType) -> Result<Self> {
        let source = SmilesFileLoader::new(&config.data_filename, config.data_length);
        Self::from_source(config, data_type, &source)
    }

    /// Same as `new`, with the data type given by name.
    /// Unknown names fail before the corpus is touched.
    pub fn from_name(config: &DataConfig, data_type: &str) -> Result<Self> {
        let data_type: DataType = data_type.parse()?;
        Self::new(config, data_type)
    }

    /// Build a loader over any corpus source.
    pub fn from_source(
        config:    &DataConfig,
        data_type: DataType,
        source:    &dyn CorpusSource,
    ) -> Result<Self> {
        config.validate()?;

        let lines = source.load_lines()?;
        Self::from_lines(config, data_type, &lines)
    }

    fn from_lines(config: &DataConfig, data_type: DataType, lines: &[String]) -> Result<Self> {
        let tokenizer = SmilesTokenizer::new();
        let tokenized = tokenize_all(&tokenizer, lines, config.verbose_training)?;
        let max_len   = tokenized.iter().map(Vec::len).max().unwrap_or(0);

        let (split, active) = if data_type.is_split() {
            let split  = split_indices(tokenized.len(), config.validation_split, config.seed);
            let active = match data_type {
                DataType::Valid => split.valid.clone(),
                _               => split.train.clone(),
            };
            (Some(split), active)
        } else {
            (None, (0..tokenized.len()).collect())
        };

        tracing::info!(
            "{} loader ready: {} of {} samples, max_len={}, batch_size={}",
            data_type,
            active.len(),
            tokenized.len(),
            max_len,
            config.batch_size,
        );

        Ok(Self {
            config: config.clone(),
            data_type,
            tokenizer,
            tokenized,
            max_len,
            split,
            active,
        })
    }

    // ─── Sequence interface ──────────────────────────────────────────────────

    /// Number of batches: ceil(subset_size / batch_size)
    pub fn len(&self) -> usize {
        self.active.len().div_ceil(self.config.batch_size)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Batch `idx` as one-hot (x, y) tensors on `device`.
    /// The last batch may be smaller than `batch_size`.
    pub fn get<B: Backend>(&self, idx: usize, device: &B::Device) -> Result<SmilesBatch<B>> {
        let items   = self.batch_samples(idx)?;
        let batcher = self.batcher::<B>(device.clone());
        Ok(batcher.batch(items))
    }

    /// Every batch in order.
    pub fn iter<'a, B: Backend>(
        &'a self,
        device: &'a B::Device,
    ) -> impl Iterator<Item = Result<SmilesBatch<B>>> + 'a {
        (0..self.len()).map(move |idx| self.get::<B>(idx, device))
    }

    /// Padded samples of batch `idx`, before one-hot encoding.
    pub fn batch_samples(&self, idx: usize) -> Result<Vec<SmilesSample>> {
        if idx >= self.len() {
            bail!(
                "batch index {} out of range for {} loader with {} batches",
                idx,
                self.data_type,
                self.len()
            );
        }

        let start = idx * self.config.batch_size;
        let end   = (start + self.config.batch_size).min(self.active.len());

        self.active[start..end]
            .iter()
            .map(|&i| self.sample(i))
            .collect()
    }

    // ─── Padding / encoding ──────────────────────────────────────────────────

    /// Padded symbols of corpus line `corpus_idx`: G tokens E A...
    pub fn padded(&self, corpus_idx: usize) -> Option<Vec<&'static str>> {
        let tokens = self.tokenized.get(corpus_idx)?;
        Some(pad_tokens(&self.tokenizer, tokens, self.max_len))
    }

    fn sample(&self, corpus_idx: usize) -> Result<SmilesSample> {
        let Some(padded) = self.padded(corpus_idx) else {
            bail!("corpus index {} out of range", corpus_idx);
        };

        let ids = padded
            .iter()
            .map(|s| {
                self.tokenizer
                    .index_of(s)
                    .ok_or_else(|| anyhow::anyhow!("symbol '{}' has no one-hot index", s))
            })
            .collect::<Result<Vec<usize>>>()?;

        Ok(SmilesSample::new(ids))
    }

    /// The whole active subset as a Burn dataset, for `DataLoaderBuilder`.
    pub fn dataset(&self) -> Result<SmilesDataset> {
        let samples = self
            .active
            .iter()
            .map(|&i| self.sample(i))
            .collect::<Result<Vec<_>>>()?;
        Ok(SmilesDataset::new(samples))
    }

    /// Batcher matching this loader's vocabulary.
    pub fn batcher<B: Backend>(&self, device: B::Device) -> SmilesBatcher<B> {
        SmilesBatcher::new(device, self.tokenizer.vocab_size())
    }

    // ─── Accessors ───────────────────────────────────────────────────────────

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn config(&self) -> &DataConfig {
        &self.config
    }

    pub fn tokenizer(&self) -> &SmilesTokenizer {
        &self.tokenizer
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Padded length of every sample: start + max_len + end
    pub fn padded_len(&self) -> usize {
        self.max_len + 2
    }

    /// Size of the validation block, 0 for finetune
    pub fn valid_size(&self) -> usize {
        self.split.as_ref().map_or(0, SplitIndices::valid_size)
    }

    pub fn split(&self) -> Option<&SplitIndices> {
        self.split.as_ref()
    }

    /// Number of samples in the corpus, before splitting
    pub fn corpus_size(&self) -> usize {
        self.tokenized.len()
    }

    /// Number of samples this loader serves
    pub fn subset_size(&self) -> usize {
        self.active.len()
    }

    /// Corpus positions this loader serves, in order
    pub fn active_indices(&self) -> &[usize] {
        &self.active
    }

    /// Tokenized samples of the active subset, in serving order
    pub fn samples(&self) -> impl Iterator<Item = &[&'static str]> + '_ {
        self.active.iter().map(|&i| self.tokenized[i].as_slice())
    }
}

/// Tokenize every line, with a progress bar when `verbose`.
fn tokenize_all(
    tokenizer: &SmilesTokenizer,
    lines:     &[String],
    verbose:   bool,
) -> Result<Vec<Vec<&'static str>>> {
    tracing::info!("Tokenizing {} SMILES", lines.len());

    let pb = if verbose {
        let pb = ProgressBar::new(lines.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} SMILES")?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    let tokenized = lines
        .iter()
        .map(|line| {
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            tokenizer.tokenize(line)
        })
        .collect();

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    tracing::debug!("Tokenization done");
    Ok(tokenized)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use std::collections::HashSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CORPUS: [&str; 10] = [
        "CCO",
        "c1ccccc1",
        "CC(=O)O",
        "ClCBr",
        "N#N",
        "O=C=O",
        "CCN(CC)CC",
        "C1CC1",
        "[Na+].[Cl-]",
        "CS(=O)C",
    ];

    fn corpus_file() -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        for l in CORPUS {
            writeln!(f, "{}", l).unwrap();
        }
        f.flush().unwrap();
        f
    }

    fn config(f: &NamedTempFile, batch_size: usize) -> DataConfig {
        DataConfig {
            data_filename:    f.path().to_string_lossy().to_string(),
            data_length:      0,
            batch_size,
            validation_split: 0.2,
            seed:             71,
            verbose_training: false,
        }
    }

    fn argmax_rows(values: &[f32], vocab: usize) -> Vec<usize> {
        values
            .chunks(vocab)
            .map(|row| row.iter().position(|&v| v == 1.0).unwrap())
            .collect()
    }

    #[test]
    fn test_unknown_data_type_fails_fast() {
        let cfg = DataConfig {
            data_filename: "/nonexistent/never-read.smi".to_string(),
            ..DataConfig::default()
        };
        let err = SmilesDataLoader::from_name(&cfg, "test").err().unwrap();
        assert_eq!(err.to_string(), "data_type: 'test' is not defined.");
    }

    #[test]
    fn test_len_is_ceil_of_subset_over_batch() {
        let f   = corpus_file();
        let cfg = config(&f, 3);

        let train = SmilesDataLoader::new(&cfg, DataType::Train).unwrap();
        let valid = SmilesDataLoader::new(&cfg, DataType::Valid).unwrap();
        let tune  = SmilesDataLoader::new(&cfg, DataType::Finetune).unwrap();

        // valid_size = ceil(10 * 0.2) = 2
        assert_eq!(valid.subset_size(), 2);
        assert_eq!(train.subset_size(), 8);
        assert_eq!(tune.subset_size(), 10);

        for loader in [&train, &valid, &tune] {
            let expected = (loader.subset_size() + 2) / 3;
            assert_eq!(loader.len(), expected);
        }
        assert_eq!(train.len(), 3);
        assert_eq!(valid.len(), 1);
        assert_eq!(tune.len(), 4);
    }

    #[test]
    fn test_max_len_covers_whole_corpus() {
        let f      = corpus_file();
        let loader = SmilesDataLoader::new(&config(&f, 4), DataType::Valid).unwrap();
        let st     = SmilesTokenizer::new();

        let expected = CORPUS.iter().map(|s| st.tokenize(s).len()).max().unwrap();
        assert_eq!(loader.max_len(), expected);
    }

    #[test]
    fn test_every_padded_sample_has_same_length() {
        let f      = corpus_file();
        let loader = SmilesDataLoader::new(&config(&f, 4), DataType::Finetune).unwrap();

        for i in 0..loader.corpus_size() {
            let padded = loader.padded(i).unwrap();
            assert_eq!(padded.len(), loader.max_len() + 2);
            assert_eq!(padded[0], "G");
        }
    }

    #[test]
    fn test_x_and_y_shifted_by_one() {
        let f      = corpus_file();
        let loader = SmilesDataLoader::new(&config(&f, 4), DataType::Train).unwrap();
        let device = Default::default();

        let batch = loader.get::<NdArray>(0, &device).unwrap();
        let [n, steps, vocab] = batch.x.dims();
        assert_eq!(n, 4);
        assert_eq!(steps, loader.max_len() + 1);
        assert_eq!(vocab, 52);
        assert_eq!(batch.y.dims(), [n, steps, vocab]);

        let x = argmax_rows(&batch.x.into_data().to_vec::<f32>().unwrap(), vocab);
        let y = argmax_rows(&batch.y.into_data().to_vec::<f32>().unwrap(), vocab);

        for s in 0..n {
            let xs = &x[s * steps..(s + 1) * steps];
            let ys = &y[s * steps..(s + 1) * steps];
            assert_eq!(xs[0], 49, "input starts with G");
            assert_eq!(&xs[1..], &ys[..steps - 1]);
        }
    }

    #[test]
    fn test_batch_decodes_back_to_padded_sample() {
        let f      = corpus_file();
        let loader = SmilesDataLoader::new(&config(&f, 3), DataType::Finetune).unwrap();

        let items    = loader.batch_samples(0).unwrap();
        let expected = loader.padded(0).unwrap();
        let decoded: Vec<&str> = items[0]
            .symbol_ids
            .iter()
            .map(|&i| loader.tokenizer().symbol(i).unwrap())
            .collect();
        assert_eq!(decoded, expected);
        assert_eq!(&decoded[..5], &["G", "C", "C", "O", "E"]);
    }

    #[test]
    fn test_last_batch_is_partial() {
        let f      = corpus_file();
        let loader = SmilesDataLoader::new(&config(&f, 3), DataType::Finetune).unwrap();
        let device = Default::default();

        let last = loader.get::<NdArray>(3, &device).unwrap();
        assert_eq!(last.size(), 1);
    }

    #[test]
    fn test_out_of_range_batch_is_error() {
        let f      = corpus_file();
        let loader = SmilesDataLoader::new(&config(&f, 3), DataType::Finetune).unwrap();
        let device = Default::default();

        assert!(loader.get::<NdArray>(4, &device).is_err());
    }

    #[test]
    fn test_split_disjoint_and_covering() {
        let f     = corpus_file();
        let cfg   = config(&f, 3);
        let train = SmilesDataLoader::new(&cfg, DataType::Train).unwrap();
        let valid = SmilesDataLoader::new(&cfg, DataType::Valid).unwrap();

        let t: HashSet<usize> = train.active_indices().iter().copied().collect();
        let v: HashSet<usize> = valid.active_indices().iter().copied().collect();
        assert!(t.is_disjoint(&v));
        assert_eq!(t.len() + v.len(), CORPUS.len());
        assert_eq!(train.valid_size(), 2);
        assert_eq!(valid.valid_size(), 2);
    }

    #[test]
    fn test_same_seed_reproduces_split() {
        let f   = corpus_file();
        let cfg = config(&f, 3);
        let a   = SmilesDataLoader::new(&cfg, DataType::Train).unwrap();
        let b   = SmilesDataLoader::new(&cfg, DataType::Train).unwrap();
        assert_eq!(a.split(), b.split());
        assert_eq!(a.active_indices(), b.active_indices());
    }

    #[test]
    fn test_finetune_is_unsplit_file_order() {
        let f      = corpus_file();
        let loader = SmilesDataLoader::new(&config(&f, 3), DataType::Finetune).unwrap();

        assert!(loader.split().is_none());
        assert_eq!(loader.valid_size(), 0);
        assert_eq!(loader.active_indices(), (0..10).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_data_length_limits_corpus() {
        let f   = corpus_file();
        let cfg = DataConfig { data_length: 4, ..config(&f, 3) };

        let loader = SmilesDataLoader::new(&cfg, DataType::Finetune).unwrap();
        assert_eq!(loader.corpus_size(), 4);
        assert_eq!(loader.len(), 2);
    }

    #[test]
    fn test_dataset_matches_batches() {
        let f      = corpus_file();
        let loader = SmilesDataLoader::new(&config(&f, 3), DataType::Train).unwrap();

        let ds = loader.dataset().unwrap();
        assert_eq!(ds.sample_count(), loader.subset_size());
        assert_eq!(ds.sample_count(), 8);
    }

    #[test]
    fn test_iter_yields_every_batch() {
        let f      = corpus_file();
        let loader = SmilesDataLoader::new(&config(&f, 4), DataType::Finetune).unwrap();
        let device = Default::default();

        let sizes: Vec<usize> = loader
            .iter::<NdArray>(&device)
            .map(|b| b.unwrap().size())
            .collect();
        assert_eq!(sizes, vec![4, 4, 2]);
    }
}
