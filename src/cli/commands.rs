// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Three subcommands: `inspect`, `batch` and `export-vocab`.
//
// `inspect` and `batch` share DataArgs, flattened into each
// command, so every config field can be overridden the same way.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::request::{ConfigOverrides, LoaderRequest};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarise the loader for one data type
    Inspect(InspectArgs),

    /// Build one batch and show its shapes and first sample
    Batch(BatchArgs),

    /// Write the SMILES symbol table as tokenizer.json
    ExportVocab(ExportVocabArgs),
}

/// Where the corpus comes from and how it is split and batched.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// JSON config file; flags below override its fields
    #[arg(long)]
    pub config: Option<String>,

    /// One of: train, valid, finetune
    #[arg(long, default_value = "train")]
    pub data_type: String,

    /// SMILES corpus, one molecule per line
    #[arg(long)]
    pub data_filename: Option<String>,

    /// Read at most this many lines (0 = all)
    #[arg(long)]
    pub data_length: Option<usize>,

    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Fraction of the corpus reserved for validation
    #[arg(long)]
    pub validation_split: Option<f64>,

    /// Seed for the train/validation permutation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show a progress bar while tokenizing
    #[arg(long)]
    pub verbose: bool,
}

/// Convert CLI DataArgs into the application-layer LoaderRequest.
/// The application layer never sees clap types.
impl From<DataArgs> for LoaderRequest {
    fn from(a: DataArgs) -> Self {
        LoaderRequest {
            config_path: a.config,
            data_type:   a.data_type,
            overrides: ConfigOverrides {
                data_filename:    a.data_filename,
                data_length:      a.data_length,
                batch_size:       a.batch_size,
                validation_split: a.validation_split,
                seed:             a.seed,
                verbose_training: a.verbose,
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub data: DataArgs,
}

#[derive(Args, Debug)]
pub struct BatchArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Batch index, 0-based
    #[arg(long, default_value_t = 0)]
    pub index: usize,
}

#[derive(Args, Debug)]
pub struct ExportVocabArgs {
    /// Directory to write tokenizer.json into
    #[arg(long, default_value = "vocab")]
    pub out_dir: String,
}
