// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands off to a use case in
// Layer 2 and prints the result as pretty JSON on stdout.
// Logging goes to stderr through tracing, so stdout stays
// machine readable.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{BatchArgs, Commands, ExportVocabArgs, InspectArgs};

#[derive(Parser, Debug)]
#[command(
    name = "smiles-feeder",
    version,
    about = "Tokenize, pad, split and one-hot batch a SMILES corpus."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args)     => run_inspect(args),
            Commands::Batch(args)       => run_batch(args),
            Commands::ExportVocab(args) => run_export(args),
        }
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    use crate::application::inspect_use_case::InspectUseCase;

    let report = InspectUseCase::new(args.data.into()).execute()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<()> {
    use crate::application::batch_use_case::BatchUseCase;

    let report = BatchUseCase::new(args.data.into(), args.index).execute()?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_export(args: ExportVocabArgs) -> Result<()> {
    use crate::application::export_use_case::ExportVocabUseCase;

    let path = ExportVocabUseCase::new(args.out_dir).execute()?;
    println!("{}", path.display());
    Ok(())
}
