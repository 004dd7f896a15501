// ============================================================
// Layer 4 - SMILES Corpus Loader
// ============================================================
// Reads a plain text corpus with one SMILES string per line.
//
// Each line has its trailing whitespace stripped (newline,
// carriage return, stray spaces). Leading characters are kept
// untouched. Blank lines are kept as empty samples so that the
// line count matches the file; they tokenize to nothing and
// pad to start + end + pads.
//
// `limit` caps how many lines are kept. 0 means "read all".
//
// Reference: Rust Book §12 (Reading a File)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::domain::traits::CorpusSource;

/// Loads SMILES lines from a text file.
/// Implements the CorpusSource trait from Layer 3.
pub struct SmilesFileLoader {
    /// Path to the corpus file
    path: PathBuf,
    /// Maximum number of lines to keep, 0 = unlimited
    limit: usize,
}

impl SmilesFileLoader {
    pub fn new(path: impl AsRef<Path>, limit: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            limit,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for SmilesFileLoader {
    fn load_lines(&self) -> Result<Vec<String>> {
        tracing::info!("Loading SMILES from '{}'", self.path.display());

        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open SMILES corpus '{}'", self.path.display()))?;

        let take = if self.limit == 0 { usize::MAX } else { self.limit };

        let lines = BufReader::new(file)
            .lines()
            .take(take)
            .map(|line| line.map(|l| l.trim_end().to_string()))
            .collect::<std::io::Result<Vec<String>>>()
            .with_context(|| format!("Cannot read SMILES corpus '{}'", self.path.display()))?;

        if lines.is_empty() {
            tracing::warn!("SMILES corpus '{}' is empty", self.path.display());
        }

        tracing::info!("Loaded {} SMILES", lines.len());
        Ok(lines)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn corpus(lines: &[&str]) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        for l in lines {
            writeln!(f, "{}", l).unwrap();
        }
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_reads_all_lines_when_unlimited() {
        let f     = corpus(&["CCO", "c1ccccc1", "N#N"]);
        let lines = SmilesFileLoader::new(f.path(), 0).load_lines().unwrap();
        assert_eq!(lines, vec!["CCO", "c1ccccc1", "N#N"]);
    }

    #[test]
    fn test_limit_keeps_first_lines() {
        let f     = corpus(&["CCO", "c1ccccc1", "N#N"]);
        let lines = SmilesFileLoader::new(f.path(), 2).load_lines().unwrap();
        assert_eq!(lines, vec!["CCO", "c1ccccc1"]);
    }

    #[test]
    fn test_limit_larger_than_file() {
        let f     = corpus(&["CCO"]);
        let lines = SmilesFileLoader::new(f.path(), 10).load_lines().unwrap();
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_strips_trailing_whitespace() {
        let mut f = NamedTempFile::new().unwrap();
        write!(f, "CCO  \r\nO=C=O\t\n").unwrap();
        f.flush().unwrap();

        let lines = SmilesFileLoader::new(f.path(), 0).load_lines().unwrap();
        assert_eq!(lines, vec!["CCO", "O=C=O"]);
    }

    #[test]
    fn test_missing_file_is_error() {
        let loader = SmilesFileLoader::new("/nonexistent/corpus.smi", 0);
        assert!(loader.load_lines().is_err());
    }
}
