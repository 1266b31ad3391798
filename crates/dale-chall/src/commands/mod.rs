//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use dale_chall_core::lexicon::{self, DEFAULT_CORPUS_FILE, DEFAULT_DICTIONARY_FILE, Lexicon};

pub mod info;
pub mod score;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Word list locations picked for a run.
#[derive(Debug, Clone)]
pub struct LexiconPaths {
    /// Familiar word list.
    pub corpus: Utf8PathBuf,
    /// Dictionary word list.
    pub dictionary: Utf8PathBuf,
}

impl LexiconPaths {
    /// Resolve both lists from flags, config, and the default data directories.
    pub fn resolve(
        corpus_flag: Option<&Utf8Path>,
        dictionary_flag: Option<&Utf8Path>,
        config: &dale_chall_core::Config,
        cwd: &Utf8Path,
    ) -> anyhow::Result<Self> {
        let corpus = lexicon::locate_word_list(
            corpus_flag,
            config.corpus_path.as_deref(),
            cwd,
            DEFAULT_CORPUS_FILE,
        )
        .context("familiar word list not found (use --corpus or set corpus_path)")?;
        let dictionary = lexicon::locate_word_list(
            dictionary_flag,
            config.dictionary_path.as_deref(),
            cwd,
            DEFAULT_DICTIONARY_FILE,
        )
        .context("dictionary word list not found (use --dictionary or set dictionary_path)")?;
        Ok(Self { corpus, dictionary })
    }

    /// Load the lexicon from the resolved paths.
    pub fn load(&self) -> anyhow::Result<Lexicon> {
        Lexicon::from_files(&self.corpus, &self.dictionary).context("failed to load word lists")
    }
}
