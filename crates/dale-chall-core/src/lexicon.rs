//! Word lists used for classification.
//!
//! A [`Lexicon`] pairs the Dale-Chall familiar words with a general
//! dictionary of valid words. Both are normalized to lowercase when built and
//! never change afterwards; callers build one and share it by reference.
//!
//! Word list files come in two shapes:
//! - `.json`: a JSON array of strings
//! - anything else: one word per line, blank lines and `#` comments skipped

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};

use crate::config::user_data_dir;
use crate::error::{AnalysisError, AnalysisResult};

/// Default file name for the familiar word list.
pub const DEFAULT_CORPUS_FILE: &str = "corpus.json";

/// Default file name for the dictionary word list.
pub const DEFAULT_DICTIONARY_FILE: &str = "dictionary.json";

/// Directory, relative to the working directory, searched for word lists.
pub const LOCAL_DATA_DIR: &str = "data";

/// Familiar words and dictionary words, lowercased.
#[derive(Debug, Clone)]
pub struct Lexicon {
    familiar: HashSet<String>,
    dictionary: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from two word collections.
    ///
    /// Entries are trimmed and lowercased; empty entries are skipped. Fails
    /// with [`AnalysisError::EmptyLexicon`] when no familiar words remain,
    /// since every word would otherwise score as difficult.
    pub fn new<F, D, S, T>(familiar: F, dictionary: D) -> AnalysisResult<Self>
    where
        F: IntoIterator<Item = S>,
        D: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let familiar = normalize(familiar);
        if familiar.is_empty() {
            return Err(AnalysisError::EmptyLexicon { which: "familiar" });
        }
        let dictionary = normalize(dictionary);
        tracing::debug!(
            familiar = familiar.len(),
            dictionary = dictionary.len(),
            "lexicon built"
        );
        Ok(Self {
            familiar,
            dictionary,
        })
    }

    /// Load both word lists from files.
    #[tracing::instrument(skip_all, fields(corpus = %corpus, dictionary = %dictionary))]
    pub fn from_files(corpus: &Utf8Path, dictionary: &Utf8Path) -> AnalysisResult<Self> {
        let familiar = load_word_list(corpus)?;
        let valid = load_word_list(dictionary)?;
        if valid.is_empty() {
            return Err(AnalysisError::EmptyLexicon { which: "dictionary" });
        }
        Self::new(familiar, valid)
    }

    /// Whether `word` is on the familiar list. `word` must be lowercase.
    pub fn is_familiar(&self, word: &str) -> bool {
        self.familiar.contains(word)
    }

    /// Whether `word` is in the dictionary. `word` must be lowercase.
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Number of familiar words.
    pub fn familiar_len(&self) -> usize {
        self.familiar.len()
    }

    /// Number of dictionary words.
    pub fn dictionary_len(&self) -> usize {
        self.dictionary.len()
    }
}

fn normalize<I, S>(words: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| w.as_ref().trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Read a word list file.
///
/// Returns the raw entries; normalization happens in [`Lexicon::new`].
pub fn load_word_list(path: &Utf8Path) -> AnalysisResult<Vec<String>> {
    let content =
        std::fs::read_to_string(path.as_std_path()).map_err(|e| AnalysisError::MissingLexicon {
            path: path.to_path_buf(),
            source: e,
        })?;

    let words = if path.extension() == Some("json") {
        serde_json::from_str::<Vec<String>>(&content).map_err(|e| {
            AnalysisError::InvalidLexicon {
                path: path.to_path_buf(),
                source: e,
            }
        })?
    } else {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    };

    tracing::debug!(path = %path, entries = words.len(), "word list loaded");
    Ok(words)
}

/// Find a word list file.
///
/// Order: `explicit` (a CLI flag), `configured` (config file), then
/// `<cwd>/data/<file_name>`, then `<user data dir>/<file_name>`. Explicit and
/// configured paths are returned as given (relative ones joined to `cwd`)
/// even when missing, so the read error names the path the user asked for.
pub fn locate_word_list(
    explicit: Option<&Utf8Path>,
    configured: Option<&Utf8Path>,
    cwd: &Utf8Path,
    file_name: &str,
) -> AnalysisResult<Utf8PathBuf> {
    if let Some(path) = explicit.or(configured) {
        return Ok(cwd.join(path));
    }

    let local = cwd.join(LOCAL_DATA_DIR).join(file_name);
    if local.is_file() {
        return Ok(local);
    }

    if let Some(user) = user_data_dir().map(|dir| dir.join(file_name))
        && user.is_file()
    {
        return Ok(user);
    }

    Err(AnalysisError::MissingLexicon {
        path: local,
        source: std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no word list given and none found in the data directories",
        ),
    })
}
