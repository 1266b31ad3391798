//! Error types for dale-chall-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during readability analysis.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input text has no sentences or no words to score.
    #[error("no scorable text in input")]
    EmptyInput,

    /// A word list could not be read.
    #[error("failed to read word list {path}: {source}")]
    MissingLexicon {
        /// The path that was tried.
        path: Utf8PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },

    /// A JSON word list was not an array of strings.
    #[error("invalid word list {path}: {source}")]
    InvalidLexicon {
        /// The offending file.
        path: Utf8PathBuf,
        /// The underlying parse failure.
        source: serde_json::Error,
    },

    /// A word list was loaded but holds no entries.
    #[error("{which} word list is empty")]
    EmptyLexicon {
        /// Which list was empty ("familiar" or "dictionary").
        which: &'static str,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
