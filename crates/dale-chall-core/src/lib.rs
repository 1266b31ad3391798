//! Core library for dale-chall.
//!
//! This crate computes an approximate Dale-Chall readability score and
//! provides the configuration types used by the `dale-chall` CLI.
//!
//! # Modules
//!
//! - [`text`] - Sentence and word splitting
//! - [`classify`] - Easy/difficult word classification
//! - [`repetition`] - Repeated difficult word handling
//! - [`readability`] - Score aggregation and the result record
//! - [`lexicon`] - Familiar and dictionary word lists
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use dale_chall_core::{Lexicon, check_readability};
//!
//! let lexicon = Lexicon::new(["the", "cat", "sat"], ["cat"]).unwrap();
//! let report = check_readability("The cat sat.", &lexicon).unwrap();
//!
//! assert_eq!(report.stats.sentence_count, 1);
//! assert_eq!(report.stats.difficult_words, 0);
//! ```
#![deny(unsafe_code)]

pub mod classify;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod lexicon;
pub mod readability;
pub mod repetition;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use lexicon::Lexicon;
pub use readability::{DaleChallReport, GradeBand, check_readability};

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
