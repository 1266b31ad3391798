//! Dictionaries for text analysis.
//!
//! Provides the closed word sets used by sentence splitting.

pub mod honorifics;
