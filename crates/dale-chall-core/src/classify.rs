//! Easy/difficult word classification.
//!
//! [`is_easy_word`] is a pure function of the word, the lexicon and the set of
//! sentence-initial words. Rules apply in order and the first that fires
//! decides:
//!
//! 1. the lowercased word is on the familiar list
//! 2. the word is all ASCII digits
//! 3. the word is hyphenated and every part is easy
//! 4. the word is capitalized and not a sentence-initial dictionary word
//! 5. the word ends in a known suffix and the stem is familiar
//!
//! Anything else is difficult.

use std::collections::HashSet;

use crate::lexicon::Lexicon;

/// Suffixes tried in order; only the first one the word ends with is used.
pub const SUFFIXES: &[&str] = &[
    "s", "ies", "ing", "n", "ed", "ied", "ly", "er", "ier", "est", "iest",
];

/// Words that open a sentence, compared case-sensitively.
#[derive(Debug, Clone, Default)]
pub struct SentenceStarts<'a> {
    words: HashSet<&'a str>,
}

impl<'a> SentenceStarts<'a> {
    /// Collect sentence-initial words.
    pub fn new<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Whether `word` opens some sentence.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl<'a> FromIterator<&'a str> for SentenceStarts<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Decide whether a single word counts as easy.
pub fn is_easy_word(word: &str, lexicon: &Lexicon, starts: &SentenceStarts<'_>) -> bool {
    // Hyphen splits can yield empty parts ("-re", "co-"); they are never easy.
    let Some(first) = word.chars().next() else {
        return false;
    };

    let lower = word.to_lowercase();

    if lexicon.is_familiar(&lower) {
        return true;
    }

    if word.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    if lower.contains('-') {
        // Each part is strictly shorter than the word, so this terminates.
        return lower
            .split('-')
            .all(|part| is_easy_word(part, lexicon, starts));
    }

    if first.is_ascii_uppercase() {
        return !(starts.contains(word) && lexicon.is_valid_word(&lower));
    }

    SUFFIXES
        .iter()
        .find_map(|suffix| word.strip_suffix(suffix))
        .is_some_and(|stem| lexicon.is_familiar(stem))
}

/// Classify every word, returning `true` for easy words.
#[tracing::instrument(skip_all, fields(words = words.len()))]
pub fn classify_words(
    words: &[String],
    lexicon: &Lexicon,
    starts: &SentenceStarts<'_>,
) -> Vec<bool> {
    let flags: Vec<bool> = words
        .iter()
        .map(|w| is_easy_word(w, lexicon, starts))
        .collect();
    tracing::debug!(
        easy = flags.iter().filter(|easy| **easy).count(),
        "initial classification"
    );
    flags
}
