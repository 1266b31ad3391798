//! Text segmentation.
//!
//! Splits raw text into sentences and words with two character scanners.
//! Both walk the text with an index cursor and keep a small explicit state,
//! so the output only depends on the input string.

use std::cell::OnceCell;

use crate::dictionaries::honorifics::ends_with_honorific;

/// Scanner state for sentence splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SentenceState {
    /// Inside a sentence, no terminator seen yet.
    Accumulating,
    /// A terminator was just appended; the next character decides.
    PossibleEnd,
}

/// Scanner state for word splitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordState {
    InWord,
    OutOfWord,
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Quotes and brackets that may close a sentence after its terminator.
const fn is_closing_mark(ch: char) -> bool {
    matches!(ch, '"' | '\'' | ')' | ']' | '\u{201D}' | '\u{2019}')
}

const fn is_line_break(ch: char) -> bool {
    matches!(ch, '\n' | '\r')
}

/// Characters that may appear inside a word.
pub const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '\'' | '-')
}

/// Split text into sentences.
///
/// A sentence ends at `.`, `!` or `?` (optionally followed by closing quotes
/// or brackets) once the next character is a space, a line break, or the end
/// of input, unless the last token of the
/// sentence is an honorific such as `Dr.`. Line breaks are dropped and a new
/// sentence never starts with a space. Terminal punctuation is kept.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut state = SentenceState::Accumulating;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        i += 1;

        match state {
            SentenceState::PossibleEnd if ch == ' ' || is_line_break(ch) => {
                if ends_with_honorific(&current) {
                    if ch == ' ' {
                        current.push(ch);
                    }
                } else {
                    sentences.push(std::mem::take(&mut current));
                }
                state = SentenceState::Accumulating;
            }
            SentenceState::PossibleEnd => {
                // "?!", "..." and closing quotes keep the end pending;
                // "3.14" and "e.g" resume.
                current.push(ch);
                if !is_sentence_terminator(ch) && !is_closing_mark(ch) {
                    state = SentenceState::Accumulating;
                }
            }
            SentenceState::Accumulating if is_sentence_terminator(ch) => {
                current.push(ch);
                state = SentenceState::PossibleEnd;
            }
            SentenceState::Accumulating => {
                if is_line_break(ch) || (ch == ' ' && current.is_empty()) {
                    continue;
                }
                current.push(ch);
            }
        }
    }

    if !current.is_empty() {
        sentences.push(current);
    }

    sentences
}

/// Split text into words.
///
/// A word is a maximal run of ASCII letters, digits, apostrophes and hyphens.
/// Case is preserved and duplicates are kept in text order. A lone `-` is not
/// a word.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    let mut state = WordState::OutOfWord;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        i += 1;

        match (state, is_word_char(ch)) {
            (_, true) => {
                current.push(ch);
                state = WordState::InWord;
            }
            (WordState::InWord, false) => {
                push_word(&mut words, std::mem::take(&mut current));
                state = WordState::OutOfWord;
            }
            (WordState::OutOfWord, false) => {}
        }
    }

    push_word(&mut words, current);
    words
}

fn push_word(words: &mut Vec<String>, word: String) {
    if !word.is_empty() && word != "-" {
        words.push(word);
    }
}

/// First word of a sentence, as the capitalization rule compares it.
///
/// Takes the first space-delimited token and trims characters that cannot
/// be part of a word, so `"However,"` yields `"However"`.
pub fn first_word(sentence: &str) -> Option<&str> {
    sentence
        .split(' ')
        .next()
        .map(|token| token.trim_matches(|c: char| !is_word_char(c)))
        .filter(|token| !token.is_empty())
}

/// A text with lazily computed, cached sentence and word lists.
///
/// Counts can be requested in any order; each list is computed once and the
/// cached value is what a fresh split would return.
#[derive(Debug)]
pub struct Document<'a> {
    text: &'a str,
    sentences: OnceCell<Vec<String>>,
    words: OnceCell<Vec<String>>,
}

impl<'a> Document<'a> {
    /// Wrap a text for analysis.
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            sentences: OnceCell::new(),
            words: OnceCell::new(),
        }
    }

    /// Sentences in text order.
    pub fn sentences(&self) -> &[String] {
        self.sentences.get_or_init(|| split_sentences(self.text))
    }

    /// Words in text order.
    pub fn words(&self) -> &[String] {
        self.words.get_or_init(|| split_words(self.text))
    }

    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences().len()
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words().len()
    }

    /// First word of every sentence that has one.
    pub fn sentence_first_words(&self) -> impl Iterator<Item = &str> {
        self.sentences().iter().filter_map(|s| first_word(s))
    }
}
