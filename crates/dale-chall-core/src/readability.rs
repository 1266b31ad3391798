//! Readability scoring using the Dale-Chall formula.
//!
//! Formula: `0.0496 * (words/sentences) + 0.1579 * difficult% + 3.6365`
//!
//! The score is approximate: the familiar list is matched literally with a
//! few morphological shortcuts (see [`classify`]) instead of full stemming.
//! Lower score = more readable. See [`GradeBand`] for the usual grade chart.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::classify::{self, SentenceStarts};
use crate::error::{AnalysisError, AnalysisResult};
use crate::lexicon::Lexicon;
use crate::repetition::{self, Partition};
use crate::text::Document;

/// Weight of the average sentence length.
pub const SENTENCE_LENGTH_WEIGHT: f64 = 0.0496;
/// Weight of the difficult word percentage.
pub const DIFFICULT_WORD_WEIGHT: f64 = 0.1579;
/// Constant term of the formula.
pub const SCORE_CONSTANT: f64 = 3.6365;

/// Aggregate statistics of a Dale-Chall run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DaleChallStats {
    /// Number of sentences detected.
    pub sentence_count: usize,
    /// Number of words detected.
    pub word_count: usize,
    /// Words per sentence.
    pub average_sentence_length: f64,
    /// Number of easy words.
    pub easy_words: usize,
    /// Number of difficult words.
    pub difficult_words: usize,
    /// Difficult words as a percentage of all words.
    pub difficult_word_percentage: f64,
    /// Dale-Chall score.
    pub raw_score: f64,
}

/// The sentences and classified words behind the statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DaleChallData {
    /// Sentences in text order.
    pub sentences: Vec<String>,
    /// Easy words in text order.
    pub easy_words: Vec<String>,
    /// Difficult words in text order.
    pub difficult_words: Vec<String>,
}

/// Result of Dale-Chall analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DaleChallReport {
    /// Counts and derived scores.
    pub stats: DaleChallStats,
    /// Sentences and word lists for inspection.
    pub data: DaleChallData,
}

impl DaleChallReport {
    /// The Dale-Chall score.
    pub const fn score(&self) -> f64 {
        self.stats.raw_score
    }

    /// Grade band for the score.
    pub fn grade_band(&self) -> GradeBand {
        GradeBand::from_score(self.stats.raw_score)
    }
}

/// Dale-Chall score of a text.
///
/// Runs the full pipeline: split, classify, collapse repeated difficult
/// words, aggregate. Fails with [`AnalysisError::EmptyInput`] when the text
/// has no sentences or no words.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn check_readability(text: &str, lexicon: &Lexicon) -> AnalysisResult<DaleChallReport> {
    let doc = Document::new(text);

    let sentence_count = doc.sentence_count();
    let word_count = doc.word_count();
    if sentence_count == 0 || word_count == 0 {
        return Err(AnalysisError::EmptyInput);
    }

    let starts: SentenceStarts<'_> = doc.sentence_first_words().collect();
    let initial = classify::classify_words(doc.words(), lexicon, &starts);
    let flags = repetition::normalize_repetitions(doc.words(), &initial);
    let Partition { easy, difficult } = Partition::from_flags(doc.words(), &flags);

    let average_sentence_length = word_count as f64 / sentence_count as f64;
    let difficult_word_percentage = difficult.len() as f64 / word_count as f64 * 100.0;
    let raw_score = dale_chall_score(average_sentence_length, difficult_word_percentage);

    tracing::debug!(
        sentence_count,
        word_count,
        difficult = difficult.len(),
        raw_score,
        "dale-chall score computed"
    );

    Ok(DaleChallReport {
        stats: DaleChallStats {
            sentence_count,
            word_count,
            average_sentence_length,
            easy_words: easy.len(),
            difficult_words: difficult.len(),
            difficult_word_percentage,
            raw_score,
        },
        data: DaleChallData {
            sentences: doc.sentences().to_vec(),
            easy_words: easy,
            difficult_words: difficult,
        },
    })
}

/// Apply the Dale-Chall formula.
pub fn dale_chall_score(average_sentence_length: f64, difficult_word_percentage: f64) -> f64 {
    SENTENCE_LENGTH_WEIGHT.mul_add(
        average_sentence_length,
        DIFFICULT_WORD_WEIGHT * difficult_word_percentage,
    ) + SCORE_CONSTANT
}

/// Reading level corresponding to a Dale-Chall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum GradeBand {
    /// Below 5.0.
    Grade4AndBelow,
    /// 5.0 to 5.9.
    Grades5To6,
    /// 6.0 to 6.9.
    Grades7To8,
    /// 7.0 to 7.9.
    Grades9To10,
    /// 8.0 to 8.9.
    Grades11To12,
    /// 9.0 to 9.9.
    College,
    /// 10.0 and above.
    CollegeGraduate,
}

impl GradeBand {
    /// Map a score onto the grade chart.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 5.0 => Self::Grade4AndBelow,
            s if s < 6.0 => Self::Grades5To6,
            s if s < 7.0 => Self::Grades7To8,
            s if s < 8.0 => Self::Grades9To10,
            s if s < 9.0 => Self::Grades11To12,
            s if s < 10.0 => Self::College,
            _ => Self::CollegeGraduate,
        }
    }

    /// Human-readable description.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Grade4AndBelow => "grade 4 and below",
            Self::Grades5To6 => "grades 5-6",
            Self::Grades7To8 => "grades 7-8",
            Self::Grades9To10 => "grades 9-10",
            Self::Grades11To12 => "grades 11-12",
            Self::College => "grades 13-15 (college)",
            Self::CollegeGraduate => "grade 16 and above (college graduate)",
        }
    }
}

impl std::fmt::Display for GradeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
