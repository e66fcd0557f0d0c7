//! Feature extraction from raw prompt text.
//!
//! Every feature is a cheap linear scan over the text. None of them parse;
//! they are proxies for how much structure and reasoning a prompt carries.

/// Clause-depth estimation
pub mod clauses;
/// Character-level statistics: entropy and symbol ratio
pub mod structure;
/// Cognitive-verb vocabulary and presence counting
pub mod vocabulary;
/// Word and sentence tokenization
pub mod words;

use serde::{Deserialize, Serialize};

pub use clauses::clause_depth;
pub use structure::{character_count, non_alphanumeric_ratio, shannon_entropy};
pub use vocabulary::cognitive_complexity;
pub use words::{average_sentence_length, average_word_length, sentences, words};

/// Structural and linguistic features of one prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureBundle {
    /// Length of the input in characters
    pub character_count: usize,
    /// Shannon entropy of the character distribution, in bits
    pub information_density: f64,
    /// Fraction of characters that are neither ASCII alphanumeric nor whitespace
    pub non_alphanumeric_ratio: f64,
    /// Mean character length of whitespace-delimited tokens
    pub avg_word_length: f64,
    /// Mean token count per sentence
    pub avg_sentence_length: f64,
    /// Commas, subordinating conjunctions and opening brackets
    pub clause_depth: usize,
    /// Distinct cognitive verbs present in the text
    pub cognitive_complexity: usize,
}

impl FeatureBundle {
    /// The all-zero bundle reported for empty prompts.
    pub const EMPTY: Self = Self {
        character_count: 0,
        information_density: 0.0,
        non_alphanumeric_ratio: 0.0,
        avg_word_length: 0.0,
        avg_sentence_length: 0.0,
        clause_depth: 0,
        cognitive_complexity: 0,
    };
}

/// Extracts a [`FeatureBundle`] from prompt text
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    /// Compute all features for `text`.
    ///
    /// Empty input yields [`FeatureBundle::EMPTY`].
    pub fn extract(&self, text: &str) -> FeatureBundle {
        if text.is_empty() {
            return FeatureBundle::EMPTY;
        }

        let tokens = words(text);
        let sentence_count = sentences(text).count();

        FeatureBundle {
            character_count: character_count(text),
            information_density: shannon_entropy(text),
            non_alphanumeric_ratio: non_alphanumeric_ratio(text),
            avg_word_length: average_word_length(&tokens),
            avg_sentence_length: average_sentence_length(tokens.len(), sentence_count),
            clause_depth: clause_depth(text),
            cognitive_complexity: cognitive_complexity(text),
        }
    }
}
