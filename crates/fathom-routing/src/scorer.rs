//! Normalization and weighting of feature bundles into a complexity score.

use crate::analyzer::FeatureBundle;
use crate::config::{NormalizationCeilings, ScoringWeights};
use serde::{Deserialize, Serialize};

/// Divide `value` by `ceiling` and clamp the result to at most 1.0.
///
/// Values are never clamped from below; every feature is non-negative. An
/// undefined quotient (a zero feature over a zero ceiling) normalizes to 0 so
/// an absent feature never earns weight.
pub fn normalize(value: f64, ceiling: f64) -> f64 {
    let ratio = value / ceiling;
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.min(1.0)
}

/// One feature's share of the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    /// Raw feature value
    pub raw: f64,
    /// Value after normalization against its ceiling
    pub normalized: f64,
    /// Normalized value multiplied by the feature weight
    pub weighted: f64,
}

impl FeatureContribution {
    fn new(raw: f64, ceiling: f64, weight: f64) -> Self {
        let normalized = normalize(raw, ceiling);
        Self {
            raw,
            normalized,
            weighted: normalized * weight,
        }
    }
}

/// Per-feature contributions that sum to the complexity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Character entropy
    pub entropy: FeatureContribution,
    /// Non-alphanumeric ratio
    pub non_alphanumeric_ratio: FeatureContribution,
    /// Average word length
    pub word_length: FeatureContribution,
    /// Average sentence length
    pub sentence_length: FeatureContribution,
    /// Clause depth
    pub clause_depth: FeatureContribution,
    /// Cognitive complexity
    pub cognitive_complexity: FeatureContribution,
}

impl ScoreBreakdown {
    /// Structural share: entropy and symbol ratio.
    pub fn structural(&self) -> f64 {
        self.entropy.weighted + self.non_alphanumeric_ratio.weighted
    }

    /// Linguistic share: word length, sentence length and clause depth.
    pub fn linguistic(&self) -> f64 {
        self.word_length.weighted + self.sentence_length.weighted + self.clause_depth.weighted
    }

    /// Cognitive-verb share.
    pub fn indicator(&self) -> f64 {
        self.cognitive_complexity.weighted
    }

    /// The complexity score.
    pub fn total(&self) -> f64 {
        self.entropy.weighted
            + self.non_alphanumeric_ratio.weighted
            + self.word_length.weighted
            + self.sentence_length.weighted
            + self.clause_depth.weighted
            + self.cognitive_complexity.weighted
    }
}

/// Combines normalized features with fixed weights
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComplexityScorer {
    weights: ScoringWeights,
    ceilings: NormalizationCeilings,
}

impl ComplexityScorer {
    /// Create a scorer from explicit weights and ceilings.
    pub const fn new(weights: ScoringWeights, ceilings: NormalizationCeilings) -> Self {
        Self { weights, ceilings }
    }

    /// Per-feature contributions for `features`.
    pub fn breakdown(&self, features: &FeatureBundle) -> ScoreBreakdown {
        let weights = &self.weights;
        let ceilings = &self.ceilings;

        ScoreBreakdown {
            entropy: FeatureContribution::new(
                features.information_density,
                ceilings.entropy,
                weights.entropy,
            ),
            non_alphanumeric_ratio: FeatureContribution::new(
                features.non_alphanumeric_ratio,
                ceilings.non_alphanumeric_ratio,
                weights.non_alphanumeric_ratio,
            ),
            word_length: FeatureContribution::new(
                features.avg_word_length,
                ceilings.word_length,
                weights.word_length,
            ),
            sentence_length: FeatureContribution::new(
                features.avg_sentence_length,
                ceilings.sentence_length,
                weights.sentence_length,
            ),
            clause_depth: FeatureContribution::new(
                features.clause_depth as f64,
                ceilings.clause_depth,
                weights.clause_depth,
            ),
            cognitive_complexity: FeatureContribution::new(
                features.cognitive_complexity as f64,
                ceilings.cognitive_complexity,
                weights.cognitive_complexity,
            ),
        }
    }

    /// Complexity score for `features`.
    pub fn score(&self, features: &FeatureBundle) -> f64 {
        self.breakdown(features).total()
    }
}
