//! Calibration constants and the configuration that carries them.
//!
//! The canonical weights, ceilings and threshold are exposed as named constants.
//! [`RouterConfig::default`] is built from them; a TOML file may override any
//! subset for calibration runs.

use crate::error::{Result, RoutingError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Score above which a prompt is routed to the strong tier.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Entropy ceiling, in bits.
pub const ENTROPY_CEILING: f64 = 4.5;
/// Non-alphanumeric ratio ceiling.
pub const NON_ALPHANUMERIC_CEILING: f64 = 0.3;
/// Average word length ceiling, in characters.
pub const WORD_LENGTH_CEILING: f64 = 8.0;
/// Average sentence length ceiling, in words.
pub const SENTENCE_LENGTH_CEILING: f64 = 20.0;
/// Clause depth ceiling.
pub const CLAUSE_DEPTH_CEILING: f64 = 10.0;
/// Cognitive complexity ceiling, in distinct verbs.
pub const COGNITIVE_CEILING: f64 = 2.0;

/// Weight of the entropy term.
pub const ENTROPY_WEIGHT: f64 = 0.05;
/// Weight of the non-alphanumeric ratio term.
pub const NON_ALPHANUMERIC_WEIGHT: f64 = 0.10;
/// Weight of the average word length term.
pub const WORD_LENGTH_WEIGHT: f64 = 0.30;
/// Weight of the average sentence length term.
pub const SENTENCE_LENGTH_WEIGHT: f64 = 0.30;
/// Weight of the clause depth term.
pub const CLAUSE_DEPTH_WEIGHT: f64 = 0.12;
/// Weight of the cognitive complexity term.
pub const COGNITIVE_WEIGHT: f64 = 0.40;

/// Per-feature weights applied after normalization.
///
/// The weights sum to more than 1.0; the score is a heuristic signal and only
/// its position relative to the threshold matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Weight of the entropy term
    pub entropy: f64,
    /// Weight of the non-alphanumeric ratio term
    pub non_alphanumeric_ratio: f64,
    /// Weight of the average word length term
    pub word_length: f64,
    /// Weight of the average sentence length term
    pub sentence_length: f64,
    /// Weight of the clause depth term
    pub clause_depth: f64,
    /// Weight of the cognitive complexity term
    pub cognitive_complexity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            entropy: ENTROPY_WEIGHT,
            non_alphanumeric_ratio: NON_ALPHANUMERIC_WEIGHT,
            word_length: WORD_LENGTH_WEIGHT,
            sentence_length: SENTENCE_LENGTH_WEIGHT,
            clause_depth: CLAUSE_DEPTH_WEIGHT,
            cognitive_complexity: COGNITIVE_WEIGHT,
        }
    }
}

impl ScoringWeights {
    /// Sum of all weights, the largest score a bundle can reach.
    pub fn sum(&self) -> f64 {
        self.entropy
            + self.non_alphanumeric_ratio
            + self.word_length
            + self.sentence_length
            + self.clause_depth
            + self.cognitive_complexity
    }

    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("entropy", self.entropy),
            ("non_alphanumeric_ratio", self.non_alphanumeric_ratio),
            ("word_length", self.word_length),
            ("sentence_length", self.sentence_length),
            ("clause_depth", self.clause_depth),
            ("cognitive_complexity", self.cognitive_complexity),
        ]
    }
}

/// Per-feature normalization denominators.
///
/// A raw feature is divided by its ceiling and clamped to at most 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationCeilings {
    /// Entropy ceiling in bits
    pub entropy: f64,
    /// Non-alphanumeric ratio ceiling
    pub non_alphanumeric_ratio: f64,
    /// Average word length ceiling
    pub word_length: f64,
    /// Average sentence length ceiling
    pub sentence_length: f64,
    /// Clause depth ceiling
    pub clause_depth: f64,
    /// Cognitive complexity ceiling
    pub cognitive_complexity: f64,
}

impl Default for NormalizationCeilings {
    fn default() -> Self {
        Self {
            entropy: ENTROPY_CEILING,
            non_alphanumeric_ratio: NON_ALPHANUMERIC_CEILING,
            word_length: WORD_LENGTH_CEILING,
            sentence_length: SENTENCE_LENGTH_CEILING,
            clause_depth: CLAUSE_DEPTH_CEILING,
            cognitive_complexity: COGNITIVE_CEILING,
        }
    }
}

impl NormalizationCeilings {
    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("entropy", self.entropy),
            ("non_alphanumeric_ratio", self.non_alphanumeric_ratio),
            ("word_length", self.word_length),
            ("sentence_length", self.sentence_length),
            ("clause_depth", self.clause_depth),
            ("cognitive_complexity", self.cognitive_complexity),
        ]
    }
}

/// Complete router configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Scores strictly above this route to the strong tier
    pub threshold: f64,
    /// Feature weights
    pub weights: ScoringWeights,
    /// Normalization ceilings
    pub ceilings: NormalizationCeilings,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            weights: ScoringWeights::default(),
            ceilings: NormalizationCeilings::default(),
        }
    }
}

impl RouterConfig {
    /// Load config from a TOML file and validate it.
    ///
    /// Missing tables or keys fall back to the canonical constants.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML, or holds
    /// out-of-range values.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;

        tracing::debug!(
            "Loaded router config from {}: threshold={}, weight sum={:.3}",
            path.display(),
            config.threshold,
            config.weights.sum()
        );

        Ok(config)
    }

    /// Parse and validate config from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the string is not valid TOML or holds out-of-range values.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize config to a TOML string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|error| RoutingError::InvalidConfig(format!("Failed to serialize: {error}")))
    }

    /// Check that every weight is finite and non-negative, every ceiling is
    /// finite and positive, and the threshold is finite.
    ///
    /// # Errors
    /// Returns [`RoutingError::InvalidConfig`] naming the first offending value.
    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.weights.named() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(RoutingError::InvalidConfig(format!(
                    "weight `{name}` must be finite and non-negative, got {weight}"
                )));
            }
        }

        for (name, ceiling) in self.ceilings.named() {
            if !ceiling.is_finite() || ceiling <= 0.0 {
                return Err(RoutingError::InvalidConfig(format!(
                    "ceiling `{name}` must be finite and positive, got {ceiling}"
                )));
            }
        }

        if !self.threshold.is_finite() {
            return Err(RoutingError::InvalidConfig(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }

        Ok(())
    }
}
