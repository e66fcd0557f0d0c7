//! Strong/weak routing over the complexity score.

/// Model tier enumeration
pub mod tiers;

use crate::analyzer::{FeatureBundle, FeatureExtractor};
use crate::config::RouterConfig;
use crate::scorer::{ComplexityScorer, ScoreBreakdown};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub use tiers::{ModelTier, ParseTierError};

/// Outcome of routing one prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingResult {
    /// Tier the prompt is routed to
    pub classification: ModelTier,
    /// Complexity score the decision was made on
    pub score: f64,
    /// Features the score was computed from
    pub features: FeatureBundle,
}

impl RoutingResult {
    /// Result reported for empty or whitespace-only prompts.
    pub const EMPTY: Self = Self {
        classification: ModelTier::Weak,
        score: 0.0,
        features: FeatureBundle::EMPTY,
    };
}

/// Routes prompts to a model tier by estimated complexity.
///
/// Routing is a pure function of the prompt and the configuration, so one
/// router can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Router {
    extractor: FeatureExtractor,
    scorer: ComplexityScorer,
    threshold: f64,
}

impl Router {
    /// Creates a router with the canonical weights, ceilings and threshold.
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    /// Creates a router from an explicit configuration.
    ///
    /// The configuration is expected to have passed [`RouterConfig::validate`].
    /// An unvalidated zero ceiling still gives an absent feature no weight.
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            extractor: FeatureExtractor,
            scorer: ComplexityScorer::new(config.weights, config.ceilings),
            threshold: config.threshold,
        }
    }

    /// Score threshold; scores strictly above it route strong.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Route a prompt.
    ///
    /// Empty or whitespace-only prompts route weak with a zero score and never
    /// reach feature extraction. Every other input is extracted, scored and
    /// classified; this never fails.
    pub fn route(&self, prompt: &str) -> RoutingResult {
        if prompt.trim().is_empty() {
            tracing::debug!("Empty prompt routed to {}", ModelTier::Weak);
            return RoutingResult::EMPTY;
        }

        let features = self.extractor.extract(prompt);
        tracing::trace!(?features, "Extracted prompt features");

        let score = self.score(&features);
        let classification = self.classify(score);

        tracing::debug!(
            "Routing decision: {} | Score: {:.3} | Threshold: {}",
            classification,
            score,
            self.threshold
        );

        RoutingResult {
            classification,
            score,
            features,
        }
    }

    /// Complexity score for an already-extracted bundle.
    pub fn score(&self, features: &FeatureBundle) -> f64 {
        self.scorer.score(features)
    }

    /// Per-feature contributions for an already-extracted bundle.
    pub fn explain(&self, features: &FeatureBundle) -> ScoreBreakdown {
        self.scorer.breakdown(features)
    }

    /// Classify a score. The boundary is exclusive: a score equal to the
    /// threshold routes weak.
    pub fn classify(&self, score: f64) -> ModelTier {
        if score > self.threshold {
            ModelTier::Strong
        } else {
            ModelTier::Weak
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_ROUTER: LazyLock<Router> = LazyLock::new(Router::new);

/// Route a prompt with the canonical configuration.
pub fn route(prompt: &str) -> RoutingResult {
    DEFAULT_ROUTER.route(prompt)
}
