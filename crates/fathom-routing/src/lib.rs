//! Prompt complexity estimation and strong/weak model routing.
//!
//! A prompt is reduced to a [`FeatureBundle`] of cheap structural and
//! linguistic signals, each feature is normalized against a ceiling and
//! weighted, and the resulting score is compared to a threshold.
//!
//! ```
//! use fathom_routing::{ModelTier, route};
//!
//! let result = route("What's 15 + 27?");
//! assert_eq!(result.classification, ModelTier::Weak);
//! ```
#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::missing_panics_doc,
        reason = "Allow for tests"
    )
)]

/// Feature extraction from prompt text.
pub mod analyzer;
/// Weights, ceilings and threshold.
pub mod config;
/// Error types and result definitions.
pub mod error;
/// Prompt routing.
pub mod router;
/// Score computation.
pub mod scorer;

pub use analyzer::{FeatureBundle, FeatureExtractor};
pub use config::{NormalizationCeilings, RouterConfig, ScoringWeights};
pub use error::{Result, RoutingError};
pub use router::{ModelTier, ParseTierError, Router, RoutingResult, route};
pub use scorer::{ComplexityScorer, FeatureContribution, ScoreBreakdown};
