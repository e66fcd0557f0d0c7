//! Calibration harness for the complexity router.
//!
//! Loads labelled prompt corpora, runs a [`fathom_routing::Router`] over them
//! and renders the outcome.
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

/// Labelled prompt corpora
pub mod corpus;
/// Corpus evaluation and outcome tallies
pub mod evaluation;
/// Text rendering of decisions and evaluations
pub mod report;

pub use corpus::{Corpus, TestCase};
pub use evaluation::{CaseResult, Evaluation, Outcome, Tally, evaluate};
pub use report::{ReportOptions, render_breakdown, render_decision, render_evaluation};
