//! Run a router over a corpus and tally how its decisions compare to the labels.

use crate::corpus::{Corpus, TestCase};
use fathom_routing::{ModelTier, Router, RoutingResult};

/// How a routing decision compares to its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Decision matches the label
    Correct,
    /// Labelled weak, routed strong
    OverClassified,
    /// Labelled strong, routed weak
    UnderClassified,
}

impl Outcome {
    /// Compare an expected tier with the routed one.
    pub const fn of(expected: ModelTier, actual: ModelTier) -> Self {
        match (expected, actual) {
            (ModelTier::Weak, ModelTier::Strong) => Self::OverClassified,
            (ModelTier::Strong, ModelTier::Weak) => Self::UnderClassified,
            _ => Self::Correct,
        }
    }

    /// Whether the decision matched.
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// A case together with what the router made of it
#[derive(Debug, Clone)]
pub struct CaseResult {
    /// The labelled case
    pub case: TestCase,
    /// Routing decision for its prompt
    pub result: RoutingResult,
    /// Decision compared to the label
    pub outcome: Outcome,
}

/// Counts per outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Matching decisions
    pub correct: usize,
    /// Weak prompts routed strong
    pub over_classified: usize,
    /// Strong prompts routed weak
    pub under_classified: usize,
}

impl Tally {
    /// Count one outcome.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::OverClassified => self.over_classified += 1,
            Outcome::UnderClassified => self.under_classified += 1,
        }
    }

    /// Number of cases counted.
    pub const fn total(&self) -> usize {
        self.correct + self.over_classified + self.under_classified
    }

    /// Share of correct decisions as a percentage; zero when nothing was counted.
    pub fn accuracy(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total() as f64 * 100.0
    }
}

/// Per-case results in corpus order plus their tally
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    /// One entry per corpus case
    pub results: Vec<CaseResult>,
    /// Outcome counts
    pub tally: Tally,
}

impl Evaluation {
    /// Results whose decision did not match the label.
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results
            .iter()
            .filter(|case_result| !case_result.outcome.is_correct())
    }
}

/// Route every case in `corpus` and compare against its label.
pub fn evaluate(router: &Router, corpus: &Corpus) -> Evaluation {
    let mut evaluation = Evaluation::default();

    for case in &corpus.cases {
        let result = router.route(&case.prompt);
        let outcome = Outcome::of(case.expected_result, result.classification);
        if !outcome.is_correct() {
            tracing::debug!(
                "Mismatch ({outcome:?}): score {:.3} for {:?}",
                result.score,
                case.prompt
            );
        }

        evaluation.tally.record(outcome);
        evaluation.results.push(CaseResult {
            case: case.clone(),
            result,
            outcome,
        });
    }

    tracing::info!(
        "Evaluated {} cases: {} correct, {} over-classified, {} under-classified",
        evaluation.tally.total(),
        evaluation.tally.correct,
        evaluation.tally.over_classified,
        evaluation.tally.under_classified
    );

    evaluation
}

#[cfg(test)]
#[allow(clippy::float_cmp, reason = "Exact values are representable")]
mod tests {
    use super::*;
    use fathom_routing::RouterConfig;

    #[test]
    fn test_outcome_of() {
        assert_eq!(
            Outcome::of(ModelTier::Weak, ModelTier::Weak),
            Outcome::Correct
        );
        assert_eq!(
            Outcome::of(ModelTier::Strong, ModelTier::Strong),
            Outcome::Correct
        );
        assert_eq!(
            Outcome::of(ModelTier::Weak, ModelTier::Strong),
            Outcome::OverClassified
        );
        assert_eq!(
            Outcome::of(ModelTier::Strong, ModelTier::Weak),
            Outcome::UnderClassified
        );
    }

    #[test]
    fn test_tally_accuracy() {
        let mut tally = Tally::default();
        assert_eq!(tally.accuracy(), 0.0);

        tally.record(Outcome::Correct);
        tally.record(Outcome::Correct);
        tally.record(Outcome::Correct);
        tally.record(Outcome::UnderClassified);
        assert_eq!(tally.total(), 4);
        assert_eq!(tally.accuracy(), 75.0);
    }

    #[test]
    fn test_builtin_corpus_calibration() {
        let corpus = Corpus::builtin().unwrap();
        let evaluation = evaluate(&Router::new(), &corpus);

        assert_eq!(evaluation.results.len(), 61);
        assert_eq!(evaluation.tally.correct, 60);
        assert_eq!(evaluation.tally.over_classified, 1);
        assert_eq!(evaluation.tally.under_classified, 0);

        let failures: Vec<_> = evaluation.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].case.prompt,
            "Implement a basic todo list in React"
        );
    }

    #[test]
    fn test_results_keep_corpus_order() {
        let corpus = Corpus::builtin().unwrap();
        let evaluation = evaluate(&Router::new(), &corpus);
        for (case, case_result) in corpus.cases.iter().zip(&evaluation.results) {
            assert_eq!(case, &case_result.case);
        }
    }

    #[test]
    fn test_unreachable_threshold_routes_everything_weak() {
        let corpus = Corpus::builtin().unwrap();
        let router = Router::with_config(RouterConfig {
            threshold: 10.0,
            ..RouterConfig::default()
        });
        let evaluation = evaluate(&router, &corpus);

        assert_eq!(evaluation.tally.over_classified, 0);
        assert!(
            evaluation
                .results
                .iter()
                .all(|case_result| case_result.result.classification == ModelTier::Weak)
        );
    }
}
