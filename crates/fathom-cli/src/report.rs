//! Plain-text rendering of routing decisions and corpus evaluations.
//!
//! Colors come from `console` and follow its global switch, so rendering into
//! a pipe or with `--no-color` yields plain text.

use crate::evaluation::{CaseResult, Evaluation, Outcome};
use console::style;
use fathom_routing::{FeatureContribution, ModelTier, Router, RoutingResult};
use std::fmt::Write as _;

/// Prompt column width, in characters
pub const PROMPT_WIDTH: usize = 40;
/// Reason column width, in characters
pub const REASON_WIDTH: usize = 80;
const TIER_WIDTH: usize = 8;
const MATCH_WIDTH: usize = 5;
const TABLE_WIDTH: usize = PROMPT_WIDTH + REASON_WIDTH + 2 * TIER_WIDTH + MATCH_WIDTH + 16;

/// What to include in an evaluation report
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Only list cases whose decision did not match the label
    pub failures_only: bool,
}

/// Shorten `text` to at most `width` characters, marking the cut with `...`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }

    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{kept}...")
}

fn cell(text: &str, width: usize) -> String {
    format!("{:<width$}", truncate(text, width))
}

fn paint(tier: ModelTier, text: String) -> String {
    match tier {
        ModelTier::Strong => style(text).green().to_string(),
        ModelTier::Weak => style(text).cyan().to_string(),
    }
}

fn styled_tier(tier: ModelTier) -> String {
    paint(tier, cell(tier.label(), TIER_WIDTH))
}

fn styled_mark(outcome: Outcome) -> String {
    if outcome.is_correct() {
        style(cell("✓", MATCH_WIDTH)).green().to_string()
    } else {
        style(cell("✗", MATCH_WIDTH)).red().to_string()
    }
}

/// One-line decision for a single prompt.
pub fn render_decision(result: &RoutingResult, router: &Router) -> String {
    format!(
        "{} (score {:.3}, threshold {})",
        paint(result.classification, result.classification.to_string()),
        result.score,
        router.threshold()
    )
}

fn feature_line(section: &mut String, name: &str, contribution: FeatureContribution) {
    _ = writeln!(
        section,
        "    - {name}: {:.3} (normalized: {:.3}, weighted: {:.3})",
        contribution.raw, contribution.normalized, contribution.weighted
    );
}

/// Feature-by-feature account of how a score was reached.
pub fn render_breakdown(result: &RoutingResult, router: &Router) -> String {
    let breakdown = router.explain(&result.features);
    let threshold = router.threshold();

    let mut section = String::default();
    _ = writeln!(section, "Characters: {}", result.features.character_count);
    _ = writeln!(
        section,
        "Total Score: {:.3} (Threshold: {threshold})",
        result.score
    );
    _ = writeln!(section);
    _ = writeln!(section, "Score Breakdown:");

    _ = writeln!(section, "  • Structural: {:.3}", breakdown.structural());
    feature_line(&mut section, "Entropy", breakdown.entropy);
    feature_line(&mut section, "Symbol Ratio", breakdown.non_alphanumeric_ratio);
    _ = writeln!(section);

    _ = writeln!(section, "  • Linguistic: {:.3}", breakdown.linguistic());
    feature_line(&mut section, "Word Length", breakdown.word_length);
    feature_line(&mut section, "Sentence Length", breakdown.sentence_length);
    feature_line(&mut section, "Nested Clauses", breakdown.clause_depth);
    _ = writeln!(section);

    _ = writeln!(
        section,
        "  • Complexity Indicators: {:.3}",
        breakdown.indicator()
    );
    feature_line(&mut section, "Cognitive Verbs", breakdown.cognitive_complexity);
    _ = writeln!(section);

    let comparison = if result.classification.is_strong() {
        ">"
    } else {
        "<="
    };
    _ = writeln!(
        section,
        "Decision: {} ({:.3} {comparison} {threshold})",
        result.classification, result.score
    );

    section
}

fn render_row(report: &mut String, case_result: &CaseResult, router: &Router) {
    let case = &case_result.case;
    _ = writeln!(
        report,
        "│ {} │ {} │ {} │ {} │ {} │",
        cell(&case.prompt, PROMPT_WIDTH),
        styled_tier(case.expected_result),
        styled_tier(case_result.result.classification),
        styled_mark(case_result.outcome),
        cell(&case.reason, REASON_WIDTH)
    );

    if case_result.outcome.is_correct() {
        return;
    }

    _ = writeln!(report, "│");
    _ = writeln!(report, "│   Failure Analysis ({:?}):", case_result.outcome);
    for line in render_breakdown(&case_result.result, router).lines() {
        if line.is_empty() {
            _ = writeln!(report, "│");
        } else {
            _ = writeln!(report, "│   {line}");
        }
    }
    _ = writeln!(report, "├{}┤", "─".repeat(TABLE_WIDTH.saturating_sub(2)));
}

/// Full evaluation report: a row per case, failure analysis for every
/// mismatch, and a summary.
pub fn render_evaluation(
    evaluation: &Evaluation,
    router: &Router,
    options: ReportOptions,
) -> String {
    let rule = "─".repeat(TABLE_WIDTH.saturating_sub(2));
    let mut report = String::from("Router Test Results\n\n");

    _ = writeln!(report, "┌{rule}┐");
    _ = writeln!(
        report,
        "│ {} │ {} │ {} │ {} │ {} │",
        cell("PROMPT", PROMPT_WIDTH),
        cell("EXPECTED", TIER_WIDTH),
        cell("ACTUAL", TIER_WIDTH),
        cell("MATCH", MATCH_WIDTH),
        cell("REASON", REASON_WIDTH)
    );
    _ = writeln!(report, "├{rule}┤");

    for case_result in &evaluation.results {
        if options.failures_only && case_result.outcome.is_correct() {
            continue;
        }
        render_row(&mut report, case_result, router);
    }

    let tally = &evaluation.tally;
    _ = writeln!(report, "│");
    _ = writeln!(
        report,
        "│ Summary: {}/{} correct ({:.1}% accuracy)",
        tally.correct,
        tally.total(),
        tally.accuracy()
    );
    _ = writeln!(
        report,
        "│ Over-classified: {} (expected WEAK, routed STRONG)",
        tally.over_classified
    );
    _ = writeln!(
        report,
        "│ Under-classified: {} (expected STRONG, routed WEAK)",
        tally.under_classified
    );
    _ = writeln!(report, "└{rule}┘");

    report
}
