use regex::Regex;
use std::sync::LazyLock;

/// Subordinating conjunctions that open a dependent clause.
pub const SUBORDINATING_CONJUNCTIONS: [&str; 7] =
    ["that", "which", "where", "when", "because", "if", "unless"];

/// Characters that open a nested group.
pub const OPENING_BRACKETS: [char; 3] = ['(', '[', '{'];

/// Whole-word match of any subordinating conjunction. Case-sensitive.
static CONJUNCTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"\b(?:{})\b", SUBORDINATING_CONJUNCTIONS.join("|"));
    match Regex::new(&pattern) {
        Ok(regex) => regex,
        Err(err) => panic!("Conjunction regex is invalid: {err}"),
    }
});

/// Estimate clause depth as the sum of three independent scans: commas,
/// subordinating conjunctions and opening brackets.
///
/// The scans are additive and may count one construct twice; this is a proxy,
/// not a parser.
pub fn clause_depth(text: &str) -> usize {
    let commas = text.matches(',').count();
    let conjunctions = CONJUNCTION_REGEX.find_iter(text).count();
    let brackets = text.matches(OPENING_BRACKETS).count();

    commas + conjunctions + brackets
}
