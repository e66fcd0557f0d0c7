use std::sync::LazyLock;

/// Task verbs whose presence signals a reasoning-intensive prompt.
pub const COGNITIVE_VERBS: [&str; 57] = [
    // analysis and reasoning
    "analyze",
    "evaluate",
    "synthesize",
    "examine",
    "investigate",
    "assess",
    "critique",
    "interpret",
    "cause",
    // design and creation
    "design",
    "develop",
    "architect",
    "formulate",
    "devise",
    "construct",
    // explanation and integration
    "explain",
    "integrate",
    "elaborate",
    "demonstrate",
    "illustrate",
    "elucidate",
    "discuss",
    // comparison
    "compare",
    "contrast",
    "differentiate",
    "distinguish",
    // problem solving
    "solve",
    "optimize",
    "resolve",
    "determine",
    // research and theory
    "research",
    "theorize",
    "hypothesize",
    "predict",
    // argument
    "argue",
    "debate",
    "justify",
    "defend",
    "prove",
    // complex creation
    "compose",
    "generate",
    "model",
    // strategy
    "strategize",
    "implement",
    "propose",
    // exploratory thinking
    "explore",
    "brainstorm",
    "conceptualize",
    "envision",
    "imagine",
    "contemplate",
    "ponder",
    "speculate",
    "ideate",
    "discover",
    "innovate",
    "reimagine",
];

/// Inflections that do not follow the `+s` / `+ing` rule.
///
/// Entries without a matching vocabulary verb are harmless.
pub const IRREGULAR_INFLECTIONS: [(&str, [&str; 2]); 14] = [
    ("explore", ["explores", "exploring"]),
    ("cause", ["causes", "causing"]),
    ("create", ["creates", "creating"]),
    ("evaluate", ["evaluates", "evaluating"]),
    ("discuss", ["discusses", "discussing"]),
    ("generate", ["generates", "generating"]),
    ("analyze", ["analyzes", "analyzing"]),
    ("devise", ["devises", "devising"]),
    ("optimize", ["optimizes", "optimizing"]),
    ("integrate", ["integrates", "integrating"]),
    ("compose", ["composes", "composing"]),
    ("investigate", ["investigates", "investigating"]),
    ("formulate", ["formulates", "formulating"]),
    ("innovate", ["innovates", "innovating"]),
];

/// A vocabulary verb together with the inflected forms that count as a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbForms {
    base: &'static str,
    inflections: Vec<String>,
}

impl VerbForms {
    /// Build the forms for `base`, consulting [`IRREGULAR_INFLECTIONS`] first.
    pub fn new(base: &'static str) -> Self {
        let inflections = IRREGULAR_INFLECTIONS
            .iter()
            .find(|(verb, _)| *verb == base)
            .map_or_else(
                || vec![format!("{base}s"), format!("{base}ing")],
                |(_, forms)| forms.iter().map(|form| (*form).to_owned()).collect(),
            );

        Self { base, inflections }
    }

    /// The base form.
    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Inflected forms, excluding the base.
    pub fn inflections(&self) -> &[String] {
        &self.inflections
    }

    /// Whether `lowercase_text` contains the base form or any inflection.
    ///
    /// This is substring containment, not a tokenized match.
    pub fn is_present_in(&self, lowercase_text: &str) -> bool {
        lowercase_text.contains(self.base)
            || self
                .inflections
                .iter()
                .any(|form| lowercase_text.contains(form.as_str()))
    }
}

static VOCABULARY: LazyLock<Vec<VerbForms>> =
    LazyLock::new(|| COGNITIVE_VERBS.iter().copied().map(VerbForms::new).collect());

/// The expanded vocabulary, built once per process.
pub fn vocabulary() -> &'static [VerbForms] {
    &VOCABULARY
}

/// Vocabulary entries present in already-lowercased text.
fn present_in(lowercase_text: &str) -> impl Iterator<Item = &'static VerbForms> + '_ {
    vocabulary()
        .iter()
        .filter(move |verb| verb.is_present_in(lowercase_text))
}

/// Vocabulary verbs present in `text`, in vocabulary order.
pub fn matched_verbs(text: &str) -> Vec<&'static str> {
    present_in(&text.to_lowercase())
        .map(VerbForms::base)
        .collect()
}

/// Number of distinct vocabulary verbs present in `text`.
///
/// Each verb counts once no matter how often it occurs.
pub fn cognitive_complexity(text: &str) -> usize {
    present_in(&text.to_lowercase()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabulary_has_no_duplicates() {
        let unique: HashSet<_> = COGNITIVE_VERBS.iter().collect();
        assert_eq!(unique.len(), COGNITIVE_VERBS.len());
        assert_eq!(vocabulary().len(), COGNITIVE_VERBS.len());
    }

    #[test]
    fn test_regular_inflections() {
        let forms = VerbForms::new("design");
        assert_eq!(forms.inflections(), ["designs", "designing"]);
    }

    #[test]
    fn test_irregular_inflections_override() {
        let forms = VerbForms::new("analyze");
        assert_eq!(forms.inflections(), ["analyzes", "analyzing"]);
        assert!(!forms.inflections().iter().any(|form| form == "analyzeing"));
    }

    #[test]
    fn test_irregular_forms_are_matched() {
        assert_eq!(cognitive_complexity("We are analyzing data"), 1);
        assert_eq!(cognitive_complexity("We keep exploring"), 1);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(cognitive_complexity("ANALYZE this"), 1);
    }

    #[test]
    fn test_counts_distinct_verbs_once() {
        assert_eq!(cognitive_complexity("design, design and redesign"), 1);
        assert_eq!(cognitive_complexity("Design and implement it"), 2);
    }

    #[test]
    fn test_substring_presence_overcounts() {
        assert_eq!(cognitive_complexity("analyzement"), 1);
    }

    #[test]
    fn test_simple_prompt_has_no_verbs() {
        assert_eq!(cognitive_complexity("Write a haiku about spring"), 0);
        assert!(matched_verbs("What's 15 + 27?").is_empty());
    }

    #[test]
    fn test_count_agrees_with_matched_verbs() {
        for text in [
            "",
            "Write a haiku about spring",
            "We are analyzing data",
            "Design, develop and implement; then evaluate and EXPLAIN",
            "analyzement",
        ] {
            assert_eq!(
                cognitive_complexity(text),
                matched_verbs(text).len(),
                "text {text:?}"
            );
        }
    }

    #[test]
    fn test_matched_verbs_in_vocabulary_order() {
        let text = "Analyze the environmental and socioeconomic impacts of transitioning \
                    to renewable energy sources in developing nations";
        assert_eq!(matched_verbs(text), vec!["analyze", "develop"]);
    }
}
