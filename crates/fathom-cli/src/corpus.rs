//! Labelled prompt corpora used to calibrate the router.

use anyhow::{Context as _, Result, bail};
use fathom_routing::ModelTier;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use std::fs::read_to_string;
use std::path::Path;

/// Corpus bundled with the binary.
const BUILTIN_CORPUS: &str = include_str!("../corpus/default.toml");

/// One labelled prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Prompt text
    pub prompt: String,
    /// Tier a human labeller expects
    pub expected_result: ModelTier,
    /// Why the label was chosen
    pub reason: String,
    /// Optional grouping, used for filtering
    pub category: Option<String>,
}

/// Test case entry as written in TOML
#[derive(Debug, Clone, Deserialize)]
struct TestCaseToml {
    prompt: String,
    expected_result: String,
    #[serde(default)]
    reason: String,
    #[serde(default)]
    category: Option<String>,
}

impl<'de> Deserialize<'de> for TestCase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let toml_case = TestCaseToml::deserialize(deserializer)?;
        let expected_result = toml_case
            .expected_result
            .parse()
            .map_err(D::Error::custom)?;

        Ok(Self {
            prompt: toml_case.prompt,
            expected_result,
            reason: toml_case.reason,
            category: toml_case.category,
        })
    }
}

impl TestCase {
    /// Whether `needle` appears in the prompt, category or reason, ignoring case.
    fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.prompt.to_lowercase().contains(&needle)
            || self.reason.to_lowercase().contains(&needle)
            || self
                .category
                .as_ref()
                .is_some_and(|category| category.to_lowercase().contains(&needle))
    }
}

/// Ordered collection of labelled prompts
#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
    /// Cases in file order
    pub cases: Vec<TestCase>,
}

impl Corpus {
    /// The corpus compiled into the binary.
    ///
    /// # Errors
    /// Returns an error if the embedded TOML is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_CORPUS).context("Failed to parse built-in corpus")
    }

    /// Load a corpus from a TOML file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, cannot be parsed, or holds no cases
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = read_to_string(path)
            .with_context(|| format!("Failed to read corpus file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to load corpus: {}", path.display()))
    }

    /// Parse a corpus from TOML text.
    ///
    /// # Errors
    /// Returns error if the TOML cannot be parsed or holds no cases
    pub fn from_toml(content: &str) -> Result<Self> {
        let corpus: Self = toml::from_str(content).context("Failed to parse corpus TOML")?;
        if corpus.cases.is_empty() {
            bail!("Corpus contains no cases");
        }

        tracing::debug!("Loaded corpus with {} cases", corpus.cases.len());
        Ok(corpus)
    }

    /// Keep only cases whose prompt, category or reason contains `needle`.
    #[must_use]
    pub fn filtered(mut self, needle: &str) -> Self {
        self.cases.retain(|case| case.matches(needle));
        self
    }

    /// Number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Whether no cases remain.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
