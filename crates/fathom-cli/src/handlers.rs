//! Command handlers for CLI operations

use anyhow::{Context as _, Result, bail};
use console::Term;
use fathom_cli::{
    Corpus, ReportOptions, evaluate, render_breakdown, render_decision, render_evaluation,
};
use fathom_routing::analyzer::vocabulary::matched_verbs;
use fathom_routing::{Router, RouterConfig, RoutingResult, ScoreBreakdown};
use serde::Serialize;
use std::path::Path;

/// JSON shape printed by `route --json`
#[derive(Serialize)]
struct RouteOutput<'prompt> {
    prompt: &'prompt str,
    #[serde(flatten)]
    result: RoutingResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<ScoreBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_verbs: Option<Vec<&'static str>>,
}

/// Build the router, applying a config file when one is given
///
/// # Errors
/// Returns an error if the config file cannot be read or is invalid
pub fn load_router(config_path: Option<&Path>) -> Result<Router> {
    let Some(path) = config_path else {
        return Ok(Router::new());
    };

    let config = RouterConfig::load_from_file(path)
        .with_context(|| format!("Failed to load router config: {}", path.display()))?;
    tracing::info!(
        "Using router config from {} (threshold {})",
        path.display(),
        config.threshold
    );
    Ok(Router::with_config(config))
}

/// Route one prompt and print the decision
///
/// # Errors
/// Returns an error if output cannot be written
pub fn handle_route(
    term: &Term,
    router: &Router,
    prompt: &[String],
    json: bool,
    explain: bool,
) -> Result<()> {
    let prompt = prompt.join(" ");
    let result = router.route(&prompt);

    if json {
        let output = RouteOutput {
            prompt: &prompt,
            result,
            breakdown: explain.then(|| router.explain(&result.features)),
            matched_verbs: explain.then(|| matched_verbs(&prompt)),
        };
        term.write_line(&serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    term.write_line(&render_decision(&result, router))?;
    if explain {
        term.write_line("")?;
        term.write_str(&render_breakdown(&result, router))?;

        let verbs = matched_verbs(&prompt);
        if !verbs.is_empty() {
            term.write_line(&format!("Cognitive verbs: {}", verbs.join(", ")))?;
        }
    }

    Ok(())
}

/// Evaluate the router on a corpus and print the report
///
/// # Errors
/// Returns an error if the corpus cannot be loaded, the filter matches nothing,
/// or output cannot be written
pub fn handle_evaluate(
    term: &Term,
    router: &Router,
    corpus_path: Option<&Path>,
    filter: Option<&str>,
    failures_only: bool,
) -> Result<()> {
    let mut corpus = match corpus_path {
        Some(path) => Corpus::from_file(path)?,
        None => Corpus::builtin()?,
    };

    if let Some(needle) = filter {
        corpus = corpus.filtered(needle);
        if corpus.is_empty() {
            bail!("No corpus cases match filter `{needle}`");
        }
    }

    let evaluation = evaluate(router, &corpus);
    let report = render_evaluation(&evaluation, router, ReportOptions { failures_only });
    term.write_str(&report)?;

    Ok(())
}
