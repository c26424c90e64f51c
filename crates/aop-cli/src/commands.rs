//! Subcommand implementations
//!
//! Each command builds a fresh planner, runs, and returns the text to
//! print. Nothing is written back to disk.

use crate::render::{
    ranking_text, summary_text, tally_text, to_json, OutputFormat, PlanReport, RankedRow,
    TallyRow,
};
use aop_core::{PlanFile, Planner, PlannerConfig, PolicyKind, RiceWeights};
use anyhow::Context;
use std::path::Path;

/// Features shown in rankings
pub const RANKING_LIMIT: usize = 10;

/// Read a JSON plan file
///
/// # Errors
/// Unreadable file or invalid plan JSON
pub fn load_plan(path: &Path) -> anyhow::Result<PlanFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    PlanFile::from_json_str(&content)
        .with_context(|| format!("Failed to parse plan file {}", path.display()))
}

fn planner_with_plan(config: PlannerConfig, plan: &PlanFile) -> anyhow::Result<Planner> {
    let mut planner = Planner::new(config).context("Invalid planner configuration")?;
    planner.import(plan).context("Failed to import plan")?;
    Ok(planner)
}

/// `demo`: load the sample plan, score it, show summary and ranking
///
/// # Errors
/// Invalid configuration or scoring failure
pub fn demo(config: PlannerConfig, format: OutputFormat) -> anyhow::Result<String> {
    let mut planner = Planner::new(config).context("Invalid planner configuration")?;
    planner.load_demo()?;
    planner.score_all().context("Scoring failed")?;

    let ranked = planner.ranked_by_rice(RANKING_LIMIT);
    let report = PlanReport {
        summary: planner.summary(),
        ranking: RankedRow::rank(&ranked),
    };
    match format {
        OutputFormat::Json => Ok(to_json(&report)?),
        OutputFormat::Text => Ok(format!(
            "{}\n{}",
            summary_text(&report.summary),
            ranking_text(&report.ranking)
        )),
    }
}

/// `score`: import drafts, run both scorers, print the ranking
///
/// `weights` overrides the configured RICE weights.
///
/// # Errors
/// Import or scoring failure
pub fn score(
    config: PlannerConfig,
    plan: &PlanFile,
    weights: Option<RiceWeights>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let weights = weights.unwrap_or(config.rice_weights);
    let mut planner = planner_with_plan(config, plan)?;
    planner.run_competitor_analysis();
    planner
        .run_rice_scoring(&weights)
        .with_context(|| format!("RICE scoring failed with weights {weights}"))?;

    let ranked = planner.ranked_by_rice(RANKING_LIMIT);
    let rows = RankedRow::rank(&ranked);
    match format {
        OutputFormat::Json => Ok(to_json(&rows)?),
        OutputFormat::Text => Ok(ranking_text(&rows)),
    }
}

/// `tally`: import drafts, replay ballots, print each feature's standing
///
/// # Errors
/// Import failure or a ballot on a feature the plan does not create
pub fn tally(
    config: PlannerConfig,
    plan: &PlanFile,
    policy: Option<PolicyKind>,
    threshold: Option<u32>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let mut config = config;
    if let Some(policy) = policy {
        config = config.with_vote_policy(policy);
    }
    if let Some(threshold) = threshold {
        config = config.with_threshold(threshold);
    }
    let planner = planner_with_plan(config, plan)?;
    tracing::debug!(
        policy = planner.ballot_box().policy_name(),
        threshold = planner.decision_rule().threshold(),
        "Votes replayed"
    );

    let rows = TallyRow::collect(&planner);
    match format {
        OutputFormat::Json => Ok(to_json(&rows)?),
        OutputFormat::Text => Ok(tally_text(&rows)),
    }
}

/// `summary`: import drafts and votes, print headline counts
///
/// # Errors
/// Import failure
pub fn summary(
    config: PlannerConfig,
    plan: &PlanFile,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let planner = planner_with_plan(config, plan)?;
    let summary = planner.summary();
    match format {
        OutputFormat::Json => Ok(to_json(&summary)?),
        OutputFormat::Text => Ok(summary_text(&summary)),
    }
}
