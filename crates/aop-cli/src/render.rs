//! Text and JSON rendering of planner views

use aop_core::{
    BusinessUnit, Feature, FeatureId, FeatureType, PlanSummary, Planner, Status, VoteTally,
};
use serde::Serialize;
use std::fmt::Write;

/// Output flavour for every command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// One line of a RICE ranking
#[derive(Debug, Clone, Serialize)]
pub struct RankedRow<'a> {
    /// 1-based position
    pub rank: usize,
    /// Feature id
    pub id: FeatureId,
    /// Feature title
    pub title: &'a str,
    /// Owning unit
    pub bu: BusinessUnit,
    /// Feature type
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    /// RICE score
    pub rice_score: f64,
    /// Competitor pressure
    pub competitor_score: u8,
    /// Distinct teams this feature depends on
    pub dependent_teams: Vec<BusinessUnit>,
    /// Number of dependency rows
    pub dependency_count: usize,
    /// Current status
    pub status: Status,
}

impl<'a> RankedRow<'a> {
    /// Rows for features already in rank order
    #[must_use]
    pub fn rank(features: &[&'a Feature]) -> Vec<Self> {
        features
            .iter()
            .enumerate()
            .map(|(i, f)| Self {
                rank: i + 1,
                id: f.id(),
                title: f.title(),
                bu: f.bu(),
                feature_type: f.feature_type(),
                rice_score: f.rice_score(),
                competitor_score: f.competitor_score(),
                dependent_teams: f.dependent_teams(),
                dependency_count: f.dependency_count(),
                status: f.status(),
            })
            .collect()
    }
}

/// Vote standing of one feature
#[derive(Debug, Clone, Serialize)]
pub struct TallyRow<'a> {
    /// Feature id
    pub id: FeatureId,
    /// Feature title
    pub title: &'a str,
    /// Approve count
    pub approve: u32,
    /// Reject count
    pub reject: u32,
    /// Status after replay
    pub status: Status,
}

impl<'a> TallyRow<'a> {
    /// One row per feature, including those without votes
    #[must_use]
    pub fn collect(planner: &'a Planner) -> Vec<Self> {
        planner
            .repository()
            .iter()
            .map(|f| {
                let tally: VoteTally = planner.ballot_box().tally(f.id());
                Self {
                    id: f.id(),
                    title: f.title(),
                    approve: tally.approve,
                    reject: tally.reject,
                    status: f.status(),
                }
            })
            .collect()
    }
}

/// Summary plus ranking, as printed by `demo`
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport<'a> {
    /// Headline counts
    pub summary: PlanSummary,
    /// Top features by RICE
    pub ranking: Vec<RankedRow<'a>>,
}

/// Pretty JSON for any report
///
/// # Errors
/// Serialization failure
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Dashboard-style summary text
#[must_use]
pub fn summary_text(summary: &PlanSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Features: {}", summary.total);
    let _ = writeln!(
        out,
        "Pending Review: {}  Approved: {}  Hero Big Rocks: {}",
        summary.pending, summary.approved, summary.hero_big_rocks
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "By Status:");
    for (status, count) in &summary.by_status {
        let _ = writeln!(out, "  {:<14}{count}", status.label());
    }
    let _ = writeln!(out, "By BU:");
    for (bu, count) in &summary.by_bu {
        let _ = writeln!(out, "  {:<14}{count}", bu.label());
    }
    out
}

/// Ranking table text
#[must_use]
pub fn ranking_text(rows: &[RankedRow<'_>]) -> String {
    if rows.is_empty() {
        return "No features to rank\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<7} {:<36} {:<12} {:>10} {:>5} {:>5}  Status",
        "Rank", "ID", "Title", "BU", "RICE", "Comp", "Deps"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:>4}  {:<7} {:<36} {:<12} {:>10.2} {:>5} {:>5}  {}",
            row.rank,
            row.id.to_string(),
            truncate(row.title, 36),
            row.bu.label(),
            row.rice_score,
            row.competitor_score,
            row.dependency_count,
            row.status
        );
    }
    out
}

/// Vote table text
#[must_use]
pub fn tally_text(rows: &[TallyRow<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<7} {:<36} {:>7} {:>6}  Status",
        "ID", "Title", "Approve", "Reject"
    );
    for row in rows {
        let _ = writeln!(
            out,
            "{:<7} {:<36} {:>7} {:>6}  {}",
            row.id.to_string(),
            truncate(row.title, 36),
            row.approve,
            row.reject,
            row.status
        );
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
