//! Testing utilities for the AOP planner workspace
//!
//! Shared fixtures: sample drafts and ready-made planners.

#![allow(missing_docs)]

use aop_core::{init_test_logging, Planner, PlannerConfig};
use aop_model::{BusinessUnit, Effort, FeatureDraft, FeatureId, FeatureType, Half, Quarter};

/// Target year used by fixtures
pub const TEST_YEAR: u16 = 2027;

pub const PM_HEADS: [&str; 5] = [
    "AI BU PM Head",
    "CX BU PM Head",
    "EX BU PM Head",
    "CE BU PM Head",
    "Platform BU PM Head",
];

pub fn sample_draft(title: &str) -> FeatureDraft {
    FeatureDraft::new(
        title,
        format!("{title} for the annual plan"),
        BusinessUnit::Cx,
        TEST_YEAR,
        Half::H1,
        Quarter::Q2,
    )
}

pub fn sample_draft_with(
    title: &str,
    bu: BusinessUnit,
    impact: u8,
    effort: Effort,
) -> FeatureDraft {
    sample_draft(title)
        .with_impact(impact)
        .with_effort(effort)
        .with_type(FeatureType::BigRock)
        .depends_on(bu, "Shared data", "Access to the team's data feed")
        .depends_on(BusinessUnit::Platform, "Hosting", "Capacity for the service")
}

/// Default planner, with test logging installed
pub fn setup_test_planner() -> Planner {
    init_test_logging();
    Planner::default()
}

pub fn setup_planner_with(config: PlannerConfig) -> Planner {
    init_test_logging();
    Planner::new(config).unwrap()
}

/// Planner holding the given titles as fresh drafts, ids `F-0001` onwards
pub fn planner_with_features(titles: &[&str]) -> (Planner, Vec<FeatureId>) {
    let mut planner = setup_test_planner();
    let ids = titles
        .iter()
        .map(|t| planner.create(&sample_draft(t)).unwrap().id())
        .collect();
    (planner, ids)
}
