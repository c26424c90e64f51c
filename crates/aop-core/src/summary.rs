//! Read-only plan views
//!
//! - [`PlanSummary`]: headline counts for the dashboard
//! - [`VotingBoard`]: features grouped into review lanes by type

use aop_model::{BusinessUnit, Feature, FeatureType, Status};
use indexmap::IndexMap;
use serde::Serialize;

/// Headline counts over a set of features
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    /// Number of features
    pub total: usize,
    /// Count per status, every status present
    pub by_status: IndexMap<Status, usize>,
    /// Count per business unit, every unit present
    pub by_bu: IndexMap<BusinessUnit, usize>,
    /// Draft, Submitted or Under Review
    pub pending: usize,
    /// Approved
    pub approved: usize,
    /// Hero Big Rocks
    pub hero_big_rocks: usize,
}

impl PlanSummary {
    /// Count the given features
    pub fn from_features<'a>(features: impl IntoIterator<Item = &'a Feature>) -> Self {
        let mut by_status: IndexMap<Status, usize> = Status::ALL.iter().map(|s| (*s, 0)).collect();
        let mut by_bu: IndexMap<BusinessUnit, usize> =
            BusinessUnit::ALL.iter().map(|bu| (*bu, 0)).collect();
        let mut total = 0;
        let mut hero_big_rocks = 0;

        for feature in features {
            total += 1;
            *by_status.entry(feature.status()).or_default() += 1;
            *by_bu.entry(feature.bu()).or_default() += 1;
            if feature.feature_type() == FeatureType::HeroBigRock {
                hero_big_rocks += 1;
            }
        }

        let pending = by_status
            .iter()
            .filter(|(status, _)| status.is_pending())
            .map(|(_, count)| count)
            .sum();
        let approved = by_status.get(&Status::Approved).copied().unwrap_or_default();

        Self {
            total,
            by_status,
            by_bu,
            pending,
            approved,
            hero_big_rocks,
        }
    }

    /// Count for one status
    #[must_use]
    pub fn status_count(&self, status: Status) -> usize {
        self.by_status.get(&status).copied().unwrap_or_default()
    }

    /// Count for one business unit
    #[must_use]
    pub fn bu_count(&self, bu: BusinessUnit) -> usize {
        self.by_bu.get(&bu).copied().unwrap_or_default()
    }
}

/// Features grouped into one lane per feature type
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct VotingBoard<'a> {
    lanes: IndexMap<FeatureType, Vec<&'a Feature>>,
}

impl<'a> VotingBoard<'a> {
    /// Group features, keeping their order inside each lane
    pub fn from_features(features: impl IntoIterator<Item = &'a Feature>) -> Self {
        let mut lanes: IndexMap<FeatureType, Vec<&'a Feature>> =
            FeatureType::ALL.iter().map(|t| (*t, Vec::new())).collect();
        for feature in features {
            lanes.entry(feature.feature_type()).or_default().push(feature);
        }
        Self { lanes }
    }

    /// Features of one type
    #[must_use]
    pub fn lane(&self, feature_type: FeatureType) -> &[&'a Feature] {
        self.lanes.get(&feature_type).map_or(&[], Vec::as_slice)
    }

    /// Lanes in Hero Big Rock, Big Rock, Small Rock order
    pub fn lanes(&self) -> impl Iterator<Item = (FeatureType, &[&'a Feature])> + '_ {
        self.lanes.iter().map(|(t, fs)| (*t, fs.as_slice()))
    }

    /// Number of features on the board
    #[must_use]
    pub fn len(&self) -> usize {
        self.lanes.values().map(Vec::len).sum()
    }

    /// Board is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
