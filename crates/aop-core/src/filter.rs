//! Equality filters for listing features

use aop_model::{BusinessUnit, Feature, FeatureType, Status};
use serde::{Deserialize, Serialize};

/// AND-combined optional filters; an unset field matches everything
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFilter {
    /// Owning business unit
    pub bu: Option<BusinessUnit>,
    /// Current status
    pub status: Option<Status>,
    /// Target year
    pub year: Option<u16>,
    /// Feature type
    #[serde(rename = "type")]
    pub feature_type: Option<FeatureType>,
}

impl FeatureFilter {
    /// Filter matching every feature
    #[inline]
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Only this business unit
    #[inline]
    #[must_use]
    pub fn with_bu(mut self, bu: BusinessUnit) -> Self {
        self.bu = Some(bu);
        self
    }

    /// Only this status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Only this target year
    #[inline]
    #[must_use]
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }

    /// Only this feature type
    #[inline]
    #[must_use]
    pub fn with_type(mut self, feature_type: FeatureType) -> Self {
        self.feature_type = Some(feature_type);
        self
    }

    /// Check one feature
    #[must_use]
    pub fn matches(&self, feature: &Feature) -> bool {
        self.bu.map_or(true, |bu| feature.bu() == bu)
            && self.status.map_or(true, |s| feature.status() == s)
            && self.year.map_or(true, |y| feature.year() == y)
            && self.feature_type.map_or(true, |t| feature.feature_type() == t)
    }
}
