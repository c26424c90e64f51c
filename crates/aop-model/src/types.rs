//! Core planning enumerations and feature identity
//!
//! Every enumeration serializes with the label shown to planners
//! (`"AI BU"`, `"Under Review"`, `"Hero Big Rock"`) and parses back from it.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business unit owning a feature or a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BusinessUnit {
    /// AI business unit
    #[serde(rename = "AI BU")]
    Ai,
    /// Customer experience
    #[serde(rename = "CX BU")]
    Cx,
    /// Employee experience
    #[serde(rename = "EX BU")]
    Ex,
    /// Customer engagement
    #[serde(rename = "CE BU")]
    Ce,
    /// Shared platform
    #[serde(rename = "Platform BU")]
    Platform,
}

impl BusinessUnit {
    /// All business units in display order
    pub const ALL: [BusinessUnit; 5] = [
        BusinessUnit::Ai,
        BusinessUnit::Cx,
        BusinessUnit::Ex,
        BusinessUnit::Ce,
        BusinessUnit::Platform,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BusinessUnit::Ai => "AI BU",
            BusinessUnit::Cx => "CX BU",
            BusinessUnit::Ex => "EX BU",
            BusinessUnit::Ce => "CE BU",
            BusinessUnit::Platform => "Platform BU",
        }
    }

    /// Role label of this unit's PM head, the conventional voter identity
    #[inline]
    #[must_use]
    pub fn pm_head(self) -> String {
        format!("{} PM Head", self.label())
    }
}

impl fmt::Display for BusinessUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BusinessUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|bu| bu.label() == s)
            .ok_or_else(|| ValidationError::unknown("business unit", s))
    }
}

/// Feature lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Freshly submitted, not yet proposed for review
    #[default]
    Draft,
    /// Proposed for the planning cycle
    Submitted,
    /// Votes cast, threshold not yet reached
    #[serde(rename = "Under Review")]
    UnderReview,
    /// Accepted by vote
    Approved,
    /// Declined by vote
    Rejected,
}

impl Status {
    /// All statuses in lifecycle order
    pub const ALL: [Status; 5] = [
        Status::Draft,
        Status::Submitted,
        Status::UnderReview,
        Status::Approved,
        Status::Rejected,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Status::Draft => "Draft",
            Status::Submitted => "Submitted",
            Status::UnderReview => "Under Review",
            Status::Approved => "Approved",
            Status::Rejected => "Rejected",
        }
    }

    /// Still awaiting a decision
    #[inline]
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Status::Draft | Status::Submitted | Status::UnderReview)
    }

    /// Decided by vote
    #[inline]
    #[must_use]
    pub fn is_decided(self) -> bool {
        matches!(self, Status::Approved | Status::Rejected)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label() == s)
            .ok_or_else(|| ValidationError::unknown("status", s))
    }
}

/// Size class of a feature in the plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum FeatureType {
    /// Flagship initiative
    #[default]
    #[serde(rename = "Hero Big Rock")]
    HeroBigRock,
    /// Major initiative
    #[serde(rename = "Big Rock")]
    BigRock,
    /// Incremental item
    #[serde(rename = "Small Rock")]
    SmallRock,
}

impl FeatureType {
    /// All feature types, largest first
    pub const ALL: [FeatureType; 3] = [
        FeatureType::HeroBigRock,
        FeatureType::BigRock,
        FeatureType::SmallRock,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FeatureType::HeroBigRock => "Hero Big Rock",
            FeatureType::BigRock => "Big Rock",
            FeatureType::SmallRock => "Small Rock",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FeatureType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| ValidationError::unknown("feature type", s))
    }
}

/// T-shirt effort estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Effort {
    /// Extra small
    XS,
    /// Small
    S,
    /// Medium
    #[default]
    M,
    /// Large
    L,
    /// Extra large
    XL,
}

impl Effort {
    /// All effort levels, smallest first
    pub const ALL: [Effort; 5] = [Effort::XS, Effort::S, Effort::M, Effort::L, Effort::XL];

    /// Effort points used as the RICE divisor (Fibonacci-like scale)
    #[inline]
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            Effort::XS => 1,
            Effort::S => 2,
            Effort::M => 3,
            Effort::L => 5,
            Effort::XL => 8,
        }
    }

    /// Display label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Effort::XS => "XS",
            Effort::S => "S",
            Effort::M => "M",
            Effort::L => "L",
            Effort::XL => "XL",
        }
    }
}

impl fmt::Display for Effort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Effort {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.label() == s)
            .ok_or_else(|| ValidationError::unknown("effort", s))
    }
}

/// Feature identifier: `F-` followed by a zero-padded sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FeatureId(u32);

impl FeatureId {
    /// Identifier for a sequence number
    #[inline]
    #[must_use]
    pub fn from_sequence(seq: u32) -> Self {
        Self(seq)
    }

    /// Underlying sequence number
    #[inline]
    #[must_use]
    pub fn sequence(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F-{:04}", self.0)
    }
}

impl FromStr for FeatureId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .strip_prefix("F-")
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u32>().ok())
            .map(FeatureId)
            .ok_or_else(|| ValidationError::unknown("feature id", s))
    }
}

impl TryFrom<String> for FeatureId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FeatureId> for String {
    fn from(id: FeatureId) -> Self {
        id.to_string()
    }
}
