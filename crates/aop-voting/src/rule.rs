//! Status derivation from a vote tally
//!
//! With `a` approvals, `r` rejections and `t = a + r`:
//! - `t >= threshold` decides: Approved if `a > r`, otherwise Rejected
//! - `0 < t < threshold` puts the feature Under Review
//! - `t == 0` leaves the status alone
//!
//! The rule only reads the tally, so re-deriving from the same tally always
//! yields the same status.

use crate::tally::VoteTally;
use aop_model::{Status, ValidationError};
use serde::{Deserialize, Serialize};

/// Votes needed before a feature is decided
pub const DEFAULT_DECISION_THRESHOLD: u32 = 3;

/// Threshold decision rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DecisionRule {
    threshold: u32,
}

impl DecisionRule {
    /// Rule deciding at `threshold` votes
    ///
    /// # Errors
    /// `ValidationError::ZeroThreshold` for a threshold of zero
    pub fn new(threshold: u32) -> Result<Self, ValidationError> {
        if threshold == 0 {
            return Err(ValidationError::ZeroThreshold);
        }
        Ok(Self { threshold })
    }

    /// Votes needed to decide
    #[inline]
    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Status implied by `tally`, falling back to `current` when no votes exist
    #[must_use]
    pub fn derive(&self, tally: VoteTally, current: Status) -> Status {
        let total = tally.total();
        if total >= self.threshold {
            if tally.approve > tally.reject {
                Status::Approved
            } else {
                Status::Rejected
            }
        } else if total > 0 {
            Status::UnderReview
        } else {
            current
        }
    }
}

impl Default for DecisionRule {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_DECISION_THRESHOLD,
        }
    }
}

impl TryFrom<u32> for DecisionRule {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DecisionRule> for u32 {
    fn from(rule: DecisionRule) -> Self {
        rule.threshold
    }
}
