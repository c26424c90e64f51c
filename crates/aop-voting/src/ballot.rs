//! Voters, decisions and ballots

use aop_model::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A voter's decision on a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDecision {
    /// Vote for the feature
    Approve,
    /// Vote against the feature
    Reject,
}

impl fmt::Display for VoteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDecision::Approve => f.write_str("approve"),
            VoteDecision::Reject => f.write_str("reject"),
        }
    }
}

impl FromStr for VoteDecision {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approve" => Ok(VoteDecision::Approve),
            "reject" => Ok(VoteDecision::Reject),
            other => Err(ValidationError::UnknownLabel {
                kind: "vote decision",
                value: other.to_string(),
            }),
        }
    }
}

/// Self-selected voter identity, e.g. `"AI BU PM Head"`
///
/// Not authenticated; only guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VoterId(String);

impl VoterId {
    /// Create voter identity
    ///
    /// # Errors
    /// `ValidationError::BlankVoter` for an empty or whitespace-only name
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankVoter);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Identity as text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for VoterId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VoterId> for String {
    fn from(voter: VoterId) -> Self {
        voter.0
    }
}

/// One cast vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ballot {
    /// Who voted
    pub voter: VoterId,
    /// What they decided
    pub decision: VoteDecision,
}

impl Ballot {
    /// Create ballot
    #[inline]
    #[must_use]
    pub fn new(voter: VoterId, decision: VoteDecision) -> Self {
        Self { voter, decision }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voter_is_trimmed() {
        let voter = VoterId::new("  CX BU PM Head ").unwrap();
        assert_eq!(voter.as_str(), "CX BU PM Head");
    }

    #[test]
    fn blank_voter_rejected() {
        assert_eq!(VoterId::new("   "), Err(ValidationError::BlankVoter));
    }

    #[test]
    fn decision_parses_case_insensitively() {
        assert_eq!("Approve".parse::<VoteDecision>().unwrap(), VoteDecision::Approve);
        assert_eq!("REJECT".parse::<VoteDecision>().unwrap(), VoteDecision::Reject);
        assert!("abstain".parse::<VoteDecision>().is_err());
    }
}
