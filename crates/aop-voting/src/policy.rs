//! Vote policies: how a repeat ballot from the same voter is treated
//!
//! - [`AppendOnly`]: every ballot counts, no deduplication (default)
//! - [`LastVoteWins`]: a voter's new ballot replaces their earlier one
//! - [`FirstVoteWins`]: a voter's first ballot stands, repeats are ignored

use crate::ballot::Ballot;
use crate::tally::VoteTally;
use aop_model::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Applies a ballot to a feature's ledger and tally
///
/// Implementations must keep `tally` equal to the decisions they keep in
/// `ledger` and must be deterministic.
pub trait VotePolicy: Send + Sync + fmt::Debug {
    /// Apply `ballot`, returning whether the tally changed
    fn apply(&self, ledger: &mut Vec<Ballot>, tally: &mut VoteTally, ballot: Ballot) -> bool;

    /// Policy name (for logging/config)
    fn name(&self) -> &'static str;
}

/// Every call is one more vote
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendOnly;

impl VotePolicy for AppendOnly {
    fn apply(&self, ledger: &mut Vec<Ballot>, tally: &mut VoteTally, ballot: Ballot) -> bool {
        tally.record(ballot.decision);
        ledger.push(ballot);
        true
    }

    fn name(&self) -> &'static str {
        "append"
    }
}

/// One vote per voter, latest decision counts
#[derive(Debug, Clone, Copy, Default)]
pub struct LastVoteWins;

impl VotePolicy for LastVoteWins {
    fn apply(&self, ledger: &mut Vec<Ballot>, tally: &mut VoteTally, ballot: Ballot) -> bool {
        if let Some(pos) = ledger.iter().position(|b| b.voter == ballot.voter) {
            if ledger[pos].decision == ballot.decision {
                return false;
            }
            let previous = ledger.remove(pos);
            tally.uncount(previous.decision);
        }
        tally.record(ballot.decision);
        ledger.push(ballot);
        true
    }

    fn name(&self) -> &'static str {
        "last"
    }
}

/// One vote per voter, first decision counts
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstVoteWins;

impl VotePolicy for FirstVoteWins {
    fn apply(&self, ledger: &mut Vec<Ballot>, tally: &mut VoteTally, ballot: Ballot) -> bool {
        if ledger.iter().any(|b| b.voter == ballot.voter) {
            return false;
        }
        tally.record(ballot.decision);
        ledger.push(ballot);
        true
    }

    fn name(&self) -> &'static str {
        "first"
    }
}

/// Built-in policy selector, used by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    /// [`AppendOnly`]
    #[default]
    Append,
    /// [`LastVoteWins`]
    Last,
    /// [`FirstVoteWins`]
    First,
}

impl PolicyKind {
    /// Instantiate the selected policy
    #[must_use]
    pub fn build(self) -> Box<dyn VotePolicy> {
        match self {
            PolicyKind::Append => Box::new(AppendOnly),
            PolicyKind::Last => Box::new(LastVoteWins),
            PolicyKind::First => Box::new(FirstVoteWins),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Append => f.write_str("append"),
            PolicyKind::Last => f.write_str("last"),
            PolicyKind::First => f.write_str("first"),
        }
    }
}

impl FromStr for PolicyKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "append" => Ok(PolicyKind::Append),
            "last" => Ok(PolicyKind::Last),
            "first" => Ok(PolicyKind::First),
            other => Err(ValidationError::UnknownLabel {
                kind: "vote policy",
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ballot::{VoteDecision, VoterId};

    fn ballot(voter: &str, decision: VoteDecision) -> Ballot {
        Ballot::new(VoterId::new(voter).unwrap(), decision)
    }

    fn run(policy: &dyn VotePolicy, ballots: &[Ballot]) -> (Vec<Ballot>, VoteTally) {
        let mut ledger = Vec::new();
        let mut tally = VoteTally::default();
        for b in ballots {
            policy.apply(&mut ledger, &mut tally, b.clone());
        }
        (ledger, tally)
    }

    #[test]
    fn append_only_counts_repeats() {
        let ballots = [
            ballot("AI BU PM Head", VoteDecision::Approve),
            ballot("AI BU PM Head", VoteDecision::Approve),
            ballot("AI BU PM Head", VoteDecision::Reject),
        ];
        let (ledger, tally) = run(&AppendOnly, &ballots);
        assert_eq!(ledger.len(), 3);
        assert_eq!(tally, VoteTally::new(2, 1));
    }

    #[test]
    fn last_vote_replaces_earlier_ballot() {
        let ballots = [
            ballot("AI BU PM Head", VoteDecision::Approve),
            ballot("CX BU PM Head", VoteDecision::Approve),
            ballot("AI BU PM Head", VoteDecision::Reject),
        ];
        let (ledger, tally) = run(&LastVoteWins, &ballots);
        assert_eq!(tally, VoteTally::new(1, 1));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger[1].decision, VoteDecision::Reject);
    }

    #[test]
    fn last_vote_same_decision_is_noop() {
        let mut ledger = vec![ballot("EX BU PM Head", VoteDecision::Approve)];
        let mut tally = VoteTally::new(1, 0);
        let changed = LastVoteWins.apply(
            &mut ledger,
            &mut tally,
            ballot("EX BU PM Head", VoteDecision::Approve),
        );
        assert!(!changed);
        assert_eq!(tally, VoteTally::new(1, 0));
    }

    #[test]
    fn first_vote_ignores_repeats() {
        let ballots = [
            ballot("CE BU PM Head", VoteDecision::Reject),
            ballot("CE BU PM Head", VoteDecision::Approve),
        ];
        let (ledger, tally) = run(&FirstVoteWins, &ballots);
        assert_eq!(tally, VoteTally::new(0, 1));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn policy_kind_builds_named_policy() {
        for kind in [PolicyKind::Append, PolicyKind::Last, PolicyKind::First] {
            assert_eq!(kind.build().name(), kind.to_string());
            assert_eq!(kind.to_string().parse::<PolicyKind>().unwrap(), kind);
        }
        assert!("majority".parse::<PolicyKind>().is_err());
    }
}
