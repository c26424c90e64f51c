//! Vote storage and status derivation for all features
//!
//! [`BallotBox`] owns one tally and ballot ledger per feature that has
//! received votes. It does not know which features exist; callers check
//! existence before casting and discard entries when a feature goes away.

use crate::ballot::Ballot;
use crate::policy::{AppendOnly, VotePolicy};
use crate::rule::DecisionRule;
use crate::tally::VoteTally;
use aop_model::{FeatureId, Status};
use serde::Serialize;
use std::collections::BTreeMap;

/// Tally plus the ballots that produced it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureVotes {
    /// Counters
    pub tally: VoteTally,
    /// Ballots kept by the policy, in cast order
    pub ballots: Vec<Ballot>,
}

/// Result of casting one ballot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteOutcome {
    /// Feature voted on
    pub feature_id: FeatureId,
    /// Tally after the ballot
    pub tally: VoteTally,
    /// Status before the ballot
    pub previous_status: Status,
    /// Status derived after the ballot
    pub status: Status,
    /// Whether the policy changed the tally
    pub applied: bool,
}

impl VoteOutcome {
    /// Status moved
    #[inline]
    #[must_use]
    pub fn status_changed(&self) -> bool {
        self.previous_status != self.status
    }
}

/// Per-feature vote state under one policy and decision rule
#[derive(Debug)]
pub struct BallotBox {
    votes: BTreeMap<FeatureId, FeatureVotes>,
    policy: Box<dyn VotePolicy>,
    rule: DecisionRule,
}

impl BallotBox {
    /// Append-only box with the default threshold
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(Box::new(AppendOnly), DecisionRule::default())
    }

    /// Box with explicit policy and rule
    #[must_use]
    pub fn with_policy(policy: Box<dyn VotePolicy>, rule: DecisionRule) -> Self {
        Self {
            votes: BTreeMap::new(),
            policy,
            rule,
        }
    }

    /// Record `ballot` for `feature_id` and derive the resulting status
    ///
    /// `current` is the feature's status before the vote. The caller is
    /// responsible for writing `VoteOutcome::status` back to the feature.
    pub fn cast(&mut self, feature_id: FeatureId, ballot: Ballot, current: Status) -> VoteOutcome {
        let entry = self.votes.entry(feature_id).or_default();
        let voter = ballot.voter.clone();
        let decision = ballot.decision;
        let applied = self
            .policy
            .apply(&mut entry.ballots, &mut entry.tally, ballot);
        let status = self.rule.derive(entry.tally, current);

        tracing::debug!(
            feature = %feature_id,
            voter = %voter,
            %decision,
            applied,
            approve = entry.tally.approve,
            reject = entry.tally.reject,
            from = %current,
            to = %status,
            "Ballot cast"
        );

        VoteOutcome {
            feature_id,
            tally: entry.tally,
            previous_status: current,
            status,
            applied,
        }
    }

    /// Tally for a feature, zero when it has no votes
    #[must_use]
    pub fn tally(&self, feature_id: FeatureId) -> VoteTally {
        self.votes
            .get(&feature_id)
            .map(|v| v.tally)
            .unwrap_or_default()
    }

    /// Ballots kept for a feature
    #[must_use]
    pub fn ballots(&self, feature_id: FeatureId) -> &[Ballot] {
        self.votes
            .get(&feature_id)
            .map_or(&[], |v| v.ballots.as_slice())
    }

    /// Feature has a tally entry
    #[inline]
    #[must_use]
    pub fn has_votes(&self, feature_id: FeatureId) -> bool {
        self.votes.contains_key(&feature_id)
    }

    /// Drop a feature's tally and ledger, returning whether one existed
    pub fn discard(&mut self, feature_id: FeatureId) -> bool {
        self.votes.remove(&feature_id).is_some()
    }

    /// All tallies in feature-id order
    pub fn results(&self) -> impl Iterator<Item = (FeatureId, VoteTally)> + '_ {
        self.votes.iter().map(|(id, v)| (*id, v.tally))
    }

    /// Drop all votes
    pub fn clear(&mut self) {
        self.votes.clear();
    }

    /// Number of features with votes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    /// No votes at all
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    /// Decision rule in force
    #[inline]
    #[must_use]
    pub fn rule(&self) -> DecisionRule {
        self.rule
    }

    /// Name of the policy in force
    #[inline]
    #[must_use]
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }
}

impl Default for BallotBox {
    fn default() -> Self {
        Self::new()
    }
}
