//! Per-feature vote counters

use crate::ballot::VoteDecision;
use serde::{Deserialize, Serialize};

/// Approve/reject counters for one feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteTally {
    /// Approve votes
    pub approve: u32,
    /// Reject votes
    pub reject: u32,
}

impl VoteTally {
    /// Tally with given counters
    #[inline]
    #[must_use]
    pub fn new(approve: u32, reject: u32) -> Self {
        Self { approve, reject }
    }

    /// Total votes
    #[inline]
    #[must_use]
    pub fn total(&self) -> u32 {
        self.approve.saturating_add(self.reject)
    }

    /// No votes recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Count one vote
    pub fn record(&mut self, decision: VoteDecision) {
        match decision {
            VoteDecision::Approve => self.approve = self.approve.saturating_add(1),
            VoteDecision::Reject => self.reject = self.reject.saturating_add(1),
        }
    }

    /// Uncount one vote; only used when a policy replaces a ballot
    pub(crate) fn uncount(&mut self, decision: VoteDecision) {
        match decision {
            VoteDecision::Approve => self.approve = self.approve.saturating_sub(1),
            VoteDecision::Reject => self.reject = self.reject.saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_increments_matching_counter() {
        let mut tally = VoteTally::default();
        tally.record(VoteDecision::Approve);
        tally.record(VoteDecision::Approve);
        tally.record(VoteDecision::Reject);
        assert_eq!(tally, VoteTally::new(2, 1));
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn uncount_never_goes_negative() {
        let mut tally = VoteTally::default();
        tally.uncount(VoteDecision::Reject);
        assert!(tally.is_empty());
    }
}
