//! AOP Voting - threshold approval for feature requests
//!
//! # Core Concepts
//!
//! - [`VoteTally`]: approve/reject counters per feature
//! - [`DecisionRule`]: derives a feature's status from its tally
//! - [`VotePolicy`]: how repeat ballots from one voter count
//! - [`BallotBox`]: per-feature tallies and ledgers under one policy
//!
//! # Example
//!
//! ```rust
//! use aop_model::{FeatureId, Status};
//! use aop_voting::{Ballot, BallotBox, VoteDecision, VoterId};
//!
//! let mut ballot_box = BallotBox::new();
//! let id = FeatureId::from_sequence(1);
//! let voter = VoterId::new("AI BU PM Head").unwrap();
//!
//! let outcome = ballot_box.cast(id, Ballot::new(voter, VoteDecision::Approve), Status::Draft);
//! assert_eq!(outcome.status, Status::UnderReview);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod ballot;
mod ballot_box;
mod policy;
mod rule;
mod tally;

pub use ballot::{Ballot, VoteDecision, VoterId};
pub use ballot_box::{BallotBox, FeatureVotes, VoteOutcome};
pub use policy::{AppendOnly, FirstVoteWins, LastVoteWins, PolicyKind, VotePolicy};
pub use rule::{DecisionRule, DEFAULT_DECISION_THRESHOLD};
pub use tally::VoteTally;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
