//! AOP Core - annual operating plan feature intake
//!
//! Ties the model, voting and scoring crates into one owned [`Planner`]:
//! - Feature CRUD with sequential `F-NNNN` ids
//! - Threshold voting that drives feature status
//! - Competitor and RICE scoring passes
//! - Summary, recent and voting-board views
//!
//! # Example
//!
//! ```rust
//! use aop_core::{BusinessUnit, FeatureDraft, Half, Planner, Quarter, Status, VoteDecision};
//!
//! let mut planner = Planner::default();
//! let draft = FeatureDraft::new(
//!     "Smart search",
//!     "Semantic search",
//!     BusinessUnit::Cx,
//!     2027,
//!     Half::H1,
//!     Quarter::Q1,
//! );
//! let id = planner.create(&draft).unwrap().id();
//!
//! for voter in ["AI BU PM Head", "EX BU PM Head", "CE BU PM Head"] {
//!     planner.cast_vote(id, voter, VoteDecision::Approve).unwrap();
//! }
//! assert_eq!(planner.get(id).unwrap().status(), Status::Approved);
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod config;
pub mod demo;
pub mod error;
pub mod filter;
pub mod logging;
pub mod plan;
pub mod planner;
pub mod repository;
pub mod shared;
pub mod summary;

// Re-exports for convenience
pub use config::{PlannerConfig, DEFAULT_RECENT_LIMIT};
pub use error::{ConfigError, PlannerError};
pub use filter::FeatureFilter;
pub use logging::{init_test_logging, init_tracing, LogFormat};
pub use plan::{PlanFile, VoteRecord};
pub use planner::Planner;
pub use repository::FeatureRepository;
pub use shared::SharedPlanner;
pub use summary::{PlanSummary, VotingBoard};

pub use aop_model::{
    Attachments, BusinessUnit, Dependency, DependencyInput, Effort, Feature, FeatureDraft,
    FeatureId, FeatureType, Half, Quarter, Status, Timeline, ValidationError, YearWindow,
};
pub use aop_scoring::{CompetitorKeywords, RiceWeights, ScoringError};
pub use aop_voting::{Ballot, PolicyKind, VoteDecision, VoteOutcome, VoteTally, VoterId};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the planner
    pub use crate::{
        BusinessUnit, Effort, FeatureDraft, FeatureFilter, FeatureId, FeatureType, Half, Planner,
        PlannerConfig, PlannerError, Quarter, RiceWeights, Status, VoteDecision,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
