//! AOP Scoring - prioritization scores for feature requests
//!
//! Two independent scorers, both pure functions of a feature's fields:
//!
//! - [`competitor_score`]: keyword pressure, `0..=10`
//! - [`rice_score`]: weighted RICE value rounded to two decimals
//!
//! Batch application over a plan lives in `aop-core`.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod competitor;
mod error;
mod rice;

pub use competitor::{
    competitor_score, CompetitorKeywords, DEFAULT_COMPETITOR_KEYWORDS, MAX_COMPETITOR_SCORE,
    POINTS_PER_KEYWORD,
};
pub use error::ScoringError;
pub use rice::{rice_score, RiceWeights, CONFIDENCE, IMPACT_DIVISOR, REACH_PER_IMPACT};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
