//! Plan import format
//!
//! ```json
//! {
//!   "features": [{ "title": "...", "description": "...", "bu": "AI BU",
//!                  "year": 2027, "half": "H1", "quarter": "Q2" }],
//!   "votes": [{ "feature_id": "F-0001", "voter": "CX BU PM Head", "decision": "approve" }]
//! }
//! ```
//!
//! Features receive ids in file order on an empty planner, so votes can
//! refer to them as `F-0001`, `F-0002`, ...

use aop_model::{FeatureDraft, FeatureId};
use aop_voting::{VoteDecision, VoterId};
use serde::{Deserialize, Serialize};

/// One recorded ballot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// Feature voted on
    pub feature_id: FeatureId,
    /// Voter name
    pub voter: VoterId,
    /// Approve or reject
    pub decision: VoteDecision,
}

/// Feature drafts plus ballots to replay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanFile {
    /// Drafts to create, in order
    pub features: Vec<FeatureDraft>,
    /// Ballots to cast after creation, in order
    pub votes: Vec<VoteRecord>,
}

impl PlanFile {
    /// Parse JSON
    ///
    /// # Errors
    /// Malformed JSON or field values that fail to parse
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
