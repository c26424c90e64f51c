//! AOP Model - feature requests for annual operating plans
//!
//! Defines the records every other crate works on:
//! - Planning enumerations (business unit, status, feature type, effort)
//! - Target timeline with the half/quarter rule
//! - Cross-team dependencies and the derived set of dependent teams
//! - Feature drafts, their validation, and feature records
//!
//! # Example
//!
//! ```rust
//! use aop_model::{BusinessUnit, Effort, Feature, FeatureDraft, FeatureId, Half, Quarter};
//!
//! let draft = FeatureDraft::new(
//!     "Customer segmentation",
//!     "Behavioral ML segmentation",
//!     BusinessUnit::Ai,
//!     2027,
//!     Half::H1,
//!     Quarter::Q1,
//! )
//! .with_effort(Effort::L)
//! .depends_on(BusinessUnit::Cx, "Data feed", "Real-time interactions");
//!
//! let validated = draft.validate(None).unwrap();
//! let feature = Feature::new(FeatureId::from_sequence(1), chrono::Utc::now(), validated);
//! assert_eq!(feature.dependent_teams(), vec![BusinessUnit::Cx]);
//! ```

#![warn(unreachable_pub)]

pub mod dependency;
pub mod error;
pub mod feature;
pub mod timeline;
pub mod types;

pub use dependency::{dependencies_by_team, dependent_teams, Dependency, DependencyInput};
pub use error::ValidationError;
pub use feature::{
    Attachments, Feature, FeatureDraft, ValidatedDraft, CREATED_DATE_FORMAT, DEFAULT_IMPACT,
    MAX_IMPACT, MIN_IMPACT,
};
pub use timeline::{Half, Quarter, Timeline, YearWindow};
pub use types::{BusinessUnit, Effort, FeatureId, FeatureType, Status};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
