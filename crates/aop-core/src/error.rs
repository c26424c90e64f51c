//! Error types for the AOP planner
//!
//! Every planner operation either succeeds completely or returns one of:
//! - Validation failures on drafts, voters, weights and labels
//! - Lookups of features that do not exist
//! - Scoring arithmetic failures
//! - Configuration loading failures

use aop_model::{FeatureId, ValidationError};
use aop_scoring::ScoringError;
use std::path::PathBuf;

/// Main planner error type
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// Rejected input
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No feature with this id
    #[error("feature not found: {0}")]
    NotFound(FeatureId),

    /// Scoring pass failed, nothing was written
    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PlannerError {
    /// Caller supplied bad input (as opposed to a missing record)
    #[inline]
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Missing feature
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Malformed YAML
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Malformed TOML
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// Extension is neither YAML nor TOML
    #[error("unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Parsed but semantically invalid
    #[error("invalid setting: {0}")]
    Invalid(#[from] ValidationError),

    /// Year window with `min > max`
    #[error("year window {min}..={max} is empty")]
    EmptyYearWindow {
        /// First year
        min: u16,
        /// Last year
        max: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planner_error_display() {
        let err = PlannerError::NotFound(FeatureId::from_sequence(12));
        assert_eq!(err.to_string(), "feature not found: F-0012");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn arithmetic_failure_is_not_validation() {
        let err = PlannerError::from(ValidationError::ZeroThreshold);
        assert!(err.is_validation());

        let err = PlannerError::from(ScoringError::ZeroDivisor {
            effort_points: 3,
            effort_weight: 0.0,
        });
        assert!(!err.is_validation());
    }

    #[test]
    fn config_error_converts() {
        let err: PlannerError = ConfigError::EmptyYearWindow { min: 2030, max: 2027 }.into();
        assert!(err.to_string().contains("2030..=2027"));
    }
}
