//! Planner configuration
//!
//! Loaded from YAML (`.yaml`/`.yml`) or TOML (`.toml`); every field is
//! optional in the file and falls back to [`PlannerConfig::default`].
//!
//! ```yaml
//! decision_threshold: 3
//! vote_policy: last
//! rice_weights: { reach: 0.5, impact: 0.2, confidence: 0.2, effort: 0.1 }
//! competitor_keywords: [AI, analytics, mobile]
//! year_window: { min: 2027, max: 2031 }
//! recent_limit: 8
//! ```

use crate::error::ConfigError;
use aop_model::YearWindow;
use aop_scoring::{CompetitorKeywords, RiceWeights};
use aop_voting::{BallotBox, DecisionRule, PolicyKind, DEFAULT_DECISION_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Features shown by the recent view when unconfigured
pub const DEFAULT_RECENT_LIMIT: usize = 8;

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Votes needed before a decision is taken
    pub decision_threshold: u32,
    /// How repeat ballots count
    pub vote_policy: PolicyKind,
    /// RICE weights used when none are given explicitly
    pub rice_weights: RiceWeights,
    /// Competitor keyword list
    pub competitor_keywords: CompetitorKeywords,
    /// Accepted target years; unrestricted when absent
    pub year_window: Option<YearWindow>,
    /// Size of the recent view
    pub recent_limit: usize,
}

impl PlannerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With decision threshold
    #[inline]
    #[must_use]
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.decision_threshold = threshold;
        self
    }

    /// With vote policy
    #[inline]
    #[must_use]
    pub fn with_vote_policy(mut self, policy: PolicyKind) -> Self {
        self.vote_policy = policy;
        self
    }

    /// With RICE weights
    #[inline]
    #[must_use]
    pub fn with_rice_weights(mut self, weights: RiceWeights) -> Self {
        self.rice_weights = weights;
        self
    }

    /// With competitor keywords
    #[inline]
    #[must_use]
    pub fn with_competitor_keywords(mut self, keywords: CompetitorKeywords) -> Self {
        self.competitor_keywords = keywords;
        self
    }

    /// With year window
    #[inline]
    #[must_use]
    pub fn with_year_window(mut self, window: YearWindow) -> Self {
        self.year_window = Some(window);
        self
    }

    /// With recent view size
    #[inline]
    #[must_use]
    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    /// Load and validate a YAML or TOML file, chosen by extension
    ///
    /// # Errors
    /// `ConfigError` when the file is unreadable, malformed or invalid
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let loader: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("yaml" | "yml") => Self::from_yaml_str,
            Some("toml") => Self::from_toml_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = loader(&content)?;
        tracing::debug!(path = %path.display(), ?config, "Loaded planner config");
        Ok(config)
    }

    /// Parse and validate YAML
    ///
    /// # Errors
    /// `ConfigError::Yaml` or a validation error
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate TOML
    ///
    /// # Errors
    /// `ConfigError::Toml` or a validation error
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    ///
    /// Weights are checked when they are built, so only the threshold and
    /// year window remain.
    ///
    /// # Errors
    /// `ConfigError::Invalid` for a zero threshold,
    /// `ConfigError::EmptyYearWindow` for an inverted window
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.decision_rule()?;
        if let Some(window) = self.year_window {
            if window.min > window.max {
                return Err(ConfigError::EmptyYearWindow {
                    min: window.min,
                    max: window.max,
                });
            }
        }
        Ok(())
    }

    /// Decision rule for the configured threshold
    ///
    /// # Errors
    /// `ConfigError::Invalid` when the threshold is zero
    pub fn decision_rule(&self) -> Result<DecisionRule, ConfigError> {
        Ok(DecisionRule::new(self.decision_threshold)?)
    }

    /// Empty ballot box using the configured policy and rule
    ///
    /// # Errors
    /// `ConfigError::Invalid` when the threshold is zero
    pub fn ballot_box(&self) -> Result<BallotBox, ConfigError> {
        Ok(BallotBox::with_policy(
            self.vote_policy.build(),
            self.decision_rule()?,
        ))
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            decision_threshold: DEFAULT_DECISION_THRESHOLD,
            vote_policy: PolicyKind::default(),
            rice_weights: RiceWeights::default(),
            competitor_keywords: CompetitorKeywords::default(),
            year_window: None,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aop_model::ValidationError;

    #[test]
    fn defaults_match_intake_tool() {
        let config = PlannerConfig::new();
        assert_eq!(config.decision_threshold, 3);
        assert_eq!(config.vote_policy, PolicyKind::Append);
        assert_eq!(config.rice_weights, RiceWeights::default());
        assert_eq!(config.competitor_keywords.len(), 7);
        assert_eq!(config.recent_limit, 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn yaml_partial_override() {
        let config = PlannerConfig::from_yaml_str(
            "decision_threshold: 5\nvote_policy: last\nyear_window: { min: 2027, max: 2031 }\n",
        )
        .unwrap();
        assert_eq!(config.decision_threshold, 5);
        assert_eq!(config.vote_policy, PolicyKind::Last);
        assert_eq!(config.year_window, Some(YearWindow::new(2027, 2031)));
        assert_eq!(config.recent_limit, DEFAULT_RECENT_LIMIT);
    }

    #[test]
    fn toml_weights_and_keywords() {
        let config = PlannerConfig::from_toml_str(
            r#"
competitor_keywords = ["billing", "mobile"]

[rice_weights]
reach = 0.5
impact = 0.2
confidence = 0.2
effort = 0.1
"#,
        )
        .unwrap();
        assert!((config.rice_weights.reach() - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.competitor_keywords.as_slice(), ["billing", "mobile"]);
    }

    #[test]
    fn zero_threshold_rejected() {
        let err = PlannerConfig::from_yaml_str("decision_threshold: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ValidationError::ZeroThreshold)));
    }

    #[test]
    fn weight_out_of_range_fails_to_parse() {
        let err = PlannerConfig::from_yaml_str(
            "rice_weights: { reach: 1.4, impact: 0.3, confidence: 0.2, effort: 0.1 }",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn inverted_window_rejected() {
        let config = PlannerConfig::new().with_year_window(YearWindow::new(2031, 2027));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyYearWindow { min: 2031, max: 2027 })
        ));
    }

    #[test]
    fn unknown_extension_rejected() {
        let err = PlannerConfig::from_path("planner.ini").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
