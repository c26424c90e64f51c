//! Scoring errors

/// Scoring failure
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    /// RICE divisor `effort_points * effort_weight` is zero
    #[error("RICE divisor is zero (effort points {effort_points}, effort weight {effort_weight})")]
    ZeroDivisor {
        /// Effort points of the feature
        effort_points: u32,
        /// Effort weight in use
        effort_weight: f64,
    },
}
