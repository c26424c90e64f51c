//! RICE scoring
//!
//! Reach and impact are both derived from the feature's business impact;
//! confidence is fixed. The weighted sum is divided by effort points times
//! the effort weight:
//!
//! ```text
//! reach       = impact * 1000
//! impact_term = impact / 2.5
//! confidence  = 0.8
//! score = (reach*w_r + impact_term*w_i*100 + confidence*w_c*100) / (effort_points * w_e)
//! ```

use crate::error::ScoringError;
use aop_model::{Effort, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reach units per impact point
pub const REACH_PER_IMPACT: f64 = 1000.0;
/// Divisor turning impact into the impact term
pub const IMPACT_DIVISOR: f64 = 2.5;
/// Fixed confidence
pub const CONFIDENCE: f64 = 0.8;

/// Weights for the four RICE terms, each within [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights", into = "RawWeights")]
pub struct RiceWeights {
    reach: f64,
    impact: f64,
    confidence: f64,
    effort: f64,
}

#[derive(Serialize, Deserialize)]
struct RawWeights {
    reach: f64,
    impact: f64,
    confidence: f64,
    effort: f64,
}

impl RiceWeights {
    /// Validate and build weights (the sum is not required to be 1)
    ///
    /// # Errors
    /// `ValidationError::WeightOutOfRange` for a non-finite weight or one
    /// outside [0, 1]
    pub fn new(
        reach: f64,
        impact: f64,
        confidence: f64,
        effort: f64,
    ) -> Result<Self, ValidationError> {
        for (name, value) in [
            ("reach", reach),
            ("impact", impact),
            ("confidence", confidence),
            ("effort", effort),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::WeightOutOfRange { name, value });
            }
        }
        Ok(Self {
            reach,
            impact,
            confidence,
            effort,
        })
    }

    /// Reach weight
    #[inline]
    #[must_use]
    pub fn reach(&self) -> f64 {
        self.reach
    }

    /// Impact weight
    #[inline]
    #[must_use]
    pub fn impact(&self) -> f64 {
        self.impact
    }

    /// Confidence weight
    #[inline]
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Effort weight
    #[inline]
    #[must_use]
    pub fn effort(&self) -> f64 {
        self.effort
    }
}

impl Default for RiceWeights {
    fn default() -> Self {
        Self {
            reach: 0.4,
            impact: 0.3,
            confidence: 0.2,
            effort: 0.1,
        }
    }
}

impl TryFrom<RawWeights> for RiceWeights {
    type Error = ValidationError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        Self::new(raw.reach, raw.impact, raw.confidence, raw.effort)
    }
}

impl From<RiceWeights> for RawWeights {
    fn from(w: RiceWeights) -> Self {
        Self {
            reach: w.reach,
            impact: w.impact,
            confidence: w.confidence,
            effort: w.effort,
        }
    }
}

impl fmt::Display for RiceWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.reach, self.impact, self.confidence, self.effort)
    }
}

/// Parses `reach,impact,confidence,effort`
impl FromStr for RiceWeights {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<f64> = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| ValidationError::UnknownLabel {
                kind: "rice weights",
                value: s.to_string(),
            })?;
        match parts.as_slice() {
            [reach, impact, confidence, effort] => Self::new(*reach, *impact, *confidence, *effort),
            _ => Err(ValidationError::UnknownLabel {
                kind: "rice weights",
                value: s.to_string(),
            }),
        }
    }
}

/// RICE score rounded to two decimals
///
/// # Errors
/// `ScoringError::ZeroDivisor` when the effort weight is zero
pub fn rice_score(impact: u8, effort: Effort, weights: &RiceWeights) -> Result<f64, ScoringError> {
    let effort_points = effort.points();
    let divisor = f64::from(effort_points) * weights.effort;
    if divisor == 0.0 {
        return Err(ScoringError::ZeroDivisor {
            effort_points,
            effort_weight: weights.effort,
        });
    }

    let impact = f64::from(impact);
    let reach = impact * REACH_PER_IMPACT;
    let impact_term = impact / IMPACT_DIVISOR;

    let weighted = reach * weights.reach
        + impact_term * weights.impact * 100.0
        + CONFIDENCE * weights.confidence * 100.0;

    Ok(round2(weighted / divisor))
}

/// Two decimals, exact ties go to the even neighbour
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_effort_example() {
        // (9000*0.4 + 3.6*0.3*100 + 0.8*0.2*100) / (5*0.1) = 3724 / 0.5
        let score = rice_score(9, Effort::L, &RiceWeights::default()).unwrap();
        assert!((score - 7448.0).abs() < 1e-9);
    }

    #[test]
    fn medium_effort_rounds_to_two_decimals() {
        // (7000*0.4 + 2.8*0.3*100 + 16) / 0.3 = 2900 / 0.3
        let score = rice_score(7, Effort::M, &RiceWeights::default()).unwrap();
        assert!((score - 9666.67).abs() < 1e-9);
    }

    #[test]
    fn zero_effort_weight_is_zero_divisor() {
        let weights = RiceWeights::new(0.4, 0.3, 0.2, 0.0).unwrap();
        let err = rice_score(5, Effort::S, &weights).unwrap_err();
        assert_eq!(
            err,
            ScoringError::ZeroDivisor {
                effort_points: 2,
                effort_weight: 0.0
            }
        );
    }

    #[test]
    fn exact_ties_round_to_even() {
        // 1000 * 0.001 / (8 * 1.0) = 0.125
        let weights = RiceWeights::new(0.001, 0.0, 0.0, 1.0).unwrap();
        let score = rice_score(1, Effort::XL, &weights).unwrap();
        assert!((score - 0.12).abs() < 1e-9);

        // 1000 * 0.003 / 8 = 0.375
        let weights = RiceWeights::new(0.003, 0.0, 0.0, 1.0).unwrap();
        let score = rice_score(1, Effort::XL, &weights).unwrap();
        assert!((score - 0.38).abs() < 1e-9);
    }

    #[test]
    fn weights_outside_unit_interval_rejected() {
        assert!(RiceWeights::new(1.5, 0.3, 0.2, 0.1).is_err());
        assert!(RiceWeights::new(0.4, -0.1, 0.2, 0.1).is_err());
        assert!(RiceWeights::new(0.4, 0.3, f64::NAN, 0.1).is_err());
        assert!(RiceWeights::new(1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn weights_parse_from_list() {
        let w: RiceWeights = "0.5, 0.2, 0.2, 0.1".parse().unwrap();
        assert!((w.reach() - 0.5).abs() < f64::EPSILON);
        assert!("0.5,0.2".parse::<RiceWeights>().is_err());
        assert!("a,b,c,d".parse::<RiceWeights>().is_err());
    }
}
