//! Validation errors for planning records
//!
//! Every rejected input surfaces as a [`ValidationError`]; nothing in this
//! crate panics on caller-supplied data.

use crate::timeline::{Half, Quarter};

/// Input rejected before any state was touched
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Required free-text field is empty
    #[error("missing required field: {field}")]
    MissingField {
        /// Field name as it appears in drafts
        field: &'static str,
    },

    /// Business impact outside 1..=10
    #[error("impact must be between 1 and 10, got {0}")]
    ImpactOutOfRange(u8),

    /// Quarter does not belong to the selected half
    #[error("quarter {quarter} does not belong to {half}")]
    QuarterNotInHalf {
        /// Selected half
        half: Half,
        /// Offending quarter
        quarter: Quarter,
    },

    /// Target year outside the configured planning window
    #[error("target year {year} outside planning window {min}..={max}")]
    YearOutOfWindow {
        /// Requested year
        year: u16,
        /// First accepted year
        min: u16,
        /// Last accepted year
        max: u16,
    },

    /// Voter identity is blank
    #[error("voter identity must not be empty")]
    BlankVoter,

    /// Scoring weight is not a finite value in [0, 1]
    #[error("weight {name} must be within [0, 1], got {value}")]
    WeightOutOfRange {
        /// Weight name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Decision threshold of zero votes
    #[error("decision threshold must be at least 1")]
    ZeroThreshold,

    /// Label does not name a known enumeration value
    #[error("unknown {kind}: {value:?}")]
    UnknownLabel {
        /// Enumeration name
        kind: &'static str,
        /// Rejected label
        value: String,
    },
}

impl ValidationError {
    #[inline]
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Self::UnknownLabel {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_field() {
        let err = ValidationError::MissingField { field: "title" };
        assert_eq!(err.to_string(), "missing required field: title");
    }

    #[test]
    fn display_quarter_mismatch() {
        let err = ValidationError::QuarterNotInHalf {
            half: Half::H1,
            quarter: Quarter::Q3,
        };
        assert_eq!(err.to_string(), "quarter Q3 does not belong to H1");
    }
}
