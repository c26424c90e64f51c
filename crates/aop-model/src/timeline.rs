//! Target timeline: year, half and quarter
//!
//! A quarter is only valid inside its half (H1 → Q1/Q2, H2 → Q3/Q4).
//! [`Timeline::new`] is the single place that enforces it.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Half of the planning year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Half {
    /// January to June
    H1,
    /// July to December
    H2,
}

impl Half {
    /// Both halves in calendar order
    pub const ALL: [Half; 2] = [Half::H1, Half::H2];

    /// Quarters that belong to this half
    #[inline]
    #[must_use]
    pub fn quarters(self) -> [Quarter; 2] {
        match self {
            Half::H1 => [Quarter::Q1, Quarter::Q2],
            Half::H2 => [Quarter::Q3, Quarter::Q4],
        }
    }

    /// Check quarter membership
    #[inline]
    #[must_use]
    pub fn contains(self, quarter: Quarter) -> bool {
        self.quarters().contains(&quarter)
    }
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::H1 => f.write_str("H1"),
            Half::H2 => f.write_str("H2"),
        }
    }
}

impl FromStr for Half {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "H1" => Ok(Half::H1),
            "H2" => Ok(Half::H2),
            other => Err(ValidationError::unknown("half", other)),
        }
    }
}

/// Calendar quarter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    /// January to March
    Q1,
    /// April to June
    Q2,
    /// July to September
    Q3,
    /// October to December
    Q4,
}

impl Quarter {
    /// All quarters in calendar order
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Half this quarter falls in
    #[inline]
    #[must_use]
    pub fn half(self) -> Half {
        match self {
            Quarter::Q1 | Quarter::Q2 => Half::H1,
            Quarter::Q3 | Quarter::Q4 => Half::H2,
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        };
        f.write_str(label)
    }
}

impl FromStr for Quarter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Q1" => Ok(Quarter::Q1),
            "Q2" => Ok(Quarter::Q2),
            "Q3" => Ok(Quarter::Q3),
            "Q4" => Ok(Quarter::Q4),
            other => Err(ValidationError::unknown("quarter", other)),
        }
    }
}

/// Validated target timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Timeline {
    year: u16,
    half: Half,
    quarter: Quarter,
}

impl Timeline {
    /// Build a timeline, rejecting a quarter outside its half
    ///
    /// # Errors
    /// `ValidationError::QuarterNotInHalf` when `quarter` is not in `half`
    pub fn new(year: u16, half: Half, quarter: Quarter) -> Result<Self, ValidationError> {
        if !half.contains(quarter) {
            return Err(ValidationError::QuarterNotInHalf { half, quarter });
        }
        Ok(Self {
            year,
            half,
            quarter,
        })
    }

    /// Target year
    #[inline]
    #[must_use]
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Target half
    #[inline]
    #[must_use]
    pub fn half(&self) -> Half {
        self.half
    }

    /// Target quarter
    #[inline]
    #[must_use]
    pub fn quarter(&self) -> Quarter {
        self.quarter
    }
}

impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.year, self.half, self.quarter)
    }
}

/// Inclusive range of accepted target years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    /// First accepted year
    pub min: u16,
    /// Last accepted year
    pub max: u16,
}

impl YearWindow {
    /// Create window
    #[inline]
    #[must_use]
    pub fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Window of `horizon` years starting the year after `current_year`
    #[inline]
    #[must_use]
    pub fn following(current_year: u16, horizon: u16) -> Self {
        Self {
            min: current_year.saturating_add(1),
            max: current_year.saturating_add(horizon),
        }
    }

    /// Check a year against the window
    ///
    /// # Errors
    /// `ValidationError::YearOutOfWindow` when `year` falls outside
    pub fn check(&self, year: u16) -> Result<(), ValidationError> {
        if (self.min..=self.max).contains(&year) {
            Ok(())
        } else {
            Err(ValidationError::YearOutOfWindow {
                year,
                min: self.min,
                max: self.max,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn h1_accepts_first_two_quarters() {
        assert!(Timeline::new(2027, Half::H1, Quarter::Q1).is_ok());
        assert!(Timeline::new(2027, Half::H1, Quarter::Q2).is_ok());
        assert_eq!(
            Timeline::new(2027, Half::H1, Quarter::Q4),
            Err(ValidationError::QuarterNotInHalf {
                half: Half::H1,
                quarter: Quarter::Q4
            })
        );
    }

    #[test]
    fn display_matches_plan_notation() {
        let timeline = Timeline::new(2027, Half::H2, Quarter::Q3).unwrap();
        assert_eq!(timeline.to_string(), "2027 H2-Q3");
    }

    #[test]
    fn year_window_following() {
        let window = YearWindow::following(2026, 5);
        assert_eq!(window, YearWindow::new(2027, 2031));
        assert!(window.check(2026).is_err());
        assert!(window.check(2031).is_ok());
    }

    #[test]
    fn labels_parse() {
        assert_eq!("H2".parse::<Half>().unwrap(), Half::H2);
        assert_eq!("Q4".parse::<Quarter>().unwrap(), Quarter::Q4);
        assert!("Q5".parse::<Quarter>().is_err());
    }

    fn any_half() -> impl Strategy<Value = Half> {
        prop_oneof![Just(Half::H1), Just(Half::H2)]
    }

    fn any_quarter() -> impl Strategy<Value = Quarter> {
        prop_oneof![
            Just(Quarter::Q1),
            Just(Quarter::Q2),
            Just(Quarter::Q3),
            Just(Quarter::Q4),
        ]
    }

    proptest! {
        #[test]
        fn prop_valid_timeline_keeps_quarter_in_half(
            year in 2000u16..2100,
            half in any_half(),
            quarter in any_quarter(),
        ) {
            match Timeline::new(year, half, quarter) {
                Ok(timeline) => {
                    prop_assert!(timeline.half().quarters().contains(&timeline.quarter()));
                    prop_assert_eq!(quarter.half(), half);
                }
                Err(_) => prop_assert_ne!(quarter.half(), half),
            }
        }
    }
}
