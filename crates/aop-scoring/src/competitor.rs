//! Competitor-pressure scoring

use serde::{Deserialize, Serialize};

/// Keywords matched when no list is configured
pub const DEFAULT_COMPETITOR_KEYWORDS: [&str; 7] = [
    "AI",
    "analytics",
    "mobile",
    "redesign",
    "automation",
    "customer",
    "dashboard",
];

/// Points per matched keyword
pub const POINTS_PER_KEYWORD: u32 = 2;
/// Score ceiling
pub const MAX_COMPETITOR_SCORE: u8 = 10;

/// Keyword list with lowercase copies kept for matching
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CompetitorKeywords {
    keywords: Vec<String>,
    lowered: Vec<String>,
}

impl CompetitorKeywords {
    /// Build from any string list; blank entries are dropped
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(Into::into)
            .filter(|k| !k.trim().is_empty())
            .collect();
        let lowered = keywords.iter().map(|k| k.trim().to_lowercase()).collect();
        Self { keywords, lowered }
    }

    /// Keywords as configured
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    /// Number of keywords
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// No keywords
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Count keywords appearing in `title` or `description`, ignoring case
    #[must_use]
    pub fn matches(&self, title: &str, description: &str) -> usize {
        let title = title.to_lowercase();
        let description = description.to_lowercase();
        self.lowered
            .iter()
            .filter(|k| title.contains(k.as_str()) || description.contains(k.as_str()))
            .count()
    }
}

impl Default for CompetitorKeywords {
    fn default() -> Self {
        Self::new(DEFAULT_COMPETITOR_KEYWORDS)
    }
}

impl From<Vec<String>> for CompetitorKeywords {
    fn from(keywords: Vec<String>) -> Self {
        Self::new(keywords)
    }
}

impl From<CompetitorKeywords> for Vec<String> {
    fn from(keywords: CompetitorKeywords) -> Self {
        keywords.keywords
    }
}

/// `min(matches * 2, 10)`
#[must_use]
pub fn competitor_score(title: &str, description: &str, keywords: &CompetitorKeywords) -> u8 {
    let matched = u32::try_from(keywords.matches(title, description)).unwrap_or(u32::MAX);
    let score = matched.saturating_mul(POINTS_PER_KEYWORD);
    u8::try_from(score.min(u32::from(MAX_COMPETITOR_SCORE))).unwrap_or(MAX_COMPETITOR_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn counts_each_keyword_once() {
        let keywords = CompetitorKeywords::default();
        // ai, customer, dashboard in title; automation in description
        let score = competitor_score(
            "AI Customer Dashboard",
            "automation for the customer dashboard",
            &keywords,
        );
        assert_eq!(score, 8);
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let keywords = CompetitorKeywords::default();
        // "ai" is a substring of "Maintain"
        assert_eq!(competitor_score("Maintain ledgers", "", &keywords), 2);
        assert_eq!(competitor_score("Payroll", "Quarterly close", &keywords), 0);
    }

    #[test]
    fn capped_at_ten() {
        let keywords = CompetitorKeywords::default();
        let text = "AI analytics mobile redesign automation customer dashboard";
        assert_eq!(competitor_score(text, text, &keywords), MAX_COMPETITOR_SCORE);
    }

    #[test]
    fn custom_keywords_drop_blanks() {
        let keywords = CompetitorKeywords::new(["Billing", "  ", ""]);
        assert_eq!(keywords.len(), 1);
        assert_eq!(competitor_score("", "billing portal", &keywords), 2);
        let none = CompetitorKeywords::new(Vec::<String>::new());
        assert_eq!(competitor_score("anything", "", &none), 0);
    }

    proptest! {
        #[test]
        fn prop_score_is_even_and_bounded(title in ".{0,40}", description in ".{0,80}") {
            let score = competitor_score(&title, &description, &CompetitorKeywords::default());
            prop_assert!(score <= MAX_COMPETITOR_SCORE);
            prop_assert_eq!(score % 2, 0);
        }
    }
}
