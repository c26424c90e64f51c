//! Cross-team dependencies
//!
//! A feature owns an ordered list of [`Dependency`] values. One team can
//! appear many times (one-to-many); the set of teams is always derived from
//! the list, never stored next to it.

use crate::types::BusinessUnit;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single need a feature has on another team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Team that has to deliver
    pub team: BusinessUnit,
    /// Short label, may be empty
    #[serde(default)]
    pub title: String,
    /// Details, may be empty
    #[serde(default)]
    pub description: String,
}

impl Dependency {
    /// Create dependency on a team
    #[inline]
    #[must_use]
    pub fn new(
        team: BusinessUnit,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            team,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Raw dependency row as entered, team possibly unselected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyInput {
    /// Selected team, if any
    #[serde(default)]
    pub team: Option<BusinessUnit>,
    /// Short label
    #[serde(default)]
    pub title: String,
    /// Details
    #[serde(default)]
    pub description: String,
}

impl DependencyInput {
    /// Input row with a team selected
    #[inline]
    #[must_use]
    pub fn for_team(
        team: BusinessUnit,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            team: Some(team),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Resolve the row into a dependency, `None` when no team is selected
    #[must_use]
    pub fn resolve(&self) -> Option<Dependency> {
        self.team
            .map(|team| Dependency::new(team, self.title.clone(), self.description.clone()))
    }

    fn has_text(&self) -> bool {
        !self.title.trim().is_empty() || !self.description.trim().is_empty()
    }
}

impl From<Dependency> for DependencyInput {
    fn from(dep: Dependency) -> Self {
        Self {
            team: Some(dep.team),
            title: dep.title,
            description: dep.description,
        }
    }
}

/// Resolve a list of input rows, preserving order
///
/// Rows without a team are skipped; a skipped row that carried text is
/// logged, the rest of the draft still goes through.
#[must_use]
pub fn resolve_inputs(inputs: &[DependencyInput]) -> Vec<Dependency> {
    let mut resolved = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        match input.resolve() {
            Some(dep) => resolved.push(dep),
            None if input.has_text() => {
                warn!(index, title = %input.title, "Dependency has no team, skipping it");
            }
            None => {}
        }
    }
    resolved
}

/// Distinct teams in first-occurrence order
#[must_use]
pub fn dependent_teams(dependencies: &[Dependency]) -> Vec<BusinessUnit> {
    let mut teams = Vec::new();
    for dep in dependencies {
        if !teams.contains(&dep.team) {
            teams.push(dep.team);
        }
    }
    teams
}

/// Dependencies grouped by team, teams in first-occurrence order
#[must_use]
pub fn dependencies_by_team(
    dependencies: &[Dependency],
) -> IndexMap<BusinessUnit, Vec<&Dependency>> {
    let mut grouped: IndexMap<BusinessUnit, Vec<&Dependency>> = IndexMap::new();
    for dep in dependencies {
        grouped.entry(dep.team).or_default().push(dep);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Dependency> {
        vec![
            Dependency::new(BusinessUnit::Cx, "Data feed", "real-time events"),
            Dependency::new(BusinessUnit::Platform, "Serving", "GPU inference"),
            Dependency::new(BusinessUnit::Cx, "Feedback", ""),
        ]
    }

    #[test]
    fn dependent_teams_deduplicates_in_order() {
        assert_eq!(
            dependent_teams(&sample()),
            vec![BusinessUnit::Cx, BusinessUnit::Platform]
        );
        assert!(dependent_teams(&[]).is_empty());
    }

    #[test]
    fn grouping_keeps_insertion_order() {
        let deps = sample();
        let grouped = dependencies_by_team(&deps);
        let teams: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(teams, vec![BusinessUnit::Cx, BusinessUnit::Platform]);
        let cx_titles: Vec<_> = grouped[&BusinessUnit::Cx]
            .iter()
            .map(|d| d.title.as_str())
            .collect();
        assert_eq!(cx_titles, vec!["Data feed", "Feedback"]);
    }

    #[test]
    fn blank_rows_are_dropped() {
        let inputs = vec![
            DependencyInput::default(),
            DependencyInput::for_team(BusinessUnit::Ai, "Model", ""),
        ];
        let resolved = resolve_inputs(&inputs);
        assert_eq!(resolved, vec![Dependency::new(BusinessUnit::Ai, "Model", "")]);
    }

    #[test]
    fn text_without_team_is_skipped() {
        let inputs = vec![
            DependencyInput {
                team: None,
                title: "Orphan".into(),
                description: "needs an owner".into(),
            },
            DependencyInput::for_team(BusinessUnit::Ai, "Model", ""),
        ];
        assert_eq!(
            resolve_inputs(&inputs),
            vec![Dependency::new(BusinessUnit::Ai, "Model", "")]
        );
    }

    #[test]
    fn team_without_text_is_kept() {
        let dep = DependencyInput::for_team(BusinessUnit::Ex, "", "")
            .resolve()
            .unwrap();
        assert_eq!(dep, Dependency::new(BusinessUnit::Ex, "", ""));
    }
}
