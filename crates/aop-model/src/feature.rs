//! Feature records and the drafts that create or replace them
//!
//! A [`FeatureDraft`] is what a submitter fills in. It is validated into a
//! [`ValidatedDraft`] before any record is touched, so applying a draft can
//! never fail half-way.

use crate::dependency::{self, Dependency, DependencyInput};
use crate::error::ValidationError;
use crate::timeline::{Half, Quarter, Timeline, YearWindow};
use crate::types::{BusinessUnit, Effort, FeatureId, FeatureType, Status};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};

/// Lowest accepted business impact
pub const MIN_IMPACT: u8 = 1;
/// Highest accepted business impact
pub const MAX_IMPACT: u8 = 10;
/// Impact preset for new drafts
pub const DEFAULT_IMPACT: u8 = 7;

/// Timestamp format used when showing creation dates
pub const CREATED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn default_impact() -> u8 {
    DEFAULT_IMPACT
}

/// Attachment names and submitter, stored as given
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachments {
    /// Product requirements document file name
    #[serde(default)]
    pub prd_file: Option<String>,
    /// Mockup file name
    #[serde(default)]
    pub mockup_file: Option<String>,
    /// Free-text submitter
    #[serde(default)]
    pub submitted_by: Option<String>,
}

impl Attachments {
    /// Overlay: fields set in `update` win, unset fields keep `self`
    fn merged(&self, update: &Attachments) -> Attachments {
        Attachments {
            prd_file: update.prd_file.clone().or_else(|| self.prd_file.clone()),
            mockup_file: update.mockup_file.clone().or_else(|| self.mockup_file.clone()),
            submitted_by: update.submitted_by.clone().or_else(|| self.submitted_by.clone()),
        }
    }
}

/// Submitted or edited feature fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDraft {
    /// Feature title (required)
    pub title: String,
    /// Feature description (required)
    pub description: String,
    /// Owning business unit
    pub bu: BusinessUnit,
    /// Target year
    pub year: u16,
    /// Target half
    pub half: Half,
    /// Target quarter, must belong to `half`
    pub quarter: Quarter,
    /// Size class
    #[serde(rename = "type", default)]
    pub feature_type: FeatureType,
    /// Business impact, 1 to 10
    #[serde(default = "default_impact")]
    pub impact: u8,
    /// Effort estimate
    #[serde(default)]
    pub effort: Effort,
    /// Dependency rows as entered
    #[serde(rename = "dependency_details", default)]
    pub dependencies: Vec<DependencyInput>,
    /// Status to set on update, `None` keeps the current one; create ignores it
    #[serde(default)]
    pub status: Option<Status>,
    /// Attachment names
    #[serde(flatten)]
    pub attachments: Attachments,
}

impl FeatureDraft {
    /// Create draft with form defaults (Hero Big Rock, impact 7, effort M)
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        bu: BusinessUnit,
        year: u16,
        half: Half,
        quarter: Quarter,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            bu,
            year,
            half,
            quarter,
            feature_type: FeatureType::default(),
            impact: DEFAULT_IMPACT,
            effort: Effort::default(),
            dependencies: Vec::new(),
            status: None,
            attachments: Attachments::default(),
        }
    }

    /// With feature type
    #[inline]
    #[must_use]
    pub fn with_type(mut self, feature_type: FeatureType) -> Self {
        self.feature_type = feature_type;
        self
    }

    /// With business impact
    #[inline]
    #[must_use]
    pub fn with_impact(mut self, impact: u8) -> Self {
        self.impact = impact;
        self
    }

    /// With effort estimate
    #[inline]
    #[must_use]
    pub fn with_effort(mut self, effort: Effort) -> Self {
        self.effort = effort;
        self
    }

    /// With dependency on a team
    #[inline]
    #[must_use]
    pub fn depends_on(
        mut self,
        team: BusinessUnit,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.dependencies
            .push(DependencyInput::for_team(team, title, description));
        self
    }

    /// With raw dependency row
    #[inline]
    #[must_use]
    pub fn with_dependency_input(mut self, input: DependencyInput) -> Self {
        self.dependencies.push(input);
        self
    }

    /// With explicit status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// With attachment names
    #[inline]
    #[must_use]
    pub fn with_attachments(mut self, attachments: Attachments) -> Self {
        self.attachments = attachments;
        self
    }

    /// Validate every field
    ///
    /// `window`, when given, bounds the target year.
    ///
    /// # Errors
    /// First violated rule, checked in form order: title, description,
    /// impact, half/quarter, year window
    pub fn validate(&self, window: Option<YearWindow>) -> Result<ValidatedDraft, ValidationError> {
        required("title", &self.title)?;
        required("description", &self.description)?;

        if !(MIN_IMPACT..=MAX_IMPACT).contains(&self.impact) {
            return Err(ValidationError::ImpactOutOfRange(self.impact));
        }

        let timeline = Timeline::new(self.year, self.half, self.quarter)?;
        if let Some(window) = window {
            window.check(self.year)?;
        }

        let dependencies = dependency::resolve_inputs(&self.dependencies);

        Ok(ValidatedDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            bu: self.bu,
            timeline,
            feature_type: self.feature_type,
            impact: self.impact,
            effort: self.effort,
            dependencies,
            status: self.status,
            attachments: self.attachments.clone(),
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

/// Draft that passed validation; only obtainable from [`FeatureDraft::validate`]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedDraft {
    title: String,
    description: String,
    bu: BusinessUnit,
    timeline: Timeline,
    feature_type: FeatureType,
    impact: u8,
    effort: Effort,
    dependencies: Vec<Dependency>,
    status: Option<Status>,
    attachments: Attachments,
}

/// A feature request in the plan
///
/// Serializes flat, with the derived `dependent_teams` and
/// `dependency_count` next to the stored fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    id: FeatureId,
    title: String,
    description: String,
    bu: BusinessUnit,
    timeline: Timeline,
    feature_type: FeatureType,
    impact: u8,
    effort: Effort,
    dependency_details: Vec<Dependency>,
    rice_score: f64,
    competitor_score: u8,
    status: Status,
    created_date: DateTime<Utc>,
    attachments: Attachments,
}

#[derive(Serialize)]
struct FeatureRecord<'a> {
    id: FeatureId,
    title: &'a str,
    description: &'a str,
    bu: BusinessUnit,
    #[serde(flatten)]
    timeline: Timeline,
    #[serde(rename = "type")]
    feature_type: FeatureType,
    impact: u8,
    effort: Effort,
    dependency_details: &'a [Dependency],
    dependent_teams: Vec<BusinessUnit>,
    dependency_count: usize,
    rice_score: f64,
    competitor_score: u8,
    status: Status,
    created_date: DateTime<Utc>,
    #[serde(flatten)]
    attachments: &'a Attachments,
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FeatureRecord {
            id: self.id,
            title: &self.title,
            description: &self.description,
            bu: self.bu,
            timeline: self.timeline,
            feature_type: self.feature_type,
            impact: self.impact,
            effort: self.effort,
            dependency_details: &self.dependency_details,
            dependent_teams: self.dependent_teams(),
            dependency_count: self.dependency_count(),
            rice_score: self.rice_score,
            competitor_score: self.competitor_score,
            status: self.status,
            created_date: self.created_date,
            attachments: &self.attachments,
        }
        .serialize(serializer)
    }
}

impl Feature {
    /// Create record from a validated draft, always in Draft status
    #[must_use]
    pub fn new(id: FeatureId, created_date: DateTime<Utc>, draft: ValidatedDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            bu: draft.bu,
            timeline: draft.timeline,
            feature_type: draft.feature_type,
            impact: draft.impact,
            effort: draft.effort,
            dependency_details: draft.dependencies,
            rice_score: 0.0,
            competitor_score: 0,
            status: Status::Draft,
            created_date,
            attachments: draft.attachments,
        }
    }

    /// Replace every mutable field
    ///
    /// Keeps id, creation date and scores. A draft without status keeps the
    /// current status; unset attachment names keep the stored ones.
    pub fn apply(&mut self, draft: ValidatedDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.bu = draft.bu;
        self.timeline = draft.timeline;
        self.feature_type = draft.feature_type;
        self.impact = draft.impact;
        self.effort = draft.effort;
        self.dependency_details = draft.dependencies;
        if let Some(status) = draft.status {
            self.status = status;
        }
        self.attachments = self.attachments.merged(&draft.attachments);
    }

    /// Draft pre-filled with this record, for editing
    #[must_use]
    pub fn to_draft(&self) -> FeatureDraft {
        FeatureDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            bu: self.bu,
            year: self.timeline.year(),
            half: self.timeline.half(),
            quarter: self.timeline.quarter(),
            feature_type: self.feature_type,
            impact: self.impact,
            effort: self.effort,
            dependencies: self
                .dependency_details
                .iter()
                .cloned()
                .map(DependencyInput::from)
                .collect(),
            status: Some(self.status),
            attachments: self.attachments.clone(),
        }
    }

    /// Identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> FeatureId {
        self.id
    }

    /// Title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Owning business unit
    #[inline]
    #[must_use]
    pub fn bu(&self) -> BusinessUnit {
        self.bu
    }

    /// Target timeline
    #[inline]
    #[must_use]
    pub fn timeline(&self) -> Timeline {
        self.timeline
    }

    /// Target year
    #[inline]
    #[must_use]
    pub fn year(&self) -> u16 {
        self.timeline.year()
    }

    /// Size class
    #[inline]
    #[must_use]
    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    /// Business impact, 1 to 10
    #[inline]
    #[must_use]
    pub fn impact(&self) -> u8 {
        self.impact
    }

    /// Effort estimate
    #[inline]
    #[must_use]
    pub fn effort(&self) -> Effort {
        self.effort
    }

    /// Dependencies in insertion order
    #[inline]
    #[must_use]
    pub fn dependency_details(&self) -> &[Dependency] {
        &self.dependency_details
    }

    /// Number of dependencies
    #[inline]
    #[must_use]
    pub fn dependency_count(&self) -> usize {
        self.dependency_details.len()
    }

    /// Distinct dependent teams, derived from the dependency list
    #[must_use]
    pub fn dependent_teams(&self) -> Vec<BusinessUnit> {
        dependency::dependent_teams(&self.dependency_details)
    }

    /// Dependencies grouped by team
    #[must_use]
    pub fn dependencies_by_team(&self) -> IndexMap<BusinessUnit, Vec<&Dependency>> {
        dependency::dependencies_by_team(&self.dependency_details)
    }

    /// RICE score, 0 until scored
    #[inline]
    #[must_use]
    pub fn rice_score(&self) -> f64 {
        self.rice_score
    }

    /// Competitor pressure score, 0 to 10
    #[inline]
    #[must_use]
    pub fn competitor_score(&self) -> u8 {
        self.competitor_score
    }

    /// Lifecycle status
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Creation timestamp
    #[inline]
    #[must_use]
    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    /// Creation timestamp as `YYYY-MM-DD HH:MM:SS`
    #[must_use]
    pub fn created_date_label(&self) -> String {
        self.created_date.format(CREATED_DATE_FORMAT).to_string()
    }

    /// Attachment names
    #[inline]
    #[must_use]
    pub fn attachments(&self) -> &Attachments {
        &self.attachments
    }

    /// Overwrite status, returning the previous one
    pub fn set_status(&mut self, status: Status) -> Status {
        std::mem::replace(&mut self.status, status)
    }

    /// Store RICE score
    pub fn set_rice_score(&mut self, score: f64) {
        self.rice_score = score;
    }

    /// Store competitor score
    pub fn set_competitor_score(&mut self, score: u8) {
        self.competitor_score = score;
    }
}
