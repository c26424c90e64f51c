//! Feature repository
//!
//! Owns the feature records in insertion order plus the id sequence.
//! Ids come from a monotonic counter: they are never reused after a
//! delete, and a rejected draft does not consume one.

use crate::error::PlannerError;
use crate::filter::FeatureFilter;
use aop_model::{Feature, FeatureDraft, FeatureId, YearWindow};
use chrono::{DateTime, Utc};
use std::cmp::Reverse;

/// In-memory feature collection
#[derive(Debug, Clone)]
pub struct FeatureRepository {
    features: Vec<Feature>,
    next_seq: u32,
    year_window: Option<YearWindow>,
}

impl FeatureRepository {
    /// Empty repository, ids start at `F-0001`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            features: Vec::new(),
            next_seq: 1,
            year_window: None,
        }
    }

    /// Restrict target years on create and update
    #[inline]
    #[must_use]
    pub fn with_year_window(mut self, window: Option<YearWindow>) -> Self {
        self.year_window = window;
        self
    }

    /// Validate `draft` and store it as a new feature created now
    ///
    /// # Errors
    /// `PlannerError::Validation` when the draft is rejected
    pub fn create(&mut self, draft: &FeatureDraft) -> Result<&Feature, PlannerError> {
        self.create_at(draft, Utc::now())
    }

    /// Same as [`create`](Self::create) with an explicit creation time
    ///
    /// # Errors
    /// `PlannerError::Validation` when the draft is rejected
    pub fn create_at(
        &mut self,
        draft: &FeatureDraft,
        created_date: DateTime<Utc>,
    ) -> Result<&Feature, PlannerError> {
        let validated = draft.validate(self.year_window)?;
        let id = FeatureId::from_sequence(self.next_seq);
        self.next_seq += 1;

        let index = self.features.len();
        self.features.push(Feature::new(id, created_date, validated));
        Ok(&self.features[index])
    }

    /// Replace the mutable fields of an existing feature
    ///
    /// # Errors
    /// `PlannerError::NotFound` for an unknown id,
    /// `PlannerError::Validation` when the draft is rejected
    pub fn update(
        &mut self,
        id: FeatureId,
        draft: &FeatureDraft,
    ) -> Result<&Feature, PlannerError> {
        let index = self.position(id).ok_or(PlannerError::NotFound(id))?;
        let validated = draft.validate(self.year_window)?;
        let feature = &mut self.features[index];
        feature.apply(validated);
        Ok(&*feature)
    }

    /// Remove a feature, returning it if it existed
    pub fn delete(&mut self, id: FeatureId) -> Option<Feature> {
        self.position(id).map(|index| self.features.remove(index))
    }

    /// Look up a feature
    ///
    /// # Errors
    /// `PlannerError::NotFound` for an unknown id
    pub fn get(&self, id: FeatureId) -> Result<&Feature, PlannerError> {
        self.features
            .iter()
            .find(|f| f.id() == id)
            .ok_or(PlannerError::NotFound(id))
    }

    pub(crate) fn get_mut(&mut self, id: FeatureId) -> Result<&mut Feature, PlannerError> {
        self.features
            .iter_mut()
            .find(|f| f.id() == id)
            .ok_or(PlannerError::NotFound(id))
    }

    /// Feature exists
    #[inline]
    #[must_use]
    pub fn contains(&self, id: FeatureId) -> bool {
        self.position(id).is_some()
    }

    /// Features matching `filter`, in insertion order
    #[must_use]
    pub fn list(&self, filter: &FeatureFilter) -> Vec<&Feature> {
        self.features.iter().filter(|f| filter.matches(f)).collect()
    }

    /// Newest `limit` features, most recent first
    #[must_use]
    pub fn recent(&self, limit: usize) -> Vec<&Feature> {
        let mut features: Vec<&Feature> = self.features.iter().collect();
        features.sort_by_key(|f| Reverse((f.created_date(), f.id())));
        features.truncate(limit);
        features
    }

    /// All features in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Feature> + '_ {
        self.features.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Feature> + '_ {
        self.features.iter_mut()
    }

    /// Number of features
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// No features
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Id the next successful create will receive
    #[inline]
    #[must_use]
    pub fn next_id(&self) -> FeatureId {
        FeatureId::from_sequence(self.next_seq)
    }

    /// Drop every feature and restart ids at `F-0001`
    pub fn reset(&mut self) {
        self.features.clear();
        self.next_seq = 1;
    }

    /// Replace the collection wholesale and move the sequence past its ids
    pub(crate) fn replace_all(&mut self, features: Vec<Feature>) {
        self.next_seq = features
            .iter()
            .map(|f| f.id().sequence())
            .max()
            .map_or(1, |max| max + 1);
        self.features = features;
    }

    fn position(&self, id: FeatureId) -> Option<usize> {
        self.features.iter().position(|f| f.id() == id)
    }
}

impl Default for FeatureRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aop_model::{BusinessUnit, Half, Quarter, Status};
    use chrono::TimeZone;

    fn draft(title: &str) -> FeatureDraft {
        FeatureDraft::new(title, "Details", BusinessUnit::Cx, 2027, Half::H1, Quarter::Q2)
    }

    #[test]
    fn ids_are_sequential_and_not_reused() {
        let mut repo = FeatureRepository::new();
        let first = repo.create(&draft("One")).unwrap().id();
        assert_eq!(first.to_string(), "F-0001");
        assert!(repo.delete(first).is_some());

        let second = repo.create(&draft("Two")).unwrap().id();
        assert_eq!(second.to_string(), "F-0002");
    }

    #[test]
    fn rejected_draft_consumes_no_id() {
        let mut repo = FeatureRepository::new();
        assert!(repo.create(&draft("  ")).is_err());
        assert!(repo.is_empty());
        assert_eq!(repo.next_id(), FeatureId::from_sequence(1));
    }

    #[test]
    fn update_unknown_is_not_found() {
        let mut repo = FeatureRepository::new();
        let err = repo.update(FeatureId::from_sequence(9), &draft("X")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn rejected_update_leaves_record() {
        let mut repo = FeatureRepository::new();
        let id = repo.create(&draft("Keep me")).unwrap().id();
        assert!(repo.update(id, &draft("Keep me").with_impact(11)).is_err());
        assert_eq!(repo.get(id).unwrap().impact(), 7);
    }

    #[test]
    fn year_window_applies() {
        let mut repo = FeatureRepository::new().with_year_window(Some(YearWindow::new(2028, 2032)));
        assert!(repo.create(&draft("Too early")).is_err());
        let mut ok = draft("In range");
        ok.year = 2029;
        assert!(repo.create(&ok).is_ok());
    }

    #[test]
    fn recent_orders_newest_first() {
        let mut repo = FeatureRepository::new();
        for (title, day) in [("Old", 1), ("Newest", 9), ("Middle", 5)] {
            let at = Utc.with_ymd_and_hms(2026, 3, day, 8, 0, 0).unwrap();
            repo.create_at(&draft(title), at).unwrap();
        }
        let titles: Vec<&str> = repo.recent(2).into_iter().map(Feature::title).collect();
        assert_eq!(titles, vec!["Newest", "Middle"]);
    }

    #[test]
    fn replace_all_moves_sequence() {
        let mut source = FeatureRepository::new();
        for title in ["A", "B", "C"] {
            source.create(&draft(title)).unwrap();
        }
        let mut repo = FeatureRepository::new();
        repo.replace_all(source.iter().cloned().collect());
        assert_eq!(repo.len(), 3);
        assert_eq!(repo.next_id().to_string(), "F-0004");

        repo.reset();
        assert!(repo.is_empty());
        assert_eq!(repo.next_id().to_string(), "F-0001");
    }

    #[test]
    fn list_filters_by_status() {
        let mut repo = FeatureRepository::new();
        repo.create(&draft("Plain")).unwrap();
        let sent = repo.create(&draft("Sent")).unwrap().id();
        repo.update(sent, &draft("Sent").with_status(Status::Submitted)).unwrap();
        let submitted = repo.list(&FeatureFilter::all().with_status(Status::Submitted));
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].title(), "Sent");
        assert_eq!(repo.list(&FeatureFilter::all()).len(), 2);
    }
}
