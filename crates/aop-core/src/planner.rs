//! AOP planner
//!
//! The single owned value holding the feature repository, the ballot box
//! and the configuration. Every operation either completes or returns an
//! error without touching state.

use crate::config::PlannerConfig;
use crate::demo::demo_features;
use crate::error::PlannerError;
use crate::filter::FeatureFilter;
use crate::plan::PlanFile;
use crate::repository::FeatureRepository;
use crate::summary::{PlanSummary, VotingBoard};
use aop_model::{BusinessUnit, Dependency, Feature, FeatureDraft, FeatureId};
use aop_scoring::{competitor_score, rice_score, RiceWeights};
use aop_voting::{
    Ballot, BallotBox, DecisionRule, PolicyKind, VoteDecision, VoteOutcome, VoteTally, VoterId,
};
use indexmap::IndexMap;

/// Feature intake, scoring and voting for one plan
#[derive(Debug)]
pub struct Planner {
    config: PlannerConfig,
    repository: FeatureRepository,
    ballots: BallotBox,
}

impl Planner {
    /// Create an empty planner
    ///
    /// # Errors
    /// `PlannerError::Config` when the configuration is invalid
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        let ballots = config.ballot_box()?;
        let repository = FeatureRepository::new().with_year_window(config.year_window);
        tracing::debug!(
            threshold = config.decision_threshold,
            policy = %config.vote_policy,
            "Planner created"
        );
        Ok(Self {
            config,
            repository,
            ballots,
        })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Feature records
    #[inline]
    #[must_use]
    pub fn repository(&self) -> &FeatureRepository {
        &self.repository
    }

    /// Vote state
    #[inline]
    #[must_use]
    pub fn ballot_box(&self) -> &BallotBox {
        &self.ballots
    }

    // ---- Feature CRUD ----

    /// Submit a new feature
    ///
    /// # Errors
    /// `PlannerError::Validation` when the draft is rejected
    pub fn create(&mut self, draft: &FeatureDraft) -> Result<&Feature, PlannerError> {
        match self.repository.create(draft) {
            Ok(feature) => {
                tracing::info!(
                    id = %feature.id(),
                    bu = %feature.bu(),
                    dependencies = feature.dependency_count(),
                    "Feature created"
                );
                Ok(feature)
            }
            Err(e) => {
                tracing::warn!(title = %draft.title, error = %e, "Feature rejected");
                Err(e)
            }
        }
    }

    /// Replace a feature's fields, keeping id, creation date and scores
    ///
    /// # Errors
    /// `PlannerError::NotFound` or `PlannerError::Validation`
    pub fn update(
        &mut self,
        id: FeatureId,
        draft: &FeatureDraft,
    ) -> Result<&Feature, PlannerError> {
        let feature = self.repository.update(id, draft)?;
        tracing::info!(%id, status = %feature.status(), "Feature updated");
        Ok(feature)
    }

    /// Remove a feature and its votes; `false` when it did not exist
    pub fn delete(&mut self, id: FeatureId) -> bool {
        let removed = self.repository.delete(id).is_some();
        let had_votes = self.ballots.discard(id);
        if removed {
            tracing::info!(%id, had_votes, "Feature deleted");
        } else {
            tracing::debug!(%id, "Delete of unknown feature ignored");
        }
        removed
    }

    /// Look up a feature
    ///
    /// # Errors
    /// `PlannerError::NotFound` for an unknown id
    pub fn get(&self, id: FeatureId) -> Result<&Feature, PlannerError> {
        self.repository.get(id)
    }

    /// Features matching `filter`, in submission order
    #[must_use]
    pub fn list(&self, filter: &FeatureFilter) -> Vec<&Feature> {
        self.repository.list(filter)
    }

    /// Newest features, up to the configured recent limit
    #[must_use]
    pub fn recent(&self) -> Vec<&Feature> {
        self.repository.recent(self.config.recent_limit)
    }

    /// Drop all features and votes; ids restart at `F-0001`
    pub fn reset(&mut self) {
        self.repository.reset();
        self.ballots.clear();
        tracing::info!("Plan reset");
    }

    /// Replace the plan with the three demo features and clear votes
    ///
    /// # Errors
    /// `PlannerError::Validation` if the built-in demo records fail to validate
    pub fn load_demo(&mut self) -> Result<usize, PlannerError> {
        let features = demo_features()?;
        let count = features.len();
        self.repository.replace_all(features);
        self.ballots.clear();
        tracing::info!(count, next_id = %self.repository.next_id(), "Demo plan loaded");
        Ok(count)
    }

    /// Create every draft of `plan`, then replay its votes
    ///
    /// Drafts are all validated and vote targets all resolved before
    /// anything is stored.
    ///
    /// # Errors
    /// `PlannerError::Validation` for a rejected draft,
    /// `PlannerError::NotFound` for a vote on a feature the import does not create
    pub fn import(&mut self, plan: &PlanFile) -> Result<Vec<FeatureId>, PlannerError> {
        let window = self.config.year_window;
        for draft in &plan.features {
            draft.validate(window)?;
        }

        let first = self.repository.next_id().sequence();
        let planned: Vec<FeatureId> = (first..)
            .take(plan.features.len())
            .map(FeatureId::from_sequence)
            .collect();
        for vote in &plan.votes {
            if !planned.contains(&vote.feature_id) && !self.repository.contains(vote.feature_id) {
                return Err(PlannerError::NotFound(vote.feature_id));
            }
        }

        let mut ids = Vec::with_capacity(plan.features.len());
        for draft in &plan.features {
            ids.push(self.repository.create(draft)?.id());
        }
        for vote in &plan.votes {
            self.cast_ballot(
                vote.feature_id,
                Ballot::new(vote.voter.clone(), vote.decision),
            )?;
        }

        tracing::info!(
            features = ids.len(),
            votes = plan.votes.len(),
            "Plan imported"
        );
        Ok(ids)
    }

    // ---- Voting ----

    /// Record a vote and write the derived status back to the feature
    ///
    /// # Errors
    /// `PlannerError::NotFound` for an unknown feature,
    /// `PlannerError::Validation` for a blank voter
    pub fn cast_vote(
        &mut self,
        feature_id: FeatureId,
        voter: &str,
        decision: VoteDecision,
    ) -> Result<VoteOutcome, PlannerError> {
        self.repository.get(feature_id)?;
        let voter = VoterId::new(voter)?;
        self.cast_ballot(feature_id, Ballot::new(voter, decision))
    }

    /// Record an already validated ballot
    ///
    /// # Errors
    /// `PlannerError::NotFound` for an unknown feature
    pub fn cast_ballot(
        &mut self,
        feature_id: FeatureId,
        ballot: Ballot,
    ) -> Result<VoteOutcome, PlannerError> {
        let feature = self.repository.get_mut(feature_id)?;
        let voter = ballot.voter.clone();
        let outcome = self.ballots.cast(feature_id, ballot, feature.status());
        feature.set_status(outcome.status);

        tracing::info!(
            feature = %feature_id,
            %voter,
            approve = outcome.tally.approve,
            reject = outcome.tally.reject,
            status = %outcome.status,
            "Vote recorded"
        );
        Ok(outcome)
    }

    /// Current tally, zero for a feature without votes
    ///
    /// # Errors
    /// `PlannerError::NotFound` for an unknown feature
    pub fn tally(&self, feature_id: FeatureId) -> Result<VoteTally, PlannerError> {
        self.repository.get(feature_id)?;
        Ok(self.ballots.tally(feature_id))
    }

    /// Ballots kept for a feature
    ///
    /// # Errors
    /// `PlannerError::NotFound` for an unknown feature
    pub fn ballots(&self, feature_id: FeatureId) -> Result<&[Ballot], PlannerError> {
        self.repository.get(feature_id)?;
        Ok(self.ballots.ballots(feature_id))
    }

    /// Tallies of every feature that has votes, in id order
    #[must_use]
    pub fn vote_results(&self) -> Vec<(FeatureId, VoteTally)> {
        self.ballots.results().collect()
    }

    /// Decision rule in force
    #[inline]
    #[must_use]
    pub fn decision_rule(&self) -> DecisionRule {
        self.ballots.rule()
    }

    /// Eligible voter names, one PM head per business unit
    #[must_use]
    pub fn pm_heads() -> Vec<String> {
        BusinessUnit::ALL.iter().map(|bu| bu.pm_head()).collect()
    }

    // ---- Scoring ----

    /// Score every feature for competitor pressure; returns features scored
    pub fn run_competitor_analysis(&mut self) -> usize {
        let keywords = &self.config.competitor_keywords;
        let mut scored = 0;
        for feature in self.repository.iter_mut() {
            let score = competitor_score(feature.title(), feature.description(), keywords);
            feature.set_competitor_score(score);
            scored += 1;
        }
        tracing::info!(scored, keywords = keywords.len(), "Competitor analysis completed");
        scored
    }

    /// Score every feature with RICE; returns features scored
    ///
    /// All scores are computed before any is stored, so a failure leaves
    /// every previous score in place.
    ///
    /// # Errors
    /// `PlannerError::Scoring` when the effort divisor is zero
    pub fn run_rice_scoring(&mut self, weights: &RiceWeights) -> Result<usize, PlannerError> {
        let scores = self
            .repository
            .iter()
            .map(|f| rice_score(f.impact(), f.effort(), weights))
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|e| {
                tracing::warn!(%weights, error = %e, "RICE scoring aborted");
                e
            })?;

        let scored = scores.len();
        for (feature, score) in self.repository.iter_mut().zip(scores) {
            feature.set_rice_score(score);
        }
        tracing::info!(scored, %weights, "RICE scoring completed");
        Ok(scored)
    }

    /// Run both scorers with the configured weights
    ///
    /// # Errors
    /// `PlannerError::Scoring` from the RICE pass; competitor scores are
    /// still updated in that case
    pub fn score_all(&mut self) -> Result<usize, PlannerError> {
        self.run_competitor_analysis();
        let weights = self.config.rice_weights;
        self.run_rice_scoring(&weights)
    }

    /// Features by descending RICE score, ties by id
    #[must_use]
    pub fn ranked_by_rice(&self, limit: usize) -> Vec<&Feature> {
        let mut ranked: Vec<&Feature> = self.repository.iter().collect();
        ranked.sort_by(|a, b| {
            b.rice_score()
                .total_cmp(&a.rice_score())
                .then_with(|| a.id().cmp(&b.id()))
        });
        ranked.truncate(limit);
        ranked
    }

    /// Features still open for analysis (Draft, Submitted, Under Review)
    #[must_use]
    pub fn analysis_candidates(&self) -> Vec<&Feature> {
        self.repository
            .iter()
            .filter(|f| f.status().is_pending())
            .collect()
    }

    // ---- Reporting ----

    /// Headline counts
    #[must_use]
    pub fn summary(&self) -> PlanSummary {
        PlanSummary::from_features(self.repository.iter())
    }

    /// Features grouped by type for review
    #[must_use]
    pub fn voting_board(&self) -> VotingBoard<'_> {
        VotingBoard::from_features(self.repository.iter())
    }

    /// A feature's dependencies grouped by team
    ///
    /// # Errors
    /// `PlannerError::NotFound` for an unknown feature
    pub fn dependencies_by_team(
        &self,
        feature_id: FeatureId,
    ) -> Result<IndexMap<BusinessUnit, Vec<&Dependency>>, PlannerError> {
        Ok(self.repository.get(feature_id)?.dependencies_by_team())
    }
}

impl Default for Planner {
    fn default() -> Self {
        let config = PlannerConfig::default();
        Self {
            repository: FeatureRepository::new().with_year_window(config.year_window),
            ballots: BallotBox::with_policy(PolicyKind::default().build(), DecisionRule::default()),
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aop_model::{Half, Quarter, Status};

    fn draft(title: &str) -> FeatureDraft {
        FeatureDraft::new(title, "Details", BusinessUnit::Ai, 2027, Half::H2, Quarter::Q3)
    }

    #[test]
    fn vote_on_missing_feature_records_nothing() {
        let mut planner = Planner::default();
        let err = planner
            .cast_vote(FeatureId::from_sequence(1), "AI BU PM Head", VoteDecision::Approve)
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(planner.ballot_box().is_empty());
    }

    #[test]
    fn blank_voter_rejected() {
        let mut planner = Planner::default();
        let id = planner.create(&draft("Voice search")).unwrap().id();
        let err = planner.cast_vote(id, "   ", VoteDecision::Reject).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(planner.tally(id).unwrap(), VoteTally::default());
        assert_eq!(planner.get(id).unwrap().status(), Status::Draft);
    }

    #[test]
    fn vote_writes_status_back() {
        let mut planner = Planner::default();
        let id = planner.create(&draft("Voice search")).unwrap().id();
        let outcome = planner.cast_vote(id, "EX BU PM Head", VoteDecision::Approve).unwrap();
        assert_eq!(outcome.status, Status::UnderReview);
        assert_eq!(planner.get(id).unwrap().status(), Status::UnderReview);
    }

    #[test]
    fn delete_discards_votes() {
        let mut planner = Planner::default();
        let id = planner.create(&draft("Voice search")).unwrap().id();
        planner.cast_vote(id, "EX BU PM Head", VoteDecision::Approve).unwrap();

        assert!(planner.delete(id));
        assert!(!planner.delete(id));
        assert!(planner.vote_results().is_empty());
        assert!(planner.tally(id).unwrap_err().is_not_found());
    }

    #[test]
    fn pm_heads_cover_every_unit() {
        let heads = Planner::pm_heads();
        assert_eq!(heads.len(), 5);
        assert_eq!(heads[4], "Platform BU PM Head");
    }

    #[test]
    fn import_rejects_dangling_vote_before_storing() {
        let mut planner = Planner::default();
        let plan = PlanFile::from_json_str(
            r#"{
                "features": [{"title": "A", "description": "B", "bu": "AI BU",
                              "year": 2027, "half": "H1", "quarter": "Q1"}],
                "votes": [{"feature_id": "F-0002", "voter": "CX BU PM Head", "decision": "approve"}]
            }"#,
        )
        .unwrap();

        let err = planner.import(&plan).unwrap_err();
        assert!(err.is_not_found());
        assert!(planner.repository().is_empty());
    }
}
