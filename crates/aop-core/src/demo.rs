//! Demo plan with three sample features
//!
//! Mirrors the sample data shipped with the intake tool: fixed ids
//! `F-0001..F-0003`, preset scores and creation dates.

use aop_model::{
    Attachments, BusinessUnit, Effort, Feature, FeatureDraft, FeatureId, FeatureType, Half,
    Quarter, Status, ValidationError, CREATED_DATE_FORMAT,
};
use chrono::{DateTime, NaiveDateTime, Utc};

struct DemoFeature {
    draft: FeatureDraft,
    status: Status,
    rice_score: f64,
    competitor_score: u8,
    created: &'static str,
}

fn attachments(prd: &str, mockup: Option<&str>, submitted_by: &str) -> Attachments {
    Attachments {
        prd_file: Some(prd.to_string()),
        mockup_file: mockup.map(str::to_string),
        submitted_by: Some(submitted_by.to_string()),
    }
}

fn demo_set() -> [DemoFeature; 3] {
    [
        DemoFeature {
            draft: FeatureDraft::new(
                "AI-Powered Customer Segmentation",
                "Advanced ML model for real-time customer segmentation using behavioral data",
                BusinessUnit::Ai,
                2025,
                Half::H1,
                Quarter::Q1,
            )
            .with_type(FeatureType::HeroBigRock)
            .with_impact(9)
            .with_effort(Effort::L)
            .depends_on(
                BusinessUnit::Cx,
                "Real-time Customer Data Feed",
                "Need access to real-time customer interaction data from CX systems",
            )
            .depends_on(
                BusinessUnit::Cx,
                "Customer Feedback Integration",
                "Integration with CX feedback system for model training",
            )
            .depends_on(
                BusinessUnit::Platform,
                "ML Model Serving Infrastructure",
                "Requires GPU-enabled infrastructure for model serving and inference",
            )
            .depends_on(
                BusinessUnit::Platform,
                "Data Pipeline Setup",
                "Need data pipeline to process customer data in real-time",
            )
            .with_attachments(attachments(
                "prd_ai_segmentation.pdf",
                Some("mockup_segmentation_dashboard.png"),
                "AI Team",
            )),
            status: Status::UnderReview,
            rice_score: 285.6,
            competitor_score: 8,
            created: "2024-01-15 10:30:00",
        },
        DemoFeature {
            draft: FeatureDraft::new(
                "Unified Customer Dashboard",
                "Single pane of glass for customer success metrics across all touchpoints",
                BusinessUnit::Cx,
                2025,
                Half::H1,
                Quarter::Q2,
            )
            .with_type(FeatureType::BigRock)
            .with_impact(8)
            .with_effort(Effort::XL)
            .depends_on(
                BusinessUnit::Platform,
                "API Gateway Integration",
                "Need Platform BU to expose unified APIs from different backend systems",
            )
            .depends_on(
                BusinessUnit::Platform,
                "Authentication Service",
                "Integration with company-wide authentication service",
            )
            .depends_on(
                BusinessUnit::Ex,
                "Employee Performance Data",
                "Access to EX employee performance metrics for customer success correlation",
            )
            .depends_on(
                BusinessUnit::Ex,
                "Support Team Metrics",
                "Real-time metrics from support team performance",
            )
            .depends_on(
                BusinessUnit::Ai,
                "Predictive Analytics",
                "AI models for predicting customer churn and satisfaction",
            )
            .with_attachments(attachments(
                "prd_customer_dashboard.pdf",
                Some("mockup_dashboard_v1.fig"),
                "CX Team",
            )),
            status: Status::Submitted,
            rice_score: 192.3,
            competitor_score: 7,
            created: "2024-01-16 14:20:00",
        },
        DemoFeature {
            draft: FeatureDraft::new(
                "Employee Engagement Portal",
                "Central portal for employee feedback, recognition, and engagement tracking",
                BusinessUnit::Ex,
                2025,
                Half::H2,
                Quarter::Q3,
            )
            .with_type(FeatureType::HeroBigRock)
            .with_impact(7)
            .with_effort(Effort::L)
            .depends_on(
                BusinessUnit::Platform,
                "Authentication & Authorization",
                "Integrate with company SSO and implement role-based access control",
            )
            .depends_on(
                BusinessUnit::Platform,
                "Database Setup",
                "Need dedicated database for employee engagement data",
            )
            .depends_on(
                BusinessUnit::Ce,
                "Customer Feedback Integration",
                "Link employee engagement scores with customer satisfaction metrics",
            )
            .depends_on(
                BusinessUnit::Ce,
                "NPS Data Sync",
                "Sync Net Promoter Score data with employee performance",
            )
            .depends_on(
                BusinessUnit::Ai,
                "Sentiment Analysis",
                "AI-powered sentiment analysis on employee feedback",
            )
            .with_attachments(attachments("prd_employee_portal.pdf", None, "EX Team")),
            status: Status::Draft,
            rice_score: 178.5,
            competitor_score: 6,
            created: "2024-01-17 09:15:00",
        },
    ]
}

fn parse_created(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    NaiveDateTime::parse_from_str(value, CREATED_DATE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| ValidationError::UnknownLabel {
            kind: "created date",
            value: value.to_string(),
        })
}

/// The three demo features, ids `F-0001..F-0003`
///
/// Target years are not checked against any year window.
///
/// # Errors
/// Only if the built-in records stop validating
pub fn demo_features() -> Result<Vec<Feature>, ValidationError> {
    demo_set()
        .into_iter()
        .zip(1u32..)
        .map(|(demo, seq)| {
            let validated = demo.draft.validate(None)?;
            let mut feature = Feature::new(
                FeatureId::from_sequence(seq),
                parse_created(demo.created)?,
                validated,
            );
            feature.set_status(demo.status);
            feature.set_rice_score(demo.rice_score);
            feature.set_competitor_score(demo.competitor_score);
            Ok(feature)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_features_with_fixed_ids() {
        let features = demo_features().unwrap();
        let ids: Vec<String> = features.iter().map(|f| f.id().to_string()).collect();
        assert_eq!(ids, vec!["F-0001", "F-0002", "F-0003"]);
    }

    #[test]
    fn dependencies_and_teams() {
        let features = demo_features().unwrap();
        assert_eq!(features[0].dependency_count(), 4);
        assert_eq!(
            features[0].dependent_teams(),
            vec![BusinessUnit::Cx, BusinessUnit::Platform]
        );
        assert_eq!(
            features[2].dependent_teams(),
            vec![BusinessUnit::Platform, BusinessUnit::Ce, BusinessUnit::Ai]
        );
    }

    #[test]
    fn preset_scores_dates_and_files() {
        let features = demo_features().unwrap();
        let portal = &features[2];
        assert!((portal.rice_score() - 178.5).abs() < f64::EPSILON);
        assert_eq!(portal.competitor_score(), 6);
        assert_eq!(portal.created_date_label(), "2024-01-17 09:15:00");
        assert_eq!(portal.attachments().mockup_file, None);
        assert_eq!(features[0].status(), Status::UnderReview);
    }
}
