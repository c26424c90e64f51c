use aop_cli::commands::{demo, score, summary, tally};
use aop_cli::{load_plan, OutputFormat};
use aop_core::{PlannerConfig, PolicyKind, RiceWeights};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const PLAN: &str = r#"{
    "features": [
        {"title": "AI Customer Dashboard", "description": "automation", "bu": "CX BU",
         "year": 2027, "half": "H1", "quarter": "Q2", "impact": 9, "effort": "L",
         "dependency_details": [
            {"team": "Platform BU", "title": "Hosting"},
            {"team": null, "title": "API", "description": "Gateway access"},
            {"team": "AI BU", "title": "Model"},
            {"team": "Platform BU", "title": "Storage"}
         ]},
        {"title": "Payroll export", "description": "Quarterly close", "bu": "EX BU",
         "year": 2027, "half": "H2", "quarter": "Q3", "type": "Small Rock",
         "impact": 3, "effort": "XL"}
    ],
    "votes": [
        {"feature_id": "F-0001", "voter": "AI BU PM Head", "decision": "approve"},
        {"feature_id": "F-0001", "voter": "AI BU PM Head", "decision": "reject"},
        {"feature_id": "F-0001", "voter": "EX BU PM Head", "decision": "approve"},
        {"feature_id": "F-0002", "voter": "CE BU PM Head", "decision": "reject"}
    ]
}"#;

fn plan_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PLAN.as_bytes()).unwrap();
    file
}

#[test]
fn test_demo_json_has_summary_and_ranking() {
    let out = demo(PlannerConfig::default(), OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(value["summary"]["total"], 3);
    assert_eq!(value["summary"]["hero_big_rocks"], 2);
    assert_eq!(value["ranking"].as_array().unwrap().len(), 3);
    assert_eq!(value["ranking"][0]["rank"], 1);
}

#[test]
fn test_score_ranks_by_rice() {
    let file = plan_file();
    let plan = load_plan(file.path()).unwrap();
    let out = score(PlannerConfig::default(), &plan, None, OutputFormat::Json).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(rows[0]["id"], "F-0001");
    assert_eq!(rows[0]["rice_score"], 7448.0);
    assert_eq!(rows[0]["competitor_score"], 8);
    assert_eq!(rows[0]["dependent_teams"], serde_json::json!(["Platform BU", "AI BU"]));
    assert_eq!(rows[0]["dependency_count"], 3);
    assert_eq!(rows[1]["dependent_teams"], serde_json::json!([]));
    assert_eq!(rows[1]["id"], "F-0002");
    assert_eq!(rows[1]["type"], "Small Rock");
}

#[test]
fn test_score_zero_effort_weight_fails() {
    let file = plan_file();
    let plan = load_plan(file.path()).unwrap();
    let weights: RiceWeights = "0.4,0.3,0.2,0".parse().unwrap();
    let err =
        score(PlannerConfig::default(), &plan, Some(weights), OutputFormat::Text).unwrap_err();
    assert!(err.to_string().contains("RICE scoring failed"));
}

#[test]
fn test_tally_append_policy_counts_repeats() {
    let file = plan_file();
    let plan = load_plan(file.path()).unwrap();
    let out = tally(PlannerConfig::default(), &plan, None, None, OutputFormat::Json).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(rows[0]["approve"], 2);
    assert_eq!(rows[0]["reject"], 1);
    assert_eq!(rows[0]["status"], "Approved");
    assert_eq!(rows[1]["status"], "Under Review");
}

#[test]
fn test_tally_last_policy_with_lower_threshold() {
    let file = plan_file();
    let plan = load_plan(file.path()).unwrap();
    let out = tally(
        PlannerConfig::default(),
        &plan,
        Some(PolicyKind::Last),
        Some(2),
        OutputFormat::Json,
    )
    .unwrap();
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(rows[0]["approve"], 1);
    assert_eq!(rows[0]["reject"], 1);
    assert_eq!(rows[0]["status"], "Rejected");
}

#[test]
fn test_summary_text() {
    let file = plan_file();
    let plan = load_plan(file.path()).unwrap();
    let out = summary(PlannerConfig::default(), &plan, OutputFormat::Text).unwrap();
    assert!(out.starts_with("Total Features: 2"));
    assert!(out.contains("Approved: 1"));
}

#[test]
fn test_missing_plan_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_plan(&dir.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read plan file"));
}
