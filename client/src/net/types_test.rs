use super::*;

// =============================================================
// Request wire shapes
// =============================================================

#[test]
fn hashtags_request_serializes_expected_keys() {
    let req = HashtagsRequest {
        industry: "Healthcare".to_owned(),
        skills: vec!["frontend, design".to_owned(), "ml".to_owned()],
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "industry": "Healthcare",
            "skills": ["frontend, design", "ml"],
        })
    );
}

#[test]
fn ideas_request_serializes_all_four_quadrant_groups() {
    let req = IdeasRequest {
        industry: "Healthcare".to_owned(),
        pain_points: vec!["long waits".to_owned()],
        ideas: vec![],
        goals: vec!["reduce stress".to_owned()],
        constraints: vec!["no budget".to_owned()],
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["pain_points"], serde_json::json!(["long waits"]));
    assert_eq!(value["ideas"], serde_json::json!([]));
    assert_eq!(value["goals"], serde_json::json!(["reduce stress"]));
    assert_eq!(value["constraints"], serde_json::json!(["no budget"]));
}

#[test]
fn plan_request_serializes_normalized_members() {
    let req = PlanRequest {
        industry: "Healthcare".to_owned(),
        team_size: 2,
        team_members: vec![PlanTeamMember {
            name: "Alice".to_owned(),
            skills: vec!["frontend".to_owned(), "design".to_owned()],
        }],
        selected_idea: "Idea 1: app".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["team_size"], 2);
    assert_eq!(value["team_members"][0]["skills"], serde_json::json!(["frontend", "design"]));
    assert_eq!(value["selected_idea"], "Idea 1: app");
}

// =============================================================
// Response parsing
// =============================================================

#[test]
fn hashtags_response_tolerates_missing_trends() {
    let resp: HashtagsResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.trends, None);
}

#[test]
fn ideas_response_exposes_string_payload() {
    let resp: IdeasResponse = serde_json::from_value(serde_json::json!({"ideas": "Idea 1: x"})).unwrap();
    assert_eq!(resp.idea_text(), Some("Idea 1: x"));
}

#[test]
fn ideas_response_rejects_missing_payload() {
    let resp: IdeasResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.idea_text(), None);
}

#[test]
fn ideas_response_rejects_non_string_payload() {
    let resp: IdeasResponse = serde_json::from_value(serde_json::json!({"ideas": ["a", "b"]})).unwrap();
    assert_eq!(resp.idea_text(), None);
}

#[test]
fn ideas_response_rejects_blank_payload() {
    let resp: IdeasResponse = serde_json::from_value(serde_json::json!({"ideas": "  \n "})).unwrap();
    assert_eq!(resp.idea_text(), None);
}

#[test]
fn plan_response_reads_file_url() {
    let resp: PlanResponse =
        serde_json::from_value(serde_json::json!({"file_url": "../generated_docs/plan.pdf"})).unwrap();
    assert_eq!(resp.file_url.as_deref(), Some("../generated_docs/plan.pdf"));
}
