use super::*;

// =============================================================
// Skills normalization
// =============================================================

#[test]
fn raw_skills_split_on_commas_and_trim() {
    let skills = Skills::Raw("x, y ,z".to_owned());
    assert_eq!(skills.normalize(), vec!["x".to_owned(), "y".to_owned(), "z".to_owned()]);
}

#[test]
fn raw_skills_drop_empty_segments() {
    let skills = Skills::Raw(" , frontend,,  ".to_owned());
    assert_eq!(skills.normalize(), vec!["frontend".to_owned()]);
}

#[test]
fn listed_skills_pass_through_unchanged() {
    let list = vec!["ml".to_owned(), "data prep".to_owned()];
    assert_eq!(Skills::Listed(list.clone()).normalize(), list);
}

#[test]
fn other_shapes_normalize_to_empty() {
    let skills = Skills::Other(serde_json::json!({"level": 3}));
    assert!(skills.normalize().is_empty());
}

#[test]
fn skills_deserialize_from_string_or_list() {
    let raw: Skills = serde_json::from_value(serde_json::json!("a, b")).unwrap();
    assert_eq!(raw, Skills::Raw("a, b".to_owned()));
    let listed: Skills = serde_json::from_value(serde_json::json!(["a", "b"])).unwrap();
    assert_eq!(listed, Skills::Listed(vec!["a".to_owned(), "b".to_owned()]));
    let odd: Skills = serde_json::from_value(serde_json::json!(7)).unwrap();
    assert!(matches!(odd, Skills::Other(_)));
}

// =============================================================
// Snapshot merge semantics
// =============================================================

#[test]
fn merge_keeps_unrelated_fields() {
    let mut snapshot = SessionSnapshot::default();
    snapshot.merge(SessionSnapshot { industry: Some("Healthcare".to_owned()), ..Default::default() });
    snapshot.merge(SessionSnapshot { trends: Some("#AI".to_owned()), ..Default::default() });
    assert_eq!(snapshot.industry.as_deref(), Some("Healthcare"));
    assert_eq!(snapshot.trends.as_deref(), Some("#AI"));
}

#[test]
fn merge_overwrites_same_named_fields() {
    let mut snapshot = SessionSnapshot::default();
    snapshot.merge(SessionSnapshot { industry: Some("Healthcare".to_owned()), ..Default::default() });
    snapshot.merge(SessionSnapshot { trends: Some("#AI".to_owned()), ..Default::default() });
    snapshot.merge(SessionSnapshot { industry: Some("Finance".to_owned()), ..Default::default() });
    assert_eq!(snapshot.industry.as_deref(), Some("Finance"));
    assert_eq!(snapshot.trends.as_deref(), Some("#AI"));
}

#[test]
fn merge_ignores_absent_fields() {
    let mut snapshot = SessionSnapshot {
        selected_idea: Some("Idea 1: app".to_owned()),
        ..Default::default()
    };
    snapshot.merge(SessionSnapshot::default());
    assert_eq!(snapshot.selected_idea.as_deref(), Some("Idea 1: app"));
}

// =============================================================
// Stored-blob compatibility
// =============================================================

#[test]
fn snapshot_reads_legacy_camel_case_keys() {
    let snapshot: SessionSnapshot = serde_json::from_value(serde_json::json!({
        "industry": "Healthcare",
        "teamSize": 3,
        "teamMembers": [{"name": "Alice", "skills": "frontend, design"}],
    }))
    .unwrap();
    assert_eq!(snapshot.team_size, Some(3));
    let members = snapshot.team_members.unwrap();
    assert_eq!(members[0].name, "Alice");
    assert_eq!(members[0].skills.normalize(), vec!["frontend".to_owned(), "design".to_owned()]);
}

#[test]
fn snapshot_tolerates_absent_keys() {
    let snapshot: SessionSnapshot = serde_json::from_str("{}").unwrap();
    assert_eq!(snapshot, SessionSnapshot::default());
}

#[test]
fn snapshot_writes_snake_case_and_skips_absent_fields() {
    let snapshot = SessionSnapshot {
        team_size: Some(4),
        ..Default::default()
    };
    let value = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(value, serde_json::json!({"team_size": 4}));
}

// =============================================================
// Plan prerequisites
// =============================================================

fn complete_snapshot() -> SessionSnapshot {
    SessionSnapshot {
        industry: Some("Healthcare".to_owned()),
        team_size: Some(2),
        team_members: Some(vec![TeamMember { name: "Alice".to_owned(), skills: Skills::Raw("ml".to_owned()) }]),
        ..Default::default()
    }
}

#[test]
fn complete_snapshot_has_plan_prerequisites() {
    assert!(complete_snapshot().has_plan_prerequisites());
}

#[test]
fn blank_industry_fails_plan_prerequisites() {
    let mut snapshot = complete_snapshot();
    snapshot.industry = Some("   ".to_owned());
    assert!(!snapshot.has_plan_prerequisites());
}

#[test]
fn missing_team_size_fails_plan_prerequisites() {
    let mut snapshot = complete_snapshot();
    snapshot.team_size = None;
    assert!(!snapshot.has_plan_prerequisites());
}

#[test]
fn empty_member_list_fails_plan_prerequisites() {
    let mut snapshot = complete_snapshot();
    snapshot.team_members = Some(Vec::new());
    assert!(!snapshot.has_plan_prerequisites());
}
