use super::*;
use board::note::{NoteKind, StickyColor};

// =============================================================
// ideas_request_from
// =============================================================

#[test]
fn quadrants_map_to_request_fields_in_order() {
    let grouped = [
        vec!["long waits".to_owned()],
        vec!["symptom chatbot".to_owned()],
        vec!["reduce stress".to_owned()],
        vec!["no budget".to_owned()],
    ];
    let request = ideas_request_from("Healthcare", grouped);
    assert_eq!(request.industry, "Healthcare");
    assert_eq!(request.pain_points, vec!["long waits".to_owned()]);
    assert_eq!(request.ideas, vec!["symptom chatbot".to_owned()]);
    assert_eq!(request.goals, vec!["reduce stress".to_owned()]);
    assert_eq!(request.constraints, vec!["no budget".to_owned()]);
}

#[test]
fn empty_quadrants_produce_empty_groups() {
    let request = ideas_request_from("Finance", Default::default());
    assert!(request.pain_points.is_empty());
    assert!(request.ideas.is_empty());
    assert!(request.goals.is_empty());
    assert!(request.constraints.is_empty());
}

#[test]
fn store_content_flows_into_the_request() {
    let mut store = NoteStore::new();
    let a = store.create(NoteKind::Sticky, StickyColor::Pink, 0, 0.0, 0.0);
    let b = store.create(NoteKind::Text, StickyColor::Yellow, 3, 0.0, 0.0);
    store.update_content(a, " mental health support is hard to access ");
    store.update_content(b, "team knows frontend only");
    let request = ideas_request_from("Healthcare", store.grouped_content());
    assert_eq!(request.pain_points, vec!["mental health support is hard to access".to_owned()]);
    assert_eq!(request.constraints, vec!["team knows frontend only".to_owned()]);
}
