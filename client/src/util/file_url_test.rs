use super::*;

#[test]
fn parent_relative_path_resolves_against_gateway() {
    assert_eq!(
        resolve_generated_file("../generated_docs/thinkflow_project_plan.pdf"),
        "http://127.0.0.1:8000/generated_docs/thinkflow_project_plan.pdf"
    );
}

#[test]
fn current_relative_path_resolves_against_gateway() {
    assert_eq!(
        resolve_generated_file("./generated_docs/plan.pdf"),
        "http://127.0.0.1:8000/generated_docs/plan.pdf"
    );
}

#[test]
fn stacked_relative_markers_are_all_stripped() {
    assert_eq!(
        resolve_generated_file("../../generated_docs/plan.pdf"),
        "http://127.0.0.1:8000/generated_docs/plan.pdf"
    );
}

#[test]
fn absolute_path_is_prefixed_without_doubling_slashes() {
    assert_eq!(
        resolve_generated_file("/generated_docs/plan.pdf"),
        "http://127.0.0.1:8000/generated_docs/plan.pdf"
    );
}

#[test]
fn bare_path_is_prefixed() {
    assert_eq!(resolve_generated_file("plan.pdf"), "http://127.0.0.1:8000/plan.pdf");
}
