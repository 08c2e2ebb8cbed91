use super::*;

#[test]
fn search_form_keeps_free_text_local() {
    let form = ProjectSearchForm { text: "  genome ".to_owned(), ..ProjectSearchForm::default() };
    let filter = form.to_filter().expect("valid");
    assert_eq!(filter.text, "genome");
    assert!(filter.budget.is_none());
}

#[test]
fn search_form_requires_maximum_with_minimum() {
    let form = ProjectSearchForm { budget_min: "10".to_owned(), ..ProjectSearchForm::default() };
    let err = form.to_filter().expect_err("missing max");
    assert_eq!(err.field, "budgetMax");
}

#[test]
fn started_only_changes_status() {
    let project = Project {
        id: Some("p1".to_owned()),
        project_name: "Atlas".to_owned(),
        status: "PLANNED".to_owned(),
        budget: 1200.0,
        ..Project::default()
    };
    let next = started(&project);
    assert_eq!(next.status, "ACTIVE");
    assert_eq!(next.project_name, "Atlas");
    assert_eq!(next.id, project.id);
    assert!((next.budget - 1200.0).abs() < f64::EPSILON);
}
