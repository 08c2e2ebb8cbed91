use super::*;

#[test]
fn empty_search_form_builds_inactive_filter() {
    let filter = EventSearchForm::default().to_filter().expect("valid");
    assert_eq!(filter, EventFilter::default());
}

#[test]
fn search_form_trims_text_and_parses_budget() {
    let form = EventSearchForm {
        name: "  Symposium ".to_owned(),
        location: " Oslo".to_owned(),
        status: "UPCOMING".to_owned(),
        budget_min: "100".to_owned(),
        budget_max: "500".to_owned(),
        start_after: "2025-01-01".to_owned(),
        ..EventSearchForm::default()
    };
    let filter = form.to_filter().expect("valid");
    assert_eq!(filter.name, "Symposium");
    assert_eq!(filter.location, "Oslo");
    assert_eq!(filter.budget, Some((100.0, 500.0)));
    assert_eq!(filter.start_after, "2025-01-01");
}

#[test]
fn search_form_rejects_inverted_budget() {
    let form = EventSearchForm { budget_min: "900".to_owned(), budget_max: "10".to_owned(), ..EventSearchForm::default() };
    let err = form.to_filter().expect_err("inverted range");
    assert_eq!(err.field, "budgetMin");
}
