use super::*;

fn event(id: &str, name: &str) -> Event {
    Event { id: Some(id.to_owned()), event_name: name.to_owned(), status: "UPCOMING".to_owned(), ..Event::default() }
}

fn project(id: &str, name: &str, description: &str, status: &str) -> Project {
    Project {
        id: Some(id.to_owned()),
        project_name: name.to_owned(),
        description: description.to_owned(),
        status: status.to_owned(),
        ..Project::default()
    }
}

fn file(id: &str, file_type: Option<&str>) -> FileDocument {
    FileDocument { id: id.to_owned(), file_type: file_type.map(str::to_owned), ..FileDocument::default() }
}

fn ids<T: Record>(items: &[T]) -> Vec<&str> {
    items.iter().filter_map(Record::record_id).collect()
}

// =============================================================
// intersect_by_id
// =============================================================

#[test]
fn intersect_without_result_sets_returns_base() {
    let base = vec![event("e1", "A"), event("e2", "B")];
    assert_eq!(intersect_by_id(&base, &[]), base);
}

#[test]
fn intersect_keeps_items_present_in_every_set_in_base_order() {
    let base = vec![event("e1", "A"), event("e2", "B"), event("e3", "C")];
    let by_name = vec![event("e3", "C"), event("e1", "A")];
    let by_status = vec![event("e1", "A"), event("e2", "B"), event("e3", "C")];
    let out = intersect_by_id(&base, &[by_name, by_status]);
    assert_eq!(ids(&out), vec!["e1", "e3"]);
}

#[test]
fn intersect_drops_items_missing_from_any_set() {
    let base = vec![event("e1", "A"), event("e2", "B")];
    let out = intersect_by_id(&base, &[vec![event("e1", "A")], vec![event("e2", "B")]]);
    assert!(out.is_empty());
}

#[test]
fn intersect_ignores_items_without_ids() {
    let base = vec![Event::default(), event("e1", "A")];
    let out = intersect_by_id(&base, &[vec![Event::default(), event("e1", "A")]]);
    assert_eq!(ids(&out), vec!["e1"]);
}

#[test]
fn intersect_ignores_results_absent_from_base() {
    let base = vec![event("e1", "A")];
    let out = intersect_by_id(&base, &[vec![event("e1", "A"), event("e9", "Z")]]);
    assert_eq!(ids(&out), vec!["e1"]);
}

// =============================================================
// EventFilter
// =============================================================

#[test]
fn empty_event_filter_issues_no_queries() {
    let filter = EventFilter { name: "   ".to_owned(), ..EventFilter::default() };
    assert!(filter.queries().is_empty());
    assert!(!filter.is_active());
}

#[test]
fn event_filter_maps_each_criterion_to_a_route() {
    let filter = EventFilter {
        name: " ai ".to_owned(),
        location: "Tunis".to_owned(),
        status: "ONGOING".to_owned(),
        budget: Some((0.0, 500.0)),
        ..EventFilter::default()
    };
    let routes: Vec<String> = filter.queries().iter().map(ToString::to_string).collect();
    assert_eq!(
        routes,
        vec![
            "GET /events/search/name?name=ai",
            "GET /events/search/location?location=Tunis",
            "GET /events/search/status?status=ONGOING",
            "GET /events/search/budget?min=0&max=500",
        ]
    );
}

#[test]
fn event_filter_collapses_both_dates_into_range() {
    let filter = EventFilter {
        start_after: "2025-01-01".to_owned(),
        end_before: "2025-03-01".to_owned(),
        ..EventFilter::default()
    };
    let routes = filter.queries();
    assert_eq!(routes.len(), 1);
    assert_eq!(
        routes[0].to_string(),
        "GET /events/search/dateRange?start=2025-01-01T00:00:00&end=2025-03-01T00:00:00"
    );
}

#[test]
fn project_filter_collapses_both_dates_into_range() {
    let filter = ProjectFilter {
        start_after: "2024-06-01".to_owned(),
        end_before: "2024-12-31".to_owned(),
        ..ProjectFilter::default()
    };
    let routes = filter.queries();
    assert_eq!(routes.len(), 1);
    assert_eq!(
        routes[0].to_string(),
        "GET /projects/search/dateRange?start=2024-06-01T00:00:00&end=2024-12-31T00:00:00"
    );
}

#[test]
fn event_filter_single_date_uses_open_bound_route() {
    let after = EventFilter { start_after: "2025-01-01".to_owned(), ..EventFilter::default() };
    assert_eq!(after.queries()[0].path, "/events/search/startAfter");
    let before = EventFilter { end_before: "2025-01-01".to_owned(), ..EventFilter::default() };
    assert_eq!(before.queries()[0].path, "/events/search/endBefore");
}

// =============================================================
// compose
// =============================================================

#[test]
fn compose_with_inactive_filter_restores_full_list() {
    let base = vec![event("e1", "A"), event("e2", "B")];
    let outcome = compose(&EventFilter::default(), &base, &[vec![]]);
    assert_eq!(outcome.items, base);
    assert_eq!(outcome.message, None);
}

#[test]
fn compose_reports_empty_result() {
    let base = vec![event("e1", "A")];
    let filter = EventFilter { name: "zzz".to_owned(), ..EventFilter::default() };
    let outcome = compose(&filter, &base, &[vec![]]);
    assert!(outcome.items.is_empty());
    assert_eq!(outcome.message.as_deref(), Some("No events found matching your criteria."));
}

#[test]
fn compose_applies_project_text_locally() {
    let base = vec![
        project("p1", "Quantum sensors", "Lab work", "ACTIVE"),
        project("p2", "Soil survey", "Field sampling of QUANTUM dots", "PLANNED"),
        project("p3", "Robotics", "Arms", "ACTIVE"),
    ];
    let filter = ProjectFilter { text: "quantum".to_owned(), ..ProjectFilter::default() };
    assert!(filter.queries().is_empty());
    let outcome = compose(&filter, &base, &[]);
    assert_eq!(ids(&outcome.items), vec!["p1", "p2"]);
}

#[test]
fn compose_combines_project_status_route_and_text() {
    let base = vec![project("p1", "Quantum", "", "ACTIVE"), project("p2", "Quantum two", "", "PLANNED")];
    let filter = ProjectFilter { text: "quantum".to_owned(), status: "ACTIVE".to_owned(), ..ProjectFilter::default() };
    assert_eq!(filter.queries().len(), 1);
    let outcome = compose(&filter, &base, &[vec![project("p1", "Quantum", "", "ACTIVE")]]);
    assert_eq!(ids(&outcome.items), vec!["p1"]);
}

#[test]
fn project_text_matches_status() {
    let filter = ProjectFilter { text: "planned".to_owned(), ..ProjectFilter::default() };
    assert!(filter.matches_local(&project("p1", "X", "Y", "PLANNED")));
    assert!(!filter.matches_local(&project("p2", "X", "Y", "ACTIVE")));
}

#[test]
fn file_filter_type_is_local_and_case_insensitive() {
    let base = vec![file("f1", Some("Dataset")), file("f2", Some("report")), file("f3", None)];
    let filter = FileFilter { file_type: "dataset".to_owned(), ..FileFilter::default() };
    assert!(filter.queries().is_empty());
    assert!(filter.is_active());
    let outcome = compose(&filter, &base, &[]);
    assert_eq!(ids(&outcome.items), vec!["f1"]);
}

#[test]
fn file_filter_routes_keep_plain_dates() {
    let filter = FileFilter {
        title: "graphs".to_owned(),
        keyword: "ml".to_owned(),
        author: "Noether".to_owned(),
        date_after: "2020-01-01".to_owned(),
        date_before: "2021-01-01".to_owned(),
        ..FileFilter::default()
    };
    let routes: Vec<String> = filter.queries().iter().map(ToString::to_string).collect();
    assert_eq!(
        routes,
        vec![
            "GET /files/search/title?title=graphs",
            "GET /files/search/keyword?keyword=ml",
            "GET /files/search/author?author=Noether",
            "GET /files/search/dateAfter?date=2020-01-01",
            "GET /files/search/dateBefore?date=2021-01-01",
        ]
    );
}

#[test]
fn file_filter_intersects_keyword_and_author_results() {
    let base = vec![file("f1", None), file("f2", None), file("f3", None)];
    let filter = FileFilter { keyword: "ml".to_owned(), author: "Ada".to_owned(), ..FileFilter::default() };
    let by_keyword = vec![file("f1", None), file("f2", None)];
    let by_author = vec![file("f2", None), file("f3", None)];
    let outcome = compose(&filter, &base, &[by_keyword, by_author]);
    assert_eq!(ids(&outcome.items), vec!["f2"]);
    assert_eq!(outcome.message, None);
}

// =============================================================
// parse_budget_range
// =============================================================

#[test]
fn budget_range_empty_is_no_criterion() {
    assert_eq!(parse_budget_range("", "  "), Ok(None));
}

#[test]
fn budget_range_defaults_minimum_to_zero() {
    assert_eq!(parse_budget_range("", "300"), Ok(Some((0.0, 300.0))));
}

#[test]
fn budget_range_requires_maximum() {
    assert_eq!(parse_budget_range("10", "").unwrap_err().field, "budgetMax");
}

#[test]
fn budget_range_rejects_inverted_and_non_numeric_bounds() {
    assert_eq!(parse_budget_range("500", "100").unwrap_err().field, "budgetMin");
    assert_eq!(parse_budget_range("abc", "100").unwrap_err().field, "budgetMin");
    assert_eq!(parse_budget_range("1", "x").unwrap_err().field, "budgetMax");
}

#[test]
fn budget_range_rejects_non_finite_numbers() {
    assert_eq!(parse_budget_range("NaN", "5").unwrap_err().field, "budgetMin");
    assert_eq!(parse_budget_range("-inf", "5").unwrap_err().field, "budgetMin");
    assert_eq!(parse_budget_range("0", "inf").unwrap_err().field, "budgetMax");
    assert_eq!(parse_budget_range("", "NaN").unwrap_err().field, "budgetMax");
}
