use super::*;
use records::Event;

fn event(id: &str, name: &str) -> Event {
    Event { id: Some(id.to_owned()), event_name: name.to_owned(), ..Event::default() }
}

fn names(items: &[Event]) -> Vec<&str> {
    items.iter().map(|e| e.event_name.as_str()).collect()
}

fn loaded() -> Collection<Event> {
    let mut c = Collection::default();
    c.begin_load();
    c.load(vec![event("e1", "A"), event("e2", "B"), event("e3", "C")]);
    c
}

#[test]
fn load_fills_both_lists_and_clears_loading() {
    let c = loaded();
    assert!(!c.loading);
    assert_eq!(names(&c.all), vec!["A", "B", "C"]);
    assert_eq!(c.all, c.visible);
}

#[test]
fn fail_keeps_existing_items() {
    let mut c = loaded();
    c.begin_load();
    c.fail("Failed to load events".to_owned());
    assert!(!c.loading);
    assert_eq!(c.all.len(), 3);
    assert_eq!(c.message.as_deref(), Some("Failed to load events"));
}

#[test]
fn show_then_reset_restores_full_list() {
    let mut c = loaded();
    c.show(FilterOutcome { items: Vec::new(), message: Some("No events found matching your criteria.".to_owned()) });
    assert!(c.visible.is_empty());
    assert!(c.message.is_some());
    c.reset_filter();
    assert_eq!(c.visible.len(), 3);
    assert_eq!(c.message, None);
}

#[test]
fn created_item_is_appended_to_both_lists() {
    let mut c = loaded();
    c.show(FilterOutcome { items: vec![event("e2", "B")], message: None });
    c.apply_created(event("e4", "D"));
    assert_eq!(names(&c.all), vec!["A", "B", "C", "D"]);
    assert_eq!(names(&c.visible), vec!["B", "D"]);
}

#[test]
fn updated_item_replaces_by_id_everywhere() {
    let mut c = loaded();
    c.show(FilterOutcome { items: vec![event("e2", "B")], message: None });
    c.apply_updated(event("e2", "B2"));
    assert_eq!(names(&c.all), vec!["A", "B2", "C"]);
    assert_eq!(names(&c.visible), vec!["B2"]);
}

#[test]
fn update_without_id_is_ignored() {
    let mut c = loaded();
    c.apply_updated(Event::default());
    assert_eq!(names(&c.all), vec!["A", "B", "C"]);
}

#[test]
fn removed_item_leaves_both_lists() {
    let mut c = loaded();
    c.apply_removed("e1");
    assert_eq!(names(&c.all), vec!["B", "C"]);
    assert_eq!(names(&c.visible), vec!["B", "C"]);
    assert!(c.find("e1").is_none());
    assert!(c.find("e3").is_some());
}

#[test]
fn apply_saved_updates_known_ids_and_appends_new_ones() {
    let mut c = loaded();
    c.apply_saved(event("e2", "B2"));
    c.apply_saved(event("e4", "D"));
    assert_eq!(names(&c.all), vec!["A", "B2", "C", "D"]);
    assert_eq!(c.all, c.visible);
}
