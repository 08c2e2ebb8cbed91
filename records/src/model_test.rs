use super::*;

// =============================================================
// Role / UserStatus
// =============================================================

#[test]
fn role_parses_known_values_case_insensitively() {
    assert_eq!(Role::from("admin"), Role::Admin);
    assert_eq!(Role::from("SUPER_ADMIN"), Role::SuperAdmin);
    assert_eq!(Role::from("Permanent"), Role::Permanent);
    assert_eq!(Role::from("USER"), Role::User);
}

#[test]
fn role_keeps_unknown_values() {
    let role = Role::from("REVIEWER");
    assert_eq!(role, Role::Other("REVIEWER".to_owned()));
    assert_eq!(role.as_str(), "REVIEWER");
}

#[test]
fn role_serializes_as_wire_string() {
    assert_eq!(serde_json::to_string(&Role::Permanent).unwrap(), "\"PERMANENT\"");
}

#[test]
fn user_status_parses_and_displays() {
    assert_eq!(UserStatus::from("pending".to_owned()), UserStatus::Pending);
    assert_eq!(UserStatus::Declined.to_string(), "DECLINED");
    assert_eq!(UserStatus::from("Approved"), UserStatus::Approved);
    assert_eq!(UserStatus::from("ARCHIVED"), UserStatus::Other("ARCHIVED".to_owned()));
}

// =============================================================
// Wire decoding
// =============================================================

#[test]
fn user_decodes_with_missing_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "ada@lab.org",
        "role": "USER",
        "status": "PENDING",
        "firstName": "Ada",
        "lastName": "Lovelace"
    }))
    .unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.status, UserStatus::Pending);
    assert!(user.uploads.is_empty());
    assert!(user.linked_in_url.is_none());
    assert_eq!(user.research_area, "");
}

#[test]
fn file_document_decodes_lists_and_defaults() {
    let file: FileDocument = serde_json::from_value(serde_json::json!({
        "id": "f1",
        "title": "Graphs",
        "authors": ["A", "B"],
        "fileType": "dataset"
    }))
    .unwrap();
    assert_eq!(file.authors, vec!["A".to_owned(), "B".to_owned()]);
    assert!(file.keywords.is_empty());
    assert_eq!(file.file_type.as_deref(), Some("dataset"));
}

#[test]
fn event_serializes_camel_case_without_absent_fields() {
    let event = Event {
        event_name: "Summit".to_owned(),
        location: "Tunis".to_owned(),
        budget: 100.0,
        max_participants: 20,
        status: "UPCOMING".to_owned(),
        start_date: "2025-01-01T00:00:00".to_owned(),
        end_date: "2025-01-02T00:00:00".to_owned(),
        description: "Annual".to_owned(),
        ..Event::default()
    };
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["eventName"], "Summit");
    assert_eq!(value["maxParticipants"], 20);
    assert!(value.get("id").is_none());
    assert!(value.get("availablePlaces").is_none());
}

#[test]
fn user_update_only_serializes_present_fields() {
    let update = UserUpdate { phone: Some("+216 1234".to_owned()), role: Some(Role::Admin), ..UserUpdate::default() };
    let value = serde_json::to_value(&update).unwrap();
    assert_eq!(value, serde_json::json!({ "phone": "+216 1234", "role": "ADMIN" }));
}

#[test]
fn signup_request_uses_camel_case_keys() {
    let req = SignupRequest { first_name: "Ada".to_owned(), ..SignupRequest::default() };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["firstName"], "Ada");
    assert!(value.get("linkedInUrl").is_none());
}

// =============================================================
// Record ids
// =============================================================

#[test]
fn record_id_is_none_for_unsaved_records() {
    assert_eq!(Event::default().record_id(), None);
    assert_eq!(Project::default().record_id(), None);
    assert_eq!(FileDocument::default().record_id(), None);
}

#[test]
fn record_id_returns_backend_id() {
    let project = Project { id: Some("p1".to_owned()), ..Project::default() };
    assert_eq!(project.record_id(), Some("p1"));
}
