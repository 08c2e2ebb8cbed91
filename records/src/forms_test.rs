use super::*;

fn fields(errors: &[FieldError]) -> Vec<&'static str> {
    errors.iter().map(|e| e.field).collect()
}

fn valid_event_form() -> EventForm {
    EventForm {
        event_name: "Rust Summit".to_owned(),
        location: "Tunis".to_owned(),
        budget: "1500".to_owned(),
        max_participants: "40".to_owned(),
        available_places: String::new(),
        status: "UPCOMING".to_owned(),
        image: String::new(),
        image_path: String::new(),
        start_date: "2025-03-01".to_owned(),
        end_date: "2025-03-02".to_owned(),
        description: "Two days of talks".to_owned(),
    }
}

fn valid_profile() -> ProfileForm {
    ProfileForm {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        phone: "+216 (71) 123-456".to_owned(),
        grade: "PhD".to_owned(),
        institute: "INSAT".to_owned(),
        last_diploma: "Master".to_owned(),
        research_area: "Analytical engines".to_owned(),
        linked_in_url: String::new(),
    }
}

fn library_file_form() -> FileForm {
    FileForm {
        title: "Graph datasets".to_owned(),
        authors: "Ada, Emmy ,".to_owned(),
        affiliations: "INSAT".to_owned(),
        keywords: "graphs, ml".to_owned(),
        publication_date: "2024-05-01".to_owned(),
        abstract_text: "Short".to_owned(),
        doi: String::new(),
        file_type: "dataset".to_owned(),
        custom_file_type: String::new(),
    }
}

// =============================================================
// dates and lists
// =============================================================

#[test]
fn backend_datetime_appends_midnight_to_plain_dates() {
    assert_eq!(to_backend_datetime("2025-01-01"), "2025-01-01T00:00:00");
    assert_eq!(to_backend_datetime("2025-01-01T10:30:00"), "2025-01-01T10:30:00");
    assert_eq!(to_backend_datetime("  "), "");
}

#[test]
fn date_part_strips_time() {
    assert_eq!(date_part("2025-01-01T10:00:00"), "2025-01-01");
    assert_eq!(date_part("2025-01-01"), "2025-01-01");
}

#[test]
fn parse_date_rejects_garbage() {
    assert!(parse_date("2025-02-30").is_none());
    assert!(parse_date("soon").is_none());
    assert!(parse_date("2025-02-28T00:00:00").is_some());
}

#[test]
fn split_list_trims_and_drops_empty_entries() {
    assert_eq!(split_list(" a, b ,,c , "), vec!["a", "b", "c"]);
    assert!(split_list(" , ").is_empty());
}

// =============================================================
// login / signup
// =============================================================

#[test]
fn login_requires_email_and_password() {
    let errors = validate_login(&LoginRequest::default());
    assert_eq!(fields(&errors), vec!["email", "password"]);
}

#[test]
fn login_rejects_malformed_email() {
    let req = LoginRequest { email: "not-an-email".to_owned(), password: "pw".to_owned() };
    assert_eq!(fields(&validate_login(&req)), vec!["email"]);
}

#[test]
fn signup_leaves_linkedin_optional() {
    let req = SignupRequest {
        email: "ada@lab.org".to_owned(),
        password: "secret".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        date_of_birth: "1990-12-10".to_owned(),
        phone: "123".to_owned(),
        grade: "PhD".to_owned(),
        institute: "INSAT".to_owned(),
        last_diploma: "Master".to_owned(),
        research_area: "Engines".to_owned(),
        linked_in_url: Some("  ".to_owned()),
    };
    assert!(validate_signup(&req).is_empty());
    assert_eq!(normalize_signup(req).linked_in_url, None);
}

#[test]
fn signup_reports_every_missing_field() {
    assert_eq!(validate_signup(&SignupRequest::default()).len(), 10);
}

// =============================================================
// profile
// =============================================================

#[test]
fn profile_accepts_valid_input() {
    let update = valid_profile().to_update().unwrap();
    assert_eq!(update.first_name.as_deref(), Some("Ada"));
    assert_eq!(update.linked_in_url, None);
    assert_eq!(update.role, None);
}

#[test]
fn profile_enforces_minimum_lengths() {
    let form = ProfileForm {
        first_name: "A".to_owned(),
        institute: "IN".to_owned(),
        research_area: "short".to_owned(),
        ..valid_profile()
    };
    assert_eq!(fields(&form.validate()), vec!["firstName", "institute", "researchArea"]);
}

#[test]
fn profile_checks_phone_and_linkedin_patterns() {
    let form = ProfileForm {
        phone: "call me".to_owned(),
        linked_in_url: "https://example.com/ada".to_owned(),
        ..valid_profile()
    };
    assert_eq!(fields(&form.validate()), vec!["phone", "linkedInUrl"]);

    let ok = ProfileForm { linked_in_url: "https://www.linkedin.com/in/ada".to_owned(), ..valid_profile() };
    assert!(ok.validate().is_empty());
}

// =============================================================
// events
// =============================================================

#[test]
fn event_form_defaults_available_places_and_suffixes_dates() {
    let event = valid_event_form().to_event().unwrap();
    assert_eq!(event.available_places, Some(40));
    assert_eq!(event.start_date, "2025-03-01T00:00:00");
    assert_eq!(event.end_date, "2025-03-02T00:00:00");
    assert_eq!(event.image, None);
}

#[test]
fn event_form_rejects_small_budget_and_capacity() {
    let form = EventForm { budget: "0".to_owned(), max_participants: "0".to_owned(), ..valid_event_form() };
    assert_eq!(fields(&form.to_event().unwrap_err()), vec!["budget", "maxParticipants"]);
}

#[test]
fn event_form_rejects_end_before_start() {
    let form = EventForm { end_date: "2025-02-01".to_owned(), ..valid_event_form() };
    assert_eq!(fields(&form.to_event().unwrap_err()), vec!["endDate"]);
}

#[test]
fn event_form_prefill_splits_timestamps() {
    let event = Event {
        id: Some("e1".to_owned()),
        start_date: "2025-03-01T09:00:00".to_owned(),
        end_date: "2025-03-02T18:00:00".to_owned(),
        available_places: Some(3),
        budget: 200.0,
        ..Event::default()
    };
    let form = EventForm::from_event(&event);
    assert_eq!(form.start_date, "2025-03-01");
    assert_eq!(form.end_date, "2025-03-02");
    assert_eq!(form.available_places, "3");
    assert_eq!(form.budget, "200");
}

// =============================================================
// projects
// =============================================================

#[test]
fn new_project_gets_default_image_and_empty_team() {
    let form = ProjectForm {
        project_name: "Sensors".to_owned(),
        description: "Low power".to_owned(),
        start_date: "2025-01-01".to_owned(),
        end_date: "2025-06-01".to_owned(),
        budget: "1000".to_owned(),
        max_team_members: "5".to_owned(),
        ..ProjectForm::new_project()
    };
    let project = form.to_project(None).unwrap();
    assert_eq!(project.status, "ACTIVE");
    assert_eq!(project.image_path.as_deref(), Some(DEFAULT_PROJECT_IMAGE));
    assert_eq!(project.team_members, Some(Vec::new()));
}

#[test]
fn edited_project_keeps_untouched_fields() {
    let base = Project {
        id: Some("p1".to_owned()),
        team_members: Some(vec!["u1".to_owned()]),
        start_date: "2025-01-01T00:00:00".to_owned(),
        end_date: "2025-02-01T00:00:00".to_owned(),
        budget: 10.0,
        max_team_members: 4,
        project_name: "Old".to_owned(),
        description: "D".to_owned(),
        status: "PLANNED".to_owned(),
        ..Project::default()
    };
    let mut form = ProjectForm::from_project(&base);
    form.project_name = "New".to_owned();
    let project = form.to_project(Some(&base)).unwrap();
    assert_eq!(project.id.as_deref(), Some("p1"));
    assert_eq!(project.team_members, Some(vec!["u1".to_owned()]));
    assert_eq!(project.project_name, "New");
}

// =============================================================
// files
// =============================================================

#[test]
fn library_metadata_orders_multipart_fields() {
    let meta = library_file_form().to_metadata(UploadRules::Library).unwrap();
    let keys: Vec<&str> = meta.multipart_fields().iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        vec!["title", "authors", "authors", "affiliations", "keywords", "keywords", "publicationDate", "abstractText", "fileType"]
    );
}

#[test]
fn doi_is_sent_only_when_present() {
    let form = FileForm { doi: "10.1/x".to_owned(), ..library_file_form() };
    let meta = form.to_metadata(UploadRules::Library).unwrap();
    assert!(meta.multipart_fields().contains(&("doi", "10.1/x".to_owned())));
}

#[test]
fn custom_file_type_replaces_selection() {
    let form = FileForm {
        file_type: CUSTOM_FILE_TYPE.to_owned(),
        custom_file_type: " poster ".to_owned(),
        ..library_file_form()
    };
    assert_eq!(form.to_metadata(UploadRules::Library).unwrap().file_type, "poster");

    let blank = FileForm { file_type: CUSTOM_FILE_TYPE.to_owned(), ..library_file_form() };
    assert_eq!(fields(&blank.to_metadata(UploadRules::Library).unwrap_err()), vec!["fileType"]);
}

#[test]
fn profile_rules_are_stricter() {
    let form = FileForm { affiliations: String::new(), ..library_file_form() };
    let errors = form.to_metadata(UploadRules::Profile).unwrap_err();
    assert_eq!(fields(&errors), vec!["abstractText", "affiliations"]);
}

#[test]
fn profile_upload_defaults_type_to_other() {
    let form = FileForm {
        file_type: String::new(),
        abstract_text: "x".repeat(60),
        ..library_file_form()
    };
    assert_eq!(form.to_metadata(UploadRules::Profile).unwrap().file_type, DEFAULT_UPLOAD_TYPE);
}

#[test]
fn file_form_prefill_joins_lists() {
    let doc = FileDocument {
        id: "f1".to_owned(),
        authors: vec!["Ada".to_owned(), "Emmy".to_owned()],
        publication_date: Some("2024-05-01T00:00:00".to_owned()),
        ..FileDocument::default()
    };
    let form = FileForm::from_document(&doc);
    assert_eq!(form.authors, "Ada, Emmy");
    assert_eq!(form.publication_date, "2024-05-01");
}

// =============================================================
// admin user form
// =============================================================

#[test]
fn user_form_requires_password_only_when_creating() {
    let form = UserForm {
        first_name: "Ada".to_owned(),
        last_name: "L".to_owned(),
        email: "ada@lab.org".to_owned(),
        role: "USER".to_owned(),
        status: "PENDING".to_owned(),
        date_of_birth: "1990-01-01".to_owned(),
        phone: "1".to_owned(),
        grade: "g".to_owned(),
        institute: "i".to_owned(),
        last_diploma: "d".to_owned(),
        research_area: "r".to_owned(),
        ..UserForm::default()
    };
    assert!(form.validate(false).is_empty());
    assert_eq!(fields(&form.to_signup().unwrap_err()), vec!["password"]);
    let update = form.to_update().unwrap();
    assert_eq!(update.role, Some(Role::User));
    assert_eq!(update.status, Some(UserStatus::Pending));
}

// =============================================================
// attachments
// =============================================================

#[test]
fn photo_must_be_small_image() {
    assert!(check_photo("image/png", 1024).is_ok());
    assert!(check_photo("application/pdf", 1024).is_err());
    assert!(check_photo("image/jpeg", MAX_PHOTO_BYTES + 1).is_err());
}

#[test]
fn size_limits_accept_files_of_exactly_the_limit() {
    assert!(check_photo("image/jpeg", MAX_PHOTO_BYTES).is_ok());
    assert!(check_document("text/plain", MAX_DOCUMENT_BYTES).is_ok());
}

#[test]
fn document_must_be_supported_type_under_limit() {
    assert!(check_document("application/pdf", MAX_DOCUMENT_BYTES).is_ok());
    assert!(check_document("text/plain", 10).is_ok());
    assert!(check_document("image/png", 10).is_err());
    assert!(check_document("application/msword", MAX_DOCUMENT_BYTES + 1).is_err());
}

#[test]
fn upload_without_file_is_rejected_before_metadata() {
    let errors = prepare_upload(None, &FileForm::default(), UploadRules::Library).unwrap_err();
    assert_eq!(errors[0].field, "file");
    assert!(errors.len() > 1);
}

#[test]
fn library_upload_accepts_any_file_type() {
    let meta = prepare_upload(Some(("image/png", 42)), &library_file_form(), UploadRules::Library).unwrap();
    assert_eq!(meta.title, library_file_form().title.trim());
}

#[test]
fn profile_upload_checks_document_type() {
    let form = FileForm { abstract_text: "x".repeat(60), ..library_file_form() };
    let errors = prepare_upload(Some(("image/png", 42)), &form, UploadRules::Profile).unwrap_err();
    assert_eq!(fields(&errors), vec!["file"]);
    assert!(prepare_upload(Some(("application/pdf", 42)), &form, UploadRules::Profile).is_ok());
}
