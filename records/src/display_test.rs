use super::*;

fn user(first: &str, last: &str, uploads: Vec<FileDocument>) -> User {
    let mut user: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "ada@lab.org",
        "role": "PERMANENT",
        "status": "APPROVED",
        "firstName": first,
        "lastName": last,
    }))
    .unwrap();
    user.uploads = uploads;
    user
}

fn doc(id: &str, filename: Option<&str>, title: Option<&str>, file_type: Option<&str>) -> FileDocument {
    FileDocument {
        id: id.to_owned(),
        filename: filename.map(str::to_owned),
        title: title.map(str::to_owned),
        file_type: file_type.map(str::to_owned),
        ..FileDocument::default()
    }
}

#[test]
fn user_name_is_trimmed() {
    assert_eq!(format_user_name(&user("Ada", "Lovelace", vec![])), "Ada Lovelace");
    assert_eq!(format_user_name(&user("Ada", "", vec![])), "Ada");
}

#[test]
fn status_and_role_badges() {
    assert_eq!(status_color(&UserStatus::Approved), "#27ae60");
    assert_eq!(status_color(&UserStatus::Pending), "#f39c12");
    assert_eq!(status_color(&UserStatus::Declined), "#e74c3c");
    assert_eq!(status_color(&UserStatus::from("ARCHIVED")), "#95a5a6");
    assert_eq!(role_color(&Role::SuperAdmin), "#dc2626");
    assert_eq!(role_color(&Role::Admin), "#ea580c");
    assert_eq!(role_color(&Role::User), "#2563eb");
    assert_eq!(role_color(&Role::Permanent), "#6b7280");
}

#[test]
fn role_display_names() {
    assert_eq!(role_display(&Role::SuperAdmin), "Super Admin");
    assert_eq!(role_display(&Role::Admin), "Administrator");
    assert_eq!(role_display(&Role::Permanent), "Researcher");
    assert_eq!(role_display(&Role::User), "Visitor");
    assert_eq!(role_display(&Role::from("GUEST")), "GUEST");
}

#[test]
fn extension_is_last_segment_upper_cased() {
    assert_eq!(file_extension("paper.final.pdf"), "PDF");
    assert_eq!(file_extension("README"), "README");
    assert_eq!(file_extension(""), "FILE");
    assert_eq!(file_extension("trailing."), "FILE");
}

#[test]
fn download_filename_prefers_stored_name() {
    let d = doc("f1", Some("abc.pdf"), Some("Title"), Some("report"));
    assert_eq!(download_filename(&d).unwrap(), "abc.pdf");
}

#[test]
fn download_filename_derives_from_title_and_type() {
    let d = doc("f1", None, Some("Graph data: v2"), Some("DataSet"));
    assert_eq!(download_filename(&d).unwrap(), "Graph_data__v2.dataset");
}

#[test]
fn download_filename_fails_without_title_or_type() {
    assert!(matches!(download_filename(&doc("f1", None, Some("T"), None)), Err(ApiError::Invalid(_))));
    assert!(download_filename(&doc("f1", Some(""), None, Some("report"))).is_err());
}

#[test]
fn download_name_falls_back_in_order() {
    assert_eq!(download_name(&doc("f", Some("a.pdf"), Some("Paper"), None)), "Paper");
    assert_eq!(download_name(&doc("f", Some("a.pdf"), None, None)), "a.pdf");
    assert_eq!(download_name(&doc("f", None, None, None)), FALLBACK_DOWNLOAD_NAME);
}

#[test]
fn download_errors_map_by_status() {
    let status = |status| ApiError::Status { status, body: String::new() };
    assert_eq!(download_error_message(&status(400)), "Invalid file name provided.");
    assert_eq!(download_error_message(&status(404)), "File not found on the server.");
    assert!(download_error_message(&status(500)).starts_with("Server error"));
    assert!(download_error_message(&ApiError::Network("down".to_owned())).starts_with("Failed to download file"));
}

#[test]
fn find_upload_searches_user_uploads() {
    let u = user("Ada", "L", vec![doc("f1", Some("a.pdf"), None, None), doc("f2", None, None, None)]);
    assert_eq!(find_upload(&u, "f2").unwrap().id, "f2");
    let err = find_upload(&u, "f9").unwrap_err();
    assert_eq!(err.to_string(), "File with ID f9 not found");
}

#[test]
fn short_date_drops_time() {
    assert_eq!(short_date("2025-01-05T10:00:00"), "2025-01-05");
    assert_eq!(short_date(""), "");
}
