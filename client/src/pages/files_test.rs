use super::*;

#[test]
fn search_form_trims_text_criteria() {
    let form = FileSearchForm {
        title: " Graphs ".to_owned(),
        author: "Ada ".to_owned(),
        file_type: "dataset".to_owned(),
        ..FileSearchForm::default()
    };
    let filter = form.to_filter();
    assert_eq!(filter.title, "Graphs");
    assert_eq!(filter.author, "Ada");
    assert_eq!(filter.file_type, "dataset");
    assert!(filter.keyword.is_empty());
}

#[test]
fn uploaded_document_is_last_upload() {
    let owner: User = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "ada@lab.org",
        "role": "PERMANENT",
        "status": "APPROVED",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "uploads": [{ "id": "f1" }, { "id": "f2", "title": "New" }]
    }))
    .expect("user payload");
    assert_eq!(uploaded_document(&owner).map(|d| d.id), Some("f2".to_owned()));
}
