use super::*;

#[test]
fn field_message_returns_first_error_for_field() {
    let errors = vec![
        FieldError::new("email", "Email is required"),
        FieldError::new("phone", "Phone is required"),
        FieldError::new("email", "Enter a valid email address"),
    ];
    assert_eq!(field_message(&errors, "email").as_deref(), Some("Email is required"));
    assert_eq!(field_message(&errors, "phone").as_deref(), Some("Phone is required"));
    assert_eq!(field_message(&errors, "grade"), None);
}

#[test]
fn options_of_keeps_order() {
    assert_eq!(options_of(&["ACTIVE", "PLANNED"]), vec!["ACTIVE".to_owned(), "PLANNED".to_owned()]);
}
