use super::*;

#[test]
fn network_errors_report_status_zero() {
    assert_eq!(ApiError::Network("refused".to_owned()).status(), Some(0));
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[test]
fn network_error_message_points_at_backend() {
    let msg = ApiError::Network("refused".to_owned()).user_message("load files");
    assert_eq!(msg, "Unable to connect to the server. Please check if the backend is running.");
}

#[test]
fn unauthorized_message_asks_for_login() {
    let err = ApiError::Status { status: 401, body: String::new() };
    assert_eq!(err.user_message("upload file"), "Unauthorized. Please log in again.");
}

#[test]
fn not_found_message_names_action() {
    let err = ApiError::Status { status: 404, body: "nope".to_owned() };
    assert_eq!(err.user_message("download file"), "Failed to download file: resource not found.");
}

#[test]
fn client_error_body_is_shown() {
    let err = ApiError::Status { status: 400, body: " Email already in use \n".to_owned() };
    assert_eq!(err.user_message("create user"), "Failed to create user: Email already in use");
}

#[test]
fn server_error_body_is_hidden() {
    let err = ApiError::Status { status: 500, body: "stack trace".to_owned() };
    assert_eq!(err.user_message("save event"), "Failed to save event: server returned 500");
}

#[test]
fn session_errors_keep_their_own_text() {
    assert_eq!(ApiError::MissingSession.user_message("upload"), "User email not found. Please log in.");
    let err = ApiError::NotFound("File with ID f9 not found".to_owned());
    assert_eq!(err.user_message("download"), "File with ID f9 not found");
}

#[test]
fn field_error_displays_field_and_message() {
    assert_eq!(FieldError::new("email", "is required").to_string(), "email: is required");
}

#[test]
fn body_or_prefers_backend_text() {
    let err = ApiError::Status { status: 401, body: "Invalid credentials".to_owned() };
    assert_eq!(err.body_or("Login failed"), "Invalid credentials");
    let empty = ApiError::Status { status: 401, body: "  ".to_owned() };
    assert_eq!(empty.body_or("Login failed"), "Login failed");
    assert_eq!(ApiError::Decode("x".to_owned()).body_or("Signup failed"), "Signup failed");
}
