use super::*;

#[test]
fn route_parameter_wins_over_session_email() {
    assert_eq!(
        target_email(Some("ana@lab.org".to_owned()), Some("me@lab.org".to_owned())),
        Some("ana@lab.org".to_owned())
    );
}

#[test]
fn blank_parameter_falls_back_to_session() {
    assert_eq!(target_email(Some("  ".to_owned()), Some("me@lab.org".to_owned())), Some("me@lab.org".to_owned()));
    assert_eq!(target_email(None, None), None);
}

#[test]
fn own_profile_compares_emails_case_insensitively() {
    assert!(is_own_profile("Me@Lab.org", Some("me@lab.org")));
    assert!(!is_own_profile("ana@lab.org", Some("me@lab.org")));
    assert!(!is_own_profile("me@lab.org", None));
}

#[test]
fn enrolment_failures_are_reported_once() {
    let down = ApiError::Network("refused".to_owned());
    assert_eq!(enrolment_error(&Ok(Vec::new()), &Ok(Vec::new())), None);
    assert_eq!(enrolment_error(&Err(down.clone()), &Ok(Vec::new())), Some(down.clone()));
    assert_eq!(enrolment_error(&Ok(Vec::new()), &Err(ApiError::Unavailable)), Some(ApiError::Unavailable));
    assert_eq!(enrolment_error(&Err(down.clone()), &Err(ApiError::Unavailable)), Some(down));
}
