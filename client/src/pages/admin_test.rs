use super::*;

fn user(id: &str, email: &str, status: UserStatus) -> User {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "email": email,
        "role": "USER",
        "status": status.as_str(),
        "firstName": "Test",
        "lastName": "User",
    }))
    .expect("user json")
}

#[test]
fn tabs_are_listed_in_console_order() {
    let labels: Vec<_> = AdminTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["Projects", "Events", "Users", "Files"]);
    assert_eq!(AdminTab::default(), AdminTab::Projects);
}

#[test]
fn total_users_sums_every_role() {
    let counts = AdminCounts {
        users_by_role: vec![(Role::Admin, Some(2)), (Role::Permanent, Some(5)), (Role::User, Some(11))],
        files: Some(3),
        projects: Some(4),
    };
    assert_eq!(counts.total_users(), Some(18));
    assert_eq!(AdminCounts::default().total_users(), Some(0));
}

#[test]
fn failed_counts_read_not_available_and_report_first_error() {
    let down = ApiError::Network("refused".to_owned());
    let (counts, failure) = AdminCounts::collect(
        vec![(Role::Admin, Ok(2)), (Role::User, Err(down.clone()))],
        Ok(7),
        Err(ApiError::Status { status: 500, body: "boom".to_owned() }),
    );
    assert_eq!(failure, Some(down));
    assert_eq!(counts.users_by_role[0], (Role::Admin, Some(2)));
    assert_eq!(counts.total_users(), None);
    assert_eq!(counter_text(counts.total_users()), "n/a");
    assert_eq!(counter_text(counts.files), "7");
    assert_eq!(counter_text(counts.projects), "n/a");
}

#[test]
fn complete_counts_carry_no_error() {
    let (counts, failure) = AdminCounts::collect(vec![(Role::User, Ok(4))], Ok(1), Ok(0));
    assert!(failure.is_none());
    assert_eq!(counter_text(counts.total_users()), "4");
}

#[test]
fn only_pending_accounts_await_review() {
    assert!(awaiting_review(&user("1", "a@lab.org", UserStatus::Pending)));
    assert!(!awaiting_review(&user("2", "b@lab.org", UserStatus::Approved)));
    assert!(!awaiting_review(&user("3", "c@lab.org", UserStatus::Declined)));
}

#[test]
fn duplicate_email_is_reported_plainly() {
    let taken = ApiError::Status { status: 400, body: "duplicate".to_owned() };
    assert_eq!(create_user_error(&taken), "Email already in use");
    let down = ApiError::Network("refused".to_owned());
    assert!(create_user_error(&down).starts_with("Unable to connect"));
}

#[test]
fn replace_user_swaps_matching_record_and_appends_new_ones() {
    let mut users = vec![user("1", "a@lab.org", UserStatus::Pending), user("2", "b@lab.org", UserStatus::Pending)];
    replace_user(&mut users, user("2", "b@lab.org", UserStatus::Approved));
    assert_eq!(users[1].status, UserStatus::Approved);
    assert_eq!(users.len(), 2);

    replace_user(&mut users, user("3", "c@lab.org", UserStatus::Approved));
    assert_eq!(users.len(), 3);
    assert_eq!(users[2].id, "3");
}
