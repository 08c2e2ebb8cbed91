use super::*;

#[test]
fn prepare_login_trims_email_and_keeps_password() {
    let form = LoginRequest { email: "  ada@lab.org ".to_owned(), password: " secret ".to_owned() };
    let req = prepare_login(&form).expect("valid form");
    assert_eq!(req.email, "ada@lab.org");
    assert_eq!(req.password, " secret ");
}

#[test]
fn prepare_login_reports_every_missing_field() {
    let errors = prepare_login(&LoginRequest::default()).expect_err("empty form");
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["email", "password"]);
}

#[test]
fn prepare_login_rejects_malformed_email() {
    let form = LoginRequest { email: "not-an-email".to_owned(), password: "x".to_owned() };
    let errors = prepare_login(&form).expect_err("bad email");
    assert_eq!(errors[0].field, "email");
}
