use super::*;

fn token_with(payload: &str) -> String {
    format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
}

#[test]
fn decodes_subject_and_role() {
    let claims = decode_claims(&token_with(r#"{"sub":"ada@lab.org","role":"ADMIN","exp":1900000000}"#)).unwrap();
    assert_eq!(claims.email(), "ada@lab.org");
    assert_eq!(claims.user_id(), "ada@lab.org");
    assert!(claims.is_admin());
    assert!(claims.can_moderate());
    assert!(!claims.is_permanent());
    assert_eq!(claims.exp, Some(1_900_000_000));
}

#[test]
fn role_is_optional() {
    let claims = decode_claims(&token_with(r#"{"sub":"u@x.io"}"#)).unwrap();
    assert_eq!(claims.role, None);
    assert!(!claims.is_user());
    assert!(!claims.can_moderate());
}

#[test]
fn super_admin_moderates_but_is_not_admin() {
    let claims = decode_claims(&token_with(r#"{"sub":"root@x.io","role":"SUPER_ADMIN"}"#)).unwrap();
    assert!(!claims.is_admin());
    assert!(claims.can_moderate());
}

#[test]
fn padded_payload_still_decodes() {
    let padded = format!("h.{}==.s", URL_SAFE_NO_PAD.encode(r#"{"sub":"p@x.io","role":"USER"}"#));
    assert!(decode_claims(&padded).unwrap().is_user());
}

#[test]
fn malformed_tokens_yield_no_claims() {
    assert_eq!(decode_claims(""), None);
    assert_eq!(decode_claims("not-a-token"), None);
    assert_eq!(decode_claims("a.b"), None);
    assert_eq!(decode_claims("a.b.c.d"), None);
    assert_eq!(decode_claims("h.%%%.s"), None);
    assert_eq!(decode_claims(&token_with("[1,2]")), None);
    assert_eq!(decode_claims(&token_with(r#"{"role":"ADMIN"}"#)), None);
}
