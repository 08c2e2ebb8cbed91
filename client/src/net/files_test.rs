use super::*;

#[test]
fn types_pass_through_backend_list() {
    let types = types_or_default(Ok(vec!["poster".to_owned()]));
    assert_eq!(types, vec!["poster"]);
}

#[test]
fn types_fall_back_on_error_or_empty_list() {
    let expected = vec!["dataset", "certification", "research paper", "report"];
    assert_eq!(types_or_default(Err(ApiError::Network("down".to_owned()))), expected);
    assert_eq!(types_or_default(Ok(Vec::new())), expected);
}
