use crate::ApiError;
use crate::api::resolve::{authorize_write, parse_id, parse_user_id};

#[test]
fn test_parse_id_accepts_positive_integers() {
    assert_eq!(parse_id("badge_id", "1").unwrap(), 1);
    assert_eq!(parse_id("badge_id", "9007199254740993").unwrap(), 9007199254740993);
    assert_eq!(parse_user_id("42").unwrap(), 42);
}

#[test]
fn test_parse_id_rejects_non_integers() {
    for raw in ["abc", "", "1.5", "0x10", " 7"] {
        match parse_id("goal_id", raw) {
            Err(ApiError::Validation { field, .. }) => {
                assert_eq!(field.as_deref(), Some("goal_id"))
            }
            other => panic!("Expected Validation for {:?}, got {:?}", raw, other),
        }
    }
}

#[test]
fn test_parse_id_rejects_zero_and_negative() {
    assert!(parse_user_id("0").is_err());
    assert!(parse_user_id("-3").is_err());
}

#[test]
fn test_authorize_write_allows_owner() {
    assert!(authorize_write(Some(42), 42).is_ok());
}

#[test]
fn test_authorize_write_rejects_other_user() {
    assert!(matches!(
        authorize_write(Some(7), 42),
        Err(ApiError::Forbidden { .. })
    ));
}

#[test]
fn test_authorize_write_rejects_missing_caller() {
    match authorize_write(None, 42) {
        Err(ApiError::Forbidden { message, .. }) => assert!(message.contains("X-User-Id")),
        other => panic!("Expected Forbidden, got {:?}", other),
    }
}
