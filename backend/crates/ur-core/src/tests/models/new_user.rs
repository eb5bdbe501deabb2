use crate::{CoreError, MISSING_NAME_OR_EMAIL, NewUser};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, ok};
use proptest::prelude::*;

#[test]
fn given_name_and_email_when_validated_then_ok() {
    let result = NewUser::new(Some("Ada".into()), Some("ada@example.com".into()));

    assert_that!(result, ok(anything()));
    let new_user = result.unwrap();
    assert_that!(new_user.name(), eq("Ada"));
    assert_that!(new_user.email(), eq("ada@example.com"));
}

#[test]
fn given_empty_name_when_validated_then_missing_field() {
    let result = NewUser::new(Some(String::new()), Some("x@example.com".into()));

    match result {
        Err(CoreError::MissingField { field, .. }) => assert_eq!(field, "name"),
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[test]
fn given_absent_email_when_validated_then_missing_field() {
    let result = NewUser::new(Some("Ada".into()), None);

    match result {
        Err(CoreError::MissingField { field, .. }) => assert_eq!(field, "email"),
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[test]
fn given_both_absent_when_validated_then_name_reported_first() {
    let result = NewUser::new(None, None);

    match result {
        Err(CoreError::MissingField { field, .. }) => assert_eq!(field, "name"),
        other => panic!("Expected MissingField, got {:?}", other),
    }
}

#[test]
fn given_whitespace_name_when_validated_then_accepted() {
    // Only emptiness is checked server-side
    let result = NewUser::new(Some("  ".into()), Some("x@example.com".into()));

    assert_that!(result, ok(anything()));
}

#[test]
fn given_missing_field_error_when_message_then_client_text() {
    let err = NewUser::new(None, Some("x@example.com".into())).unwrap_err();

    let err_msg = err.to_string();
    assert_that!(err.message(), eq(MISSING_NAME_OR_EMAIL));
    assert_that!(err_msg, contains_substring(MISSING_NAME_OR_EMAIL));
}

proptest! {
    #[test]
    fn given_non_empty_pair_when_validated_then_fields_preserved(
        name in ".{1,40}",
        email in ".{1,40}",
    ) {
        let new_user = NewUser::new(Some(name.clone()), Some(email.clone()));
        prop_assert!(new_user.is_ok());
        let new_user = new_user.unwrap();
        prop_assert_eq!(new_user.name(), name.as_str());
        prop_assert_eq!(new_user.email(), email.as_str());
    }

    #[test]
    fn given_empty_email_when_validated_then_fails(name in ".{0,40}") {
        prop_assert!(NewUser::new(Some(name), Some(String::new())).is_err());
    }
}
