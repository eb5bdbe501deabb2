use crate::ApiError;

use ur_core::{MISSING_NAME_OR_EMAIL, NewUser};
use ur_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::{assert_that, contains_substring, eq, some, starts_with};
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_validation_error_returns_400_with_flat_body() {
    let error = ApiError::Validation {
        message: MISSING_NAME_OR_EMAIL.into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "error": "Missing name or email" }));
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Failed to parse the request body as JSON".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to parse the request body as JSON");
}

#[tokio::test]
async fn test_internal_error_returns_500_with_message() {
    let error = ApiError::Internal {
        message: "database is locked".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["error"], "database is locked");
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[test]
fn test_core_error_converts_to_validation() {
    let core_error = NewUser::new(Some("Ada".into()), None).unwrap_err();

    let api_error = ApiError::from(core_error);

    assert_eq!(api_error.status(), StatusCode::BAD_REQUEST);
    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_that!(message.as_str(), eq(MISSING_NAME_OR_EMAIL));
            assert_that!(field.as_deref(), some(eq("email")));
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn test_validation_display_names_field() {
    let core_error = NewUser::new(None, Some("ada@example.com".into())).unwrap_err();

    let api_error = ApiError::from(core_error);

    assert_that!(api_error.to_string().as_str(), contains_substring("(field: name)"));
}

#[test]
fn test_json_error_converts_to_bad_request() {
    let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();

    let api_error = ApiError::from(json_error);

    assert_eq!(api_error.status(), StatusCode::BAD_REQUEST);
    match api_error {
        ApiError::BadRequest { message, .. } => {
            assert_that!(message.as_str(), starts_with("Invalid JSON body"));
        }
        other => panic!("Expected BadRequest, got {other:?}"),
    }
}

#[test]
fn test_db_error_converts_to_internal_with_raw_message() {
    let expected = sqlx::Error::PoolClosed.to_string();
    let db_error = DbError::from(sqlx::Error::PoolClosed);

    let api_error = ApiError::from(db_error);

    assert_eq!(api_error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    match api_error {
        ApiError::Internal { message, .. } => {
            assert_that!(message.as_str(), eq(expected.as_str()));
        }
        other => panic!("Expected Internal, got {other:?}"),
    }
}
