use crate::ApiError;
use crate::api::error::{CREATE_FAILED, INVALID_PROJECT_ID, NAME_TAKEN, SLUG_TAKEN};

use ps_auth::{AuthError, Claims};
use ps_core::{ErrorLocation, ProjectId};
use ps_db::{DbError, DuplicateField};

use std::panic::Location;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_missing_token_when_rendered_then_401_with_only_message() {
    // Given
    let error = ApiError::from(AuthError::MissingToken {
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json, serde_json::json!({ "message": "Token is missing" }));
}

#[tokio::test]
async fn given_expired_token_when_rendered_then_401_token_has_expired() {
    // Given
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Token has expired");
}

#[tokio::test]
async fn given_non_admin_claims_when_rendered_then_403() {
    // Given
    let error = ApiError::from(Claims::default().require_admin().unwrap_err());

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Admin privileges required");
}

#[tokio::test]
async fn given_bad_project_id_when_rendered_then_400_invalid_project_id() {
    // Given
    let parse_error = "not-an-id".parse::<ProjectId>().unwrap_err();
    let error = ApiError::from(parse_error);

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], INVALID_PROJECT_ID);
}

#[tokio::test]
async fn given_duplicate_errors_when_converted_then_conflict_messages() {
    // Given
    let name = DbError::Duplicate {
        field: DuplicateField::Name,
        location: ErrorLocation::from(Location::caller()),
    };
    let slug = DbError::Duplicate {
        field: DuplicateField::Slug,
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (name_status, name_json) = body_json(ApiError::creation_failed(name)).await;
    let (slug_status, slug_json) = body_json(ApiError::creation_failed(slug)).await;

    // Then
    assert_eq!(name_status, StatusCode::BAD_REQUEST);
    assert_eq!(name_json["message"], NAME_TAKEN);
    assert_eq!(slug_status, StatusCode::BAD_REQUEST);
    assert_eq!(slug_json["message"], SLUG_TAKEN);
}

#[tokio::test]
async fn given_store_failure_during_creation_when_rendered_then_generic_500() {
    // Given
    let error = ApiError::creation_failed(DbError::from(sqlx::Error::PoolTimedOut));

    // When
    let (status, json) = body_json(error).await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["message"], CREATE_FAILED);
    assert!(!json.to_string().contains("pool"));
}
