//! User REST API handlers
//!
//! Create and list only. Each request goes straight to storage.

use crate::{ApiResult, AppState, SubmitUserRequest};

use ur_core::{NewUser, User};
use ur_db::UserRepository;

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use log::{debug, info};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/submit
///
/// Create a user record. 201 with the stored record, 400 when the body is not
/// JSON or name or email is missing, 500 when storage fails. The content type
/// is not checked.
pub async fn submit_user(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<User>)> {
    let req = SubmitUserRequest::from_body(&body)?;

    let new_user = NewUser::new(req.name, req.email)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.create(&new_user).await?;

    info!("Created user {} <{}> (id {})", user.name, user.email, user.id);

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users
///
/// List every user, most recently created first.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all().await?;

    debug!("Listing {} users", users.len());

    Ok(Json(users))
}
