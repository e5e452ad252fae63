//! User handlers.

use axum::{extract::State, http::StatusCode, routing::post, Router};

use common::AppResult;
use domain::CreateUserRequest;

use crate::http::extractors::AppJson;
use crate::http::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", post(create_user))
}

/// Register a new user.
///
/// Responds 201 with an empty body. A duplicate email yields 409.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> AppResult<StatusCode> {
    state.create_user.execute(payload).await?;
    Ok(StatusCode::CREATED)
}
