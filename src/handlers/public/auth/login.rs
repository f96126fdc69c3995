use axum::response::Json;
use axum::extract::State;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::extract::JsonOrForm;
use crate::auth;
use crate::config;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /login - verify credentials and issue a bearer token.
///
/// Accepts either a JSON or a form-encoded body. The token's identity claim
/// is the user's email; a credential mismatch is 401 with no hint as to
/// which half was wrong.
pub async fn login(
    State(state): State<AppState>,
    JsonOrForm(req): JsonOrForm<LoginRequest>,
) -> Result<Json<Value>, ApiError> {
    let user = state
        .users
        .find_by_credentials(&req.email, &req.password)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Bad email or password"))?;

    let security = &config::config().security;
    let access_token =
        auth::issue_token(&user.email, &security.jwt_secret, security.token_expiry_hours)?;

    tracing::info!(email = %user.email, "login succeeded");

    Ok(Json(json!({
        "message": "Login succeeded",
        "access_token": access_token
    })))
}
