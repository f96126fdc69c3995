use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;

use crate::auth::password;
use crate::database::models::NewUser;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// POST /register - create a user account.
///
/// A duplicate email is non-fatal and reported in the body with 200; a
/// fresh registration stores a bcrypt hash of the password and returns 201.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if state.users.find_by_email(&form.email).await?.is_some() {
        return Ok((
            StatusCode::OK,
            Json(json!({ "message": "That email already exists" })),
        ));
    }

    let hashed = password::hash(&form.password)?;
    let user = state
        .users
        .insert(NewUser {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            password: hashed,
        })
        .await?;

    tracing::info!(email = %user.email, "registered new user");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully" })),
    ))
}
