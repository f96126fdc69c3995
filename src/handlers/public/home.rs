use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// GET / - static greeting
pub async fn home() -> &'static str {
    "Hello world!"
}

/// GET /super_simple - static JSON message
pub async fn super_simple() -> Json<Value> {
    Json(json!({ "message": "Hello from the planetary API." }))
}

/// GET /parameters/:name/:age - demo route reading URL path segments.
/// Rejects with 401 below the age of 18; the boundary is inclusive.
pub async fn url_parameters(
    Path((name, age)): Path<(String, u32)>,
) -> Result<Json<Value>, ApiError> {
    if age < 18 {
        return Err(ApiError::unauthorized(format!(
            "Sorry {}, you are not old enough",
            name
        )));
    }

    Ok(Json(json!({
        "message": format!("Welcome {}, you are old enough", name)
    })))
}

/// GET /health - liveness plus a database ping
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
