use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;

/// DELETE /remove_planet/:planet_id - delete a planet; 202 on success,
/// 404 when the id does not exist.
pub async fn remove_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let planet = state
        .planets
        .find_by_id(planet_id)
        .await?
        .ok_or_else(|| ApiError::not_found("That planet does not exist"))?;

    state.planets.delete(&planet).await?;

    tracing::info!(planet_id = planet.planet_id, "deleted planet");

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "message": "You deleted a planet" })),
    ))
}
