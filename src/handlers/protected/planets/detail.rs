use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::database::models::Planet;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /planet_details/:planet_id - fetch a single planet as flat JSON
pub async fn planet_details(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<Json<Planet>, ApiError> {
    let planet = state
        .planets
        .find_by_id(planet_id)
        .await?
        .ok_or_else(|| ApiError::not_found("That planet does not exist"))?;

    Ok(Json(planet))
}
