use axum::{
    extract::{Form, State},
    response::Json,
};
use serde_json::{json, Value};

use crate::api::format::PlanetUpdateForm;
use crate::error::ApiError;
use crate::state::AppState;

/// PUT /update_planet - replace a planet's fields, keyed by the planet_id
/// form field. 404 when the id does not exist.
pub async fn update_planet(
    State(state): State<AppState>,
    Form(form): Form<PlanetUpdateForm>,
) -> Result<Json<Value>, ApiError> {
    let planet_id = form.planet_id()?;

    let existing = state
        .planets
        .find_by_id(planet_id)
        .await?
        .ok_or_else(|| ApiError::not_found("That planet does not exist"))?;

    let updated = form.into_planet(existing.planet_id)?;
    state.planets.update(&updated).await?;

    tracing::info!(planet_id = updated.planet_id, "updated planet");

    Ok(Json(json!({ "message": "You updated a planet" })))
}
