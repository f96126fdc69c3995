use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::api::format::PlanetForm;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /add_planet - create a planet from form fields.
///
/// A duplicate name is non-fatal and reported in the body with 200. The 201
/// response includes the created record so clients learn the generated id.
pub async fn add_planet(
    State(state): State<AppState>,
    Form(form): Form<PlanetForm>,
) -> Result<impl IntoResponse, ApiError> {
    if state
        .planets
        .find_by_name(&form.planet_name)
        .await?
        .is_some()
    {
        return Ok((
            StatusCode::OK,
            Json(json!({ "message": "There is already a planet by that name" })),
        ));
    }

    let new_planet = form.into_new_planet()?;
    let planet = state.planets.insert(new_planet).await?;

    tracing::info!(planet_id = planet.planet_id, planet_name = %planet.planet_name, "added planet");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "You added a planet",
            "planet": planet
        })),
    ))
}
