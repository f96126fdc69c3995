use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Domain record. Serializes to the flat wire shape
/// {planet_id, planet_name, planet_type, home_star, mass, radius, distance}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub planet_id: i32,
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}

/// Insert payload; the id is generated by the database.
#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: f64,
    pub radius: f64,
    pub distance: f64,
}
