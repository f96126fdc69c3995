//! Wire-format conversion for planet input. Numeric fields arrive as text
//! in form bodies and are parsed here; a bad value is a 400 naming the
//! offending field, never a silent drop.

use serde::Deserialize;
use std::collections::HashMap;

use crate::database::models::{NewPlanet, Planet};
use crate::error::ApiError;

/// Form fields for POST /add_planet
#[derive(Debug, Deserialize)]
pub struct PlanetForm {
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: String,
    pub radius: String,
    pub distance: String,
}

impl PlanetForm {
    pub fn into_new_planet(self) -> Result<NewPlanet, ApiError> {
        Ok(NewPlanet {
            planet_name: self.planet_name,
            planet_type: self.planet_type,
            home_star: self.home_star,
            mass: parse_f64("mass", &self.mass)?,
            radius: parse_f64("radius", &self.radius)?,
            distance: parse_f64("distance", &self.distance)?,
        })
    }
}

/// Form fields for PUT /update_planet; carries the target id as text.
#[derive(Debug, Deserialize)]
pub struct PlanetUpdateForm {
    pub planet_id: String,
    pub planet_name: String,
    pub planet_type: String,
    pub home_star: String,
    pub mass: String,
    pub radius: String,
    pub distance: String,
}

impl PlanetUpdateForm {
    pub fn planet_id(&self) -> Result<i32, ApiError> {
        parse_i32("planet_id", &self.planet_id)
    }

    /// Apply the form fields over an existing record, keeping its id.
    pub fn into_planet(self, planet_id: i32) -> Result<Planet, ApiError> {
        Ok(Planet {
            planet_id,
            planet_name: self.planet_name,
            planet_type: self.planet_type,
            home_star: self.home_star,
            mass: parse_f64("mass", &self.mass)?,
            radius: parse_f64("radius", &self.radius)?,
            distance: parse_f64("distance", &self.distance)?,
        })
    }
}

fn parse_f64(field: &str, value: &str) -> Result<f64, ApiError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| field_error(field, value))
}

fn parse_i32(field: &str, value: &str) -> Result<i32, ApiError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| field_error(field, value))
}

fn field_error(field: &str, value: &str) -> ApiError {
    let mut field_errors = HashMap::new();
    field_errors.insert(field.to_string(), format!("Invalid numeric value: {}", value));
    ApiError::validation_error("Invalid field format", Some(field_errors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(mass: &str) -> PlanetForm {
        PlanetForm {
            planet_name: "Earth".into(),
            planet_type: "Class M".into(),
            home_star: "Sol".into(),
            mass: mass.into(),
            radius: "3959".into(),
            distance: "92.96e6".into(),
        }
    }

    #[test]
    fn parses_numeric_fields() {
        let new = form("5.972e24").into_new_planet().unwrap();
        assert_eq!(new.mass, 5.972e24);
        assert_eq!(new.radius, 3959.0);
        assert_eq!(new.distance, 92.96e6);
    }

    #[test]
    fn bad_numeric_names_the_field() {
        let err = form("heavy").into_new_planet().unwrap_err();
        assert_eq!(err.status_code(), 400);
        let body = err.to_json();
        assert!(body["field_errors"]["mass"]
            .as_str()
            .unwrap()
            .contains("heavy"));
    }

    #[test]
    fn update_form_parses_id() {
        let form = PlanetUpdateForm {
            planet_id: "7".into(),
            planet_name: "Mars".into(),
            planet_type: "Class K".into(),
            home_star: "Sol".into(),
            mass: "6.39e23".into(),
            radius: "2106".into(),
            distance: "141.6e6".into(),
        };
        assert_eq!(form.planet_id().unwrap(), 7);
        let planet = form.into_planet(7).unwrap();
        assert_eq!(planet.planet_id, 7);
        assert_eq!(planet.planet_name, "Mars");
    }

    #[test]
    fn update_form_rejects_bad_id() {
        let form = PlanetUpdateForm {
            planet_id: "seven".into(),
            planet_name: "Mars".into(),
            planet_type: "Class K".into(),
            home_star: "Sol".into(),
            mass: "1".into(),
            radius: "1".into(),
            distance: "1".into(),
        };
        assert_eq!(form.planet_id().unwrap_err().status_code(), 400);
    }
}
