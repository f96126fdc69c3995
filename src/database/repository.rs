use sqlx::PgPool;

use crate::auth::password;
use crate::database::models::{NewPlanet, NewUser, Planet, User};
use crate::database::DatabaseError;

/// Persistence operations over users. Holds a pool clone; cheap to clone
/// and share across handlers via application state.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Look up by email and verify the password against the stored hash.
    /// Returns None on either an unknown email or a mismatch, so callers
    /// cannot distinguish the two cases.
    pub async fn find_by_credentials(
        &self,
        email: &str,
        plaintext: &str,
    ) -> Result<Option<User>, DatabaseError> {
        let user = self.find_by_email(email).await?;
        Ok(user.filter(|u| password::verify(plaintext, &u.password)))
    }

    pub async fn insert(&self, new: NewUser) -> Result<User, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, email, password)
             VALUES ($1, $2, $3, $4)
             RETURNING id, first_name, last_name, email, password",
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .bind(&new.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }
}

/// Persistence operations over planets.
#[derive(Clone)]
pub struct PlanetRepository {
    pool: PgPool,
}

impl PlanetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, planet_id: i32) -> Result<Option<Planet>, DatabaseError> {
        let planet =
            sqlx::query_as::<_, Planet>("SELECT * FROM planets WHERE planet_id = $1")
                .bind(planet_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(planet)
    }

    pub async fn find_by_name(&self, planet_name: &str) -> Result<Option<Planet>, DatabaseError> {
        let planet =
            sqlx::query_as::<_, Planet>("SELECT * FROM planets WHERE planet_name = $1")
                .bind(planet_name)
                .fetch_optional(&self.pool)
                .await?;

        Ok(planet)
    }

    pub async fn insert(&self, new: NewPlanet) -> Result<Planet, DatabaseError> {
        let planet = sqlx::query_as::<_, Planet>(
            "INSERT INTO planets (planet_name, planet_type, home_star, mass, radius, distance)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&new.planet_name)
        .bind(&new.planet_type)
        .bind(&new.home_star)
        .bind(new.mass)
        .bind(new.radius)
        .bind(new.distance)
        .fetch_one(&self.pool)
        .await?;

        Ok(planet)
    }

    pub async fn update(&self, planet: &Planet) -> Result<(), DatabaseError> {
        sqlx::query(
            "UPDATE planets
             SET planet_name = $2, planet_type = $3, home_star = $4,
                 mass = $5, radius = $6, distance = $7
             WHERE planet_id = $1",
        )
        .bind(planet.planet_id)
        .bind(&planet.planet_name)
        .bind(&planet.planet_type)
        .bind(&planet.home_star)
        .bind(planet.mass)
        .bind(planet.radius)
        .bind(planet.distance)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, planet: &Planet) -> Result<(), DatabaseError> {
        sqlx::query("DELETE FROM planets WHERE planet_id = $1")
            .bind(planet.planet_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
