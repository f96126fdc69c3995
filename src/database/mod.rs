use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub mod models;
pub mod repository;

/// Errors from the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Build the process-wide connection pool from DATABASE_URL.
///
/// The pool connects lazily so the server can start (and serve routes that
/// do not touch the database) before Postgres is reachable.
pub fn connect() -> Result<PgPool, DatabaseError> {
    let url =
        std::env::var("DATABASE_URL").map_err(|_| DatabaseError::ConfigMissing("DATABASE_URL"))?;
    let db_config = &crate::config::config().database;

    let pool = PgPoolOptions::new()
        .max_connections(db_config.max_connections)
        .acquire_timeout(Duration::from_secs(db_config.connect_timeout_secs))
        .connect_lazy(&url)?;

    Ok(pool)
}

/// Idempotent table bootstrap. Not a migration system: it only creates the
/// two tables when they are absent.
///
/// `email` carries a storage-level unique constraint. `planet_name`
/// deliberately does not; uniqueness is checked before insert, and the
/// check-then-insert race is a documented limitation.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS planets (
            planet_id SERIAL PRIMARY KEY,
            planet_name TEXT NOT NULL,
            planet_type TEXT NOT NULL,
            home_star TEXT NOT NULL,
            mass DOUBLE PRECISION NOT NULL,
            radius DOUBLE PRECISION NOT NULL,
            distance DOUBLE PRECISION NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    info!("Database schema verified");
    Ok(())
}

/// Pings the pool to ensure connectivity
pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
