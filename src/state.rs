use sqlx::PgPool;

use crate::database::repository::{PlanetRepository, UserRepository};

/// Shared application state injected into handlers. Repositories hold pool
/// clones, so cloning the state per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub users: UserRepository,
    pub planets: PlanetRepository,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            planets: PlanetRepository::new(pool.clone()),
            pool,
        }
    }
}
