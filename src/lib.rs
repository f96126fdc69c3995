use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

pub use state::AppState;

/// Assemble the full router over the shared application state.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .merge(public_routes())
        // Protected CRUD, guarded by the bearer-token middleware
        .merge(planet_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use handlers::public::{auth, home};

    Router::new()
        .route("/", get(home::home))
        .route("/super_simple", get(home::super_simple))
        .route("/parameters/:name/:age", get(home::url_parameters))
        .route("/health", get(home::health))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

fn planet_routes() -> Router<AppState> {
    use handlers::protected::planets;

    Router::new()
        .route("/planet_details/:planet_id", get(planets::planet_details))
        .route("/add_planet", post(planets::add_planet))
        .route("/update_planet", put(planets::update_planet))
        .route("/remove_planet/:planet_id", delete(planets::remove_planet))
        .route_layer(axum::middleware::from_fn(
            middleware::jwt_auth_middleware,
        ))
}
