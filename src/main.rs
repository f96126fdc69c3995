use planetary_api::{app, config, database, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL and JWT_SECRET
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Planetary API in {:?} mode", config.environment);

    let pool = database::connect().unwrap_or_else(|e| panic!("database setup failed: {}", e));

    // Best-effort bootstrap, off the startup path so the server binds even
    // while the database is unreachable; routes that need it fail with a
    // server error until it comes back.
    let bootstrap_pool = pool.clone();
    tokio::spawn(async move {
        if let Err(e) = database::ensure_schema(&bootstrap_pool).await {
            tracing::warn!("schema bootstrap skipped: {}", e);
        }
    });

    let state = AppState::new(pool);
    let router = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Planetary API listening on http://{}", bind_addr);

    axum::serve(listener, router).await.expect("server");
}
