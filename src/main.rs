mod config;
mod db;
mod error;
mod routes;
mod services;
mod state;
mod store;

use std::sync::Arc;

use store::CatalogStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");

    // Without DATABASE_URL the catalog runs in memory and forgets on exit.
    let store: Arc<dyn CatalogStore> = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = db::init_pool(database_url, config.db_max_connections)
                .await
                .expect("database init failed");
            tracing::info!(max_connections = config.db_max_connections, "postgres store initialized");
            Arc::new(store::postgres::PgStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store");
            Arc::new(store::memory::MemoryStore::new())
        }
    };

    let state = state::AppState::new(store);

    let app = routes::app(state);
    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind");

    tracing::info!(%listen_addr, "game catalog listening");
    axum::serve(listener, app).await.expect("server failed");
}
