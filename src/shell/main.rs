use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use material_tracking::modules::material_tracking::adapters::outbound::order_store_in_memory::InMemoryOrderStore;
use material_tracking::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use material_tracking::shell::config::AppConfig;
use material_tracking::shell::http::router;
use material_tracking::shell::seed::load_seed;
use material_tracking::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let store = Arc::new(InMemoryOrderStore::new());
    let outbox = Arc::new(InMemoryDomainOutbox::new());

    if let Some(path) = &config.seed_path {
        let count = load_seed(path, &store).await?;
        tracing::info!(count, path = %path.display(), "seeded order store");
    }

    let state = AppState::in_memory(store, outbox, &config.outbox_topic);

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("HTTP API: http://{}/material-tracking", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
