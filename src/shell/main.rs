use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use contact_manager::shared::infrastructure::contact_repository::in_memory::InMemoryContactRepository;
use contact_manager::shell::config::AppConfig;
use contact_manager::shell::http::{GRAPHQL_PATH, router};
use contact_manager::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // In-memory storage for now
    let repository = Arc::new(InMemoryContactRepository::new());
    let app = router(AppState::new(repository), &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "contacts API listening");
    tracing::info!("GraphQL endpoint: http://{}{}", config.bind_addr, GRAPHQL_PATH);
    axum::serve(listener, app).await?;
    Ok(())
}
