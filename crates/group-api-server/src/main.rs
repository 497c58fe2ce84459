use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use group_api_server::config::Settings;
use group_api_server::router;
use group_api_server::store::GroupStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,group_api_server=debug".to_string()),
        )
        .with_target(true)
        .json()
        .init();

    info!("🚀 Starting group API server...");

    // Load configuration
    let settings = Settings::load()?;
    info!("✅ Configuration loaded");

    // One store for the whole process, injected into every handler
    let store = Arc::new(GroupStore::new());

    let app = router(store);

    // Server address
    let addr = SocketAddr::from((
        settings.server.host.parse::<std::net::IpAddr>()?,
        settings.server.port,
    ));

    info!("🎯 Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
