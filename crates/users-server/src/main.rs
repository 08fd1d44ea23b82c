use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use users_server::config::ServerConfig;
use users_server::routes;
use users_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("users_server=info".parse()?),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    let state = Arc::new(AppState::seeded());

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Server running in http://localhost:{}", config.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
