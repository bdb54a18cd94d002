mod config;
mod prices;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("mandi_backend=debug,tower_http=debug")
        .init();

    // Configuration is resolved once here; handlers never read the environment.
    let config = Config::from_env()?;
    info!("Resolved configuration: {:?}", config);

    let app_state = AppState::new(&config)?;

    // Build application
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Mandi server running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
