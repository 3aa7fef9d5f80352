mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env()?;
    match &config.upstream_url {
        Some(url) => tracing::info!(upstream = %url, "forwarding /api/v1"),
        None => tracing::warn!("API_UPSTREAM_URL not set; /api/v1 requests will answer 502"),
    }

    let state = state::AppState::new(&config)?;
    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "student-logs listening");
    axum::serve(listener, app).await?;
    Ok(())
}
