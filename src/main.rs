mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::{HostConfig, HostError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "manutrack host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::leptos_app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, api_base_url = %client::config::api_base_url(), "manutrack listening");
    axum::serve(listener, app).await?;
    Ok(())
}
