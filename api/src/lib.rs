use std::{env, error::Error};

mod core;
mod routes;

use axum::{Router, routing::post};
use tokio::signal;

use crate::{core::app_state::AppState, routes::ask::ask_air_quality_route::ask_air_quality};

pub async fn start() -> Result<(), Box<dyn Error>> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "127.0.0.1:8080".into());

    let state = AppState::from_env()?;

    let app = Router::new()
        .route("/ask_air_quality", post(ask_air_quality))
        .with_state(state);

    tracing::info!("listening on {host_url}");

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&host_url).await?;

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    // Wait for the Ctrl+C signal
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
