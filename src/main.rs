mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::order_expiry, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let state = AppState::new(db, config.order.clone());

    tracing::info!(
        "Order settings: closed interval {}h, code scheme {}, store timeout {:?}",
        config.order.closed_interval_hours,
        config.order.code_scheme,
        config.order.store_timeout
    );

    // Keep the scheduler handle alive for the lifetime of the server
    let _scheduler = order_expiry::start_scheduler(
        state.db.clone(),
        state.order_settings.clone(),
        &config.expiry_schedule,
    )
    .await?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, router::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
