mod model;
mod server;

use std::{net::SocketAddr, sync::Arc};

use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    router,
    scheduler::lease_reminders,
    startup,
    state::AppState,
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
    let cors = startup::cors_layer(&config)?;

    // One request is replenished every `1000 / per_second` milliseconds.
    let replenish_ms = (1000 / config.rate_limit_per_second.max(1)).max(1);
    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or(InternalError::InvalidRateLimit(
            config.rate_limit_per_second,
            config.rate_limit_burst,
        ))?;

    tracing::info!("Starting server");

    // Start lease reminder scheduler
    let scheduler_db = db.clone();
    let scheduler_cron = config.lease_reminder_cron.clone();
    let reminder_days = config.lease_reminder_days;
    tokio::spawn(async move {
        if let Err(e) =
            lease_reminders::start_scheduler(scheduler_db, scheduler_cron, reminder_days).await
        {
            tracing::error!("Lease reminder scheduler error: {}", e);
        }
    });

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(cors)
        .layer(GovernorLayer::new(Arc::new(governor_config)));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
