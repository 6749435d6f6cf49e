//! Backend entry-point: loads configuration, migrates the database and serves
//! the REST API until SIGINT or SIGTERM.

mod server;

use actix_web::web;
use color_eyre::eyre::WrapErr;
use tracing::{info, warn};

use dealership::config::AppConfig;
use dealership::inbound::http::health::HealthState;
use dealership::logging;
use dealership::outbound::persistence::{DbPool, run_migrations};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let dotenv = dotenvy::dotenv();

    let config = AppConfig::load().wrap_err("invalid configuration")?;
    let level = logging::parse_level(config.log.level())?;
    if let Err(error) = logging::init(level) {
        warn!(%error, "tracing init failed");
    }
    match dotenv {
        Ok(path) => info!(path = %path.display(), "loaded environment file"),
        Err(error) if error.not_found() => {}
        Err(error) => warn!(%error, "failed to read environment file"),
    }
    for warning in config.warnings() {
        warn!(warning, "configuration warning");
    }

    let database_url = config.database.database_url()?;
    tokio::task::spawn_blocking(move || run_migrations(&database_url))
        .await
        .wrap_err("migration task failed")?
        .wrap_err("failed to apply database migrations")?;

    let pool = DbPool::new(config.database.pool_config()?)
        .await
        .wrap_err("failed to build database pool")?;

    let health_state = web::Data::new(HealthState::new());
    let server_config = ServerConfig::from_settings(&config.api, pool);
    info!(
        version = config.api.version(),
        addr = %server_config.bind_addr(),
        "starting HTTP server"
    );
    let server = create_server(health_state.clone(), server_config)?;

    let handle = server.handle();
    actix_web::rt::spawn(async move {
        wait_for_shutdown_signal().await;
        health_state.mark_unhealthy();
        info!("shutdown signal received, draining connections");
        handle.stop(true).await;
    });

    // The server owns every pool handle; they are released once it resolves.
    server.await?;
    info!("server stopped");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    result = tokio::signal::ctrl_c() => {
                        if let Err(error) = result {
                            warn!(%error, "failed to listen for SIGINT");
                        }
                    }
                    _ = terminate.recv() => {}
                }
                return;
            }
            Err(error) => warn!(%error, "failed to listen for SIGTERM"),
        }
    }

    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "failed to listen for SIGINT");
    }
}
