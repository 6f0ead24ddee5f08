use ps_auth::JwtValidator;
use ps_config::{Config, ConfigError};
use ps_server::logger::{self, LogSink};
use ps_server::{AppState, ShutdownCoordinator, build_router, register_service};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration; a missing signing secret stops here
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_sink = LogSink::from_config(&config.logging, &Config::config_dir()?);
    logger::initialize(config.logging.level, &log_sink)?;

    info!("Starting ps-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let pool = ps_db::connect(&database_path, config.database.connect_timeout()).await?;
    info!("Database connection established");

    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;
    let jwt_validator = JwtValidator::with_hs256(secret.as_bytes(), config.auth.leeway_secs);
    info!("JWT: {} authentication enabled", jwt_validator.algorithm());

    let app = build_router(AppState::new(pool, jwt_validator));

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Listen before registering: a signal during the agent call must still
    // end in deregistration
    let shutdown = ShutdownCoordinator::new();
    let mut shutdown_guard = shutdown.subscribe_guard();
    shutdown.listen_for_signals();

    let registration =
        register_service(&config.registry, &config.server.host, actual_addr.port()).await;

    info!("Server ready to accept connections");
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_guard.wait().await;
        })
        .await;
    info!("Graceful shutdown complete");

    // Deregister on every exit path out of serve
    if let Some(guard) = registration
        && let Err(e) = guard.release().await
    {
        error!("Service deregistration failed: {}", e);
    }

    served?;
    Ok(())
}
