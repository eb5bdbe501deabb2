use ur_server::{AppState, ServerErrorResult, build_router, logger};

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = ur_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ur-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // One pool for the whole process
    let database_path = config.database_path()?;
    if let Some(db_dir) = database_path.parent() {
        std::fs::create_dir_all(db_dir)?;
    }
    let pool = ur_db::connect(&database_path).await?;
    ur_db::run_migrations(&pool).await?;

    let app = build_router(AppState::new(pool.clone()));

    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Actual bound address matters when port is 0
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);
    info!("Form page: http://{}/", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
