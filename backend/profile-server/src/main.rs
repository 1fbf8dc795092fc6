use profile_server::{AppState, build_router, logger, telemetry};

use profile_db::SqliteReferenceStore;
use profile_identity::{HttpIdentityGateway, IdentityGateway};
use profile_sync::{
    ConsumerSettings, ConsumerStatus, EventConsumer, MessageProcessor, Reconciler, RetryPolicy,
    ShutdownCoordinator, TokioDelay,
};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is normal outside development
    let dotenv = dotenvy::dotenv();

    // Load and validate configuration
    let config = profile_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = profile_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting profile-server v{}", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }
    config.log_summary();

    let metrics = match telemetry::install_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!("Metrics disabled: {}", e);
            None
        }
    };

    // Initialize database pool and run migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = profile_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    // Collaborators are built here and passed down explicitly
    let store = Arc::new(SqliteReferenceStore::new(pool.clone()));
    let reconciler = Reconciler::new(store);
    let identity: Arc<dyn IdentityGateway> = Arc::new(HttpIdentityGateway::new(
        &config.identity.base_url,
        config.identity.timeout(),
    )?);

    let shutdown = ShutdownCoordinator::new();
    let consumer_status = ConsumerStatus::new();

    // Event consumer (fail-soft: the HTTP surface runs without it)
    let consumer_task = if config.queue.enabled {
        let processor = Arc::new(MessageProcessor::new(
            Arc::new(reconciler.clone()),
            RetryPolicy::new(config.retry.max_retries, config.retry.delay()),
            Arc::new(TokioDelay),
        ));
        let settings = ConsumerSettings::new(
            config.queue.url.clone(),
            config.queue.queue_name.clone(),
            config.queue.dead_letter_queue.clone(),
            config.queue.prefetch,
        );

        EventConsumer::new(settings, processor, consumer_status.clone())
            .start(&shutdown)
            .await
    } else {
        warn!("Event consumption DISABLED - references are only created on demand");
        None
    };

    // Build application state
    let app_state = AppState {
        pool: pool.clone(),
        reconciler,
        identity,
        consumer_status,
        shutdown: shutdown.clone(),
        unavailable_as_not_found: config.identity.unavailable_as_not_found,
        metrics,
    };

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    let mut server_guard = shutdown.subscribe_guard();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            server_guard.wait().await;
            info!("HTTP server draining connections");
        })
        .await?;

    // The consumer finishes its in-flight message, then closes the broker connection
    if let Some(task) = consumer_task {
        if let Err(e) = task.await {
            error!("Event consumer task failed: {}", e);
        }
    }

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
