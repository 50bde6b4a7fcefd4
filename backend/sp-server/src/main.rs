use sp_hub::{AppState, ConnectionConfig, Hub, HubStats, MetricsObserver, ObserverSet};
use sp_server::{ServerError, ServerState, build_router, logger, source};

use std::error::Error;
use std::sync::Arc;

use log::{error, info, warn};
use metrics_exporter_prometheus::PrometheusBuilder;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = sp_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = sp_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sp-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let prometheus = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| ServerError::Metrics {
            message: e.to_string(),
        })?;

    // Hub with its observers
    let stats = Arc::new(HubStats::new());
    let observers = ObserverSet::new()
        .with(stats.clone())
        .with(Arc::new(MetricsObserver::new()));
    let hub = Hub::spawn(Arc::new(observers));

    let app_state = AppState::new(
        hub.clone(),
        stats,
        ConnectionConfig::from(&config.websocket),
        config.websocket.allowed_origins.clone(),
    );
    if app_state.allowed_origins.is_empty() {
        warn!("No allowed origins configured, accepting WebSocket upgrades from any origin");
    }

    if config.source.enabled {
        source::spawn(hub.clone(), &config.source);
    } else {
        info!("Aircraft source disabled");
    }

    let app = build_router(ServerState::new(app_state, prometheus));

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Ctrl+C stops the hub, which closes every connection and the server
    let hub_for_signal = hub.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                hub_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            hub.stopped().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
