//! Part Scout - electronic component price aggregator
//!
//! Serves aggregated vendor prices, substitutes and supply risk for part
//! numbers over HTTP, backed by a short-lived in-memory cache.

use std::net::SocketAddr;

use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use part_scout::api::create_router;
use part_scout::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the part lookup server.
///
/// # Startup Sequence
/// 1. Load `.env` if present and initialize tracing
/// 2. Load configuration from environment variables
/// 3. Build the query service and its shared cache
/// 4. Start background TTL cleanup task
/// 5. Serve the router until SIGINT/SIGTERM
/// 6. Drop all cached lookups on the way out
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "part_scout=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Part Scout");

    let config = Config::from_env();
    info!(
        "Configuration loaded: sources={:?}, default_ttl={}ms, lookup_timeout={}ms, port={}, cleanup_interval={}s, fallback={}",
        config.sources,
        config.default_ttl_ms,
        config.lookup_timeout_ms,
        config.server_port,
        config.cleanup_interval,
        config.fallback_enabled
    );
    if config.simulated_failure_rate > 0.0 {
        warn!(
            "Simulated sources fail {:.0}% of lookups",
            config.simulated_failure_rate * 100.0
        );
    }

    let state = AppState::from_config(&config);
    let service = state.service.clone();

    let cleanup_handle = spawn_cleanup_task(service.cache().clone(), config.cleanup_interval);
    info!("Background cleanup task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await?;

    let dropped = service.invalidate_all().await;
    info!("Server shutdown complete, {} cached lookups dropped", dropped);
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
