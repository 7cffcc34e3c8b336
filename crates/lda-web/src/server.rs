//! Listener setup and server lifecycle.

use std::io::ErrorKind;
use std::path::PathBuf;

use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

use crate::state::{AppState, DEFAULT_FRONTEND_PATH};

/// Host the server binds when none is given.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Port the server binds when none is given.
pub const DEFAULT_PORT: u16 = 5000;

/// Server settings resolved by the caller.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            frontend_path: PathBuf::from(DEFAULT_FRONTEND_PATH),
        }
    }
}

/// Bind `host:port`, retrying once on `port + 1` if the port is taken.
///
/// Any other bind error, or a second failure, is returned to the caller.
pub async fn bind_with_fallback(host: &str, port: u16) -> std::io::Result<TcpListener> {
    match TcpListener::bind((host, port)).await {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            let Some(next) = port.checked_add(1) else {
                return Err(e);
            };
            warn!("Port {} is already in use. Trying port {}", port, next);
            TcpListener::bind((host, next)).await
        }
        Err(e) => Err(e),
    }
}

/// Run the web server until a shutdown signal arrives.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::new(config.frontend_path);
    let app = crate::create_router(state);

    let listener = bind_with_fallback(&config.host, config.port).await?;
    let addr = listener.local_addr()?;
    info!("Web server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("signal received, starting graceful shutdown");
}
