//! Min-Now same-origin server
//!
//! Serves the frontend bundle, answers `/api/add` locally and relays every
//! other `/api/*` request to the external backend.

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

pub use config::ServerConfig;
pub use error::AppError;
pub use proxy::Backend;
pub use routes::{build_router, build_router_with_layers};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub backend: Backend,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Result<Self> {
        let backend = Backend::new(&config.api_base_url, config.request_timeout())?;
        Ok(Self {
            config: Arc::new(config),
            backend,
        })
    }
}

pub async fn run(config: ServerConfig) -> Result<()> {
    config.validate()?;
    let addr: std::net::SocketAddr = config.bind_addr.parse()?;
    let state = AppState::new(config)?;
    info!(
        backend = %state.config.api_base_url,
        static_dir = %state.config.static_dir.display(),
        "starting min-now-server"
    );

    let app = build_router_with_layers(state);
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutting down");
}
