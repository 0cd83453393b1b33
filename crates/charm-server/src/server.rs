//! Server setup and lifecycle management

use std::sync::Arc;

use charm_core::config::CharmConfig;
use charm_core::repository::CharacterRepository;
use charm_infrastructure::{InMemoryCharacterRepository, JsonCharacterRepository};
use tokio::net::TcpListener;

use crate::api::{AppState, create_router};
use crate::error::{DaemonError, DaemonResult};

/// CHARM HTTP server
pub struct Server {
    config: CharmConfig,
    state: AppState,
}

impl Server {
    /// Builds the server over the JSON character store, or an in-memory
    /// one when `ephemeral` is set.
    pub fn new(config: CharmConfig, ephemeral: bool) -> DaemonResult<Self> {
        let repository: Arc<dyn CharacterRepository> = if ephemeral {
            tracing::warn!("Ephemeral mode: created characters are not persisted");
            Arc::new(InMemoryCharacterRepository::new())
        } else {
            let repository = JsonCharacterRepository::in_dir(config.storage.data_dir.as_deref())?;
            tracing::info!(path = %repository.path().display(), "Character store");
            Arc::new(repository)
        };

        let state = AppState::new(repository, &config.chat)?;
        Ok(Self { config, state })
    }

    /// Run the server until Ctrl+C or SIGTERM
    pub async fn run(self) -> DaemonResult<()> {
        let addr = self.config.server.socket_addr()?;
        let app = create_router(self.state, self.config.server.cors);

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("charmd listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DaemonError::Server(e.to_string()))?;

        tracing::info!("charmd shutting down");
        Ok(())
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
