//! HTTP server wrapper shared by both binaries.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::{BoardServiceConfig, UserServiceConfig};
use crate::db::Database;
use crate::directory::UserDirectory;
use crate::{Result, UserboardError};

use super::handlers::{BoardAppState, UserAppState};
use super::router::{create_board_router, create_health_router, create_user_router};

/// A bound-on-demand HTTP server for one service.
pub struct WebServer {
    /// Service name used in logs.
    name: &'static str,
    /// Server address.
    addr: SocketAddr,
    /// Service routes, health check included.
    router: Router,
}

impl WebServer {
    fn new(name: &'static str, host: &str, port: u16, router: Router) -> Result<Self> {
        let addr = format!("{host}:{port}").parse().map_err(|e| {
            UserboardError::Config(format!("invalid {name} address {host}:{port}: {e}"))
        })?;

        Ok(Self {
            name,
            addr,
            router: router.merge(create_health_router()),
        })
    }

    /// Create the user service server.
    pub fn user_service(config: &UserServiceConfig, db: Database) -> Result<Self> {
        let router = create_user_router(Arc::new(UserAppState::new(db)));
        Self::new("user-service", &config.host, config.port, router)
    }

    /// Create the board service server.
    pub fn board_service<D>(config: &BoardServiceConfig, db: Database, directory: D) -> Result<Self>
    where
        D: UserDirectory + 'static,
    {
        let router = create_board_router(Arc::new(BoardAppState::new(db, directory)));
        Self::new("board-service", &config.host, config.port, router)
    }

    /// Get the configured server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the server until Ctrl+C or SIGTERM.
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.addr).await?;
        tracing::info!("{} listening on http://{}", self.name, listener.local_addr()?);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("{} shutdown complete", self.name);
        Ok(())
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::result::Result<SocketAddr, std::io::Error> {
        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!("{} listening on http://{}", self.name, local_addr);

        let name = self.name;
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, self.router).await {
                tracing::error!("{} server error: {}", name, e);
            }
        });

        Ok(local_addr)
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
