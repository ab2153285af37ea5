//! Server instance management

use axum::http::HeaderValue;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ClinicConfig;
use crate::error::ApiError;
use crate::handlers::{create_router, AppState};

/// LeTriage HTTP server
///
/// Manages the axum server lifecycle: model training at construction,
/// startup, and graceful shutdown.
pub struct ClinicServer {
    /// Server configuration
    config: ClinicConfig,

    /// Shared handler state with the trained ensemble
    state: AppState,
}

impl ClinicServer {
    /// Create a new server instance
    ///
    /// Validates the configuration and trains the models, so a
    /// constructed server is ready to answer predictions immediately.
    pub fn new(config: ClinicConfig) -> Result<Self, ApiError> {
        if let Err(e) = config.validate() {
            return Err(ApiError::internal(format!("Invalid config: {}", e)));
        }

        let state = AppState::new(config.clone())?;

        Ok(Self { config, state })
    }

    /// Get socket address for binding
    pub fn socket_addr(&self) -> Result<SocketAddr, ApiError> {
        self.config
            .socket_addr()
            .map_err(|e| ApiError::internal(format!("Failed to parse address: {}", e)))
    }

    /// Start the server and run until shutdown
    pub async fn start(&self) -> Result<(), ApiError> {
        let addr = self.socket_addr()?;

        let app = create_router()
            .with_state(self.state.clone())
            .layer(self.cors_layer())
            .layer(TraceLayer::new_for_http());

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind to {}: {:?}", addr, e);
            ApiError::internal(format!("Failed to bind to {}: {}", addr, e))
        })?;

        info!("Server listening on: {}", self.server_url());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::internal(format!("Server error: {}", e)))
    }

    /// Get server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        self.config.server_url()
    }

    /// CORS layer built from the configured origins
    fn cors_layer(&self) -> CorsLayer {
        let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

        if self.config.cors_origins.iter().any(|o| o == "*") {
            cors.allow_origin(Any)
        } else {
            let origins: Vec<HeaderValue> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            cors.allow_origin(AllowOrigin::list(origins))
        }
    }
}

/// Resolve when a shutdown signal arrives
async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_err() {
            error!("Failed to install Ctrl+C handler");
        }
        info!("Received shutdown signal");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received TERM signal");
            }
            Err(e) => error!("Failed to install TERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_default_config() {
        let server = ClinicServer::new(ClinicConfig::default());
        assert!(server.is_ok());
    }

    #[test]
    fn test_server_rejects_invalid_config() {
        let config = ClinicConfig {
            port: 0,
            ..Default::default()
        };
        assert!(ClinicServer::new(config).is_err());
    }

    #[test]
    fn test_server_url() {
        let server = ClinicServer::new(ClinicConfig::default()).unwrap();
        assert_eq!(server.server_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn test_socket_addr() {
        let server = ClinicServer::new(ClinicConfig::default()).unwrap();
        let addr = server.socket_addr().unwrap();
        assert_eq!(addr.port(), 5000);
    }
}
