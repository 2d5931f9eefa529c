//! HTTP server wrapper.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Server binding configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// The gateway HTTP server.
///
/// Wraps a fully built router; all route binding has already happened by
/// the time a server is constructed.
pub struct ApiServer {
    config: ServerConfig,
    router: Router,
}

impl ApiServer {
    /// Create a new server for the given router.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        Self { config, router }
    }

    /// Get the server address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind the listener and serve until the process is stopped.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr: SocketAddr = self.addr().parse()?;
        let app = self.router.layer(TraceLayer::new_for_http());
        let listener = TcpListener::bind(addr).await?;

        info!("agentgate listening on {}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
