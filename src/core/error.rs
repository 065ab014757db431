//! Startup errors of the hosting server.

use std::net::SocketAddr;

/// Failure while bringing the server up or while it is running.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load Leptos configuration: {0}")]
    Configuration(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
