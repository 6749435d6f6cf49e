//! HTTP server configuration object.

use std::net::SocketAddr;
use std::time::Duration;

use dealership::config::ApiSettings;
use dealership::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) read_timeout: Duration,
    pub(crate) write_timeout: Duration,
    pub(crate) idle_timeout: Duration,
    pub(crate) shutdown_timeout: Duration,
}

impl ServerConfig {
    /// Bind on all interfaces at the configured port with its timeouts.
    #[must_use]
    pub fn from_settings(api: &ApiSettings, db_pool: DbPool) -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], api.port())),
            db_pool,
            read_timeout: api.read_timeout(),
            write_timeout: api.write_timeout(),
            idle_timeout: api.idle_timeout(),
            shutdown_timeout: api.shutdown_timeout(),
        }
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
