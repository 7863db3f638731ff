//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, observability::LoggingConfig, server::ServerRuntimeConfig,
    site::SiteConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod site;

/// Herbarium site server configuration
#[derive(Debug, Parser)]
#[command(name = "herbarium-web", about = "Herbarium storefront server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Content store settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Site identity settings.
    #[command(flatten)]
    pub site: SiteConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}
