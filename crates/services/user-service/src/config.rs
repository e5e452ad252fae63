//! User service configuration.

use std::env;

use common::{DatabaseConfig, SmtpConfig};

/// Where users are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// PostgreSQL via SeaORM
    Postgres,
    /// Process-local map, lost on restart
    Memory,
}

impl From<&str> for StorageBackend {
    fn from(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "memory" | "in-memory" => StorageBackend::Memory,
            "postgres" | "postgresql" => StorageBackend::Postgres,
            other => {
                tracing::warn!(
                    storage = %other,
                    "Unknown storage backend - falling back to postgres"
                );
                StorageBackend::Postgres
            }
        }
    }
}

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Persistence backend
    pub storage: StorageBackend,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Outgoing mail relay settings
    pub smtp: SmtpConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("USER_SERVICE_HOST").unwrap_or(defaults.host),
            port: env::var("USER_SERVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            storage: env::var("USER_SERVICE_STORAGE")
                .map(|s| StorageBackend::from(s.as_str()))
                .unwrap_or(defaults.storage),
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
            smtp: SmtpConfig {
                host: env::var("SMTP_HOST").ok().filter(|h| !h.is_empty()),
                port: env::var("SMTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.smtp.port),
                username: env::var("SMTP_USER").ok(),
                password: env::var("SMTP_PASS").ok(),
                tls: env::var("SMTP_TLS")
                    .map(|v| v == "true" || v == "1")
                    .unwrap_or(defaults.smtp.tls),
            },
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            storage: StorageBackend::Postgres,
            database: DatabaseConfig::default(),
            smtp: SmtpConfig::default(),
        }
    }
}
