//! User Service Library
//!
//! Registers users: checks the email is free, saves the user, then sends a
//! welcome message. Storage and mail delivery sit behind the
//! [`repository::UserRepository`] and [`mail::MailProvider`] ports.

pub mod config;
pub mod http;
pub mod infra;
pub mod mail;
pub mod repository;
pub mod service;

#[cfg(test)]
mod log_capture;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use crate::config::{StorageBackend, UserServiceConfig};
use crate::http::{create_router, AppState};
use crate::infra::Database;
use crate::mail::{LogMailProvider, MailProvider, SmtpMailProvider};
use crate::repository::{InMemoryUserStore, UserRepository, UserStore};
use crate::service::{CreateUser, CreateUserUseCase};

/// Concrete adapters selected by configuration.
pub struct Adapters {
    pub users: Arc<dyn UserRepository>,
    pub mailer: Arc<dyn MailProvider>,
    /// Set when the PostgreSQL store is in use
    pub database: Option<Database>,
}

/// Build the repository and mail provider named by the configuration.
pub async fn build_adapters(
    config: &UserServiceConfig,
) -> Result<Adapters, Box<dyn std::error::Error>> {
    let (users, database) = match config.storage {
        StorageBackend::Postgres => {
            let db = Database::connect(&config.database).await?;
            let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(db.get_connection()));
            (users, Some(db))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory user store - data is lost on restart");
            let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserStore::new());
            (users, None)
        }
    };

    let mailer: Arc<dyn MailProvider> = if config.smtp.is_configured() {
        Arc::new(SmtpMailProvider::new(&config.smtp)?)
    } else {
        tracing::warn!("SMTP not configured - welcome emails are logged instead of sent");
        Arc::new(LogMailProvider)
    };

    Ok(Adapters {
        users,
        mailer,
        database,
    })
}

/// Wire the registration use case from its adapters.
pub fn build_use_case(adapters: &Adapters) -> Arc<dyn CreateUser> {
    Arc::new(CreateUserUseCase::new(
        adapters.users.clone(),
        adapters.mailer.clone(),
    ))
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let adapters = build_adapters(&config).await?;
    let create_user = build_use_case(&adapters);

    // Build router
    let state = AppState::new(create_user, adapters.database);
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = config.server_addr().parse()?;
    info!("User service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorageBackend;
    use crate::log_capture::CapturedLogs;
    use domain::Message;

    const SMTP_WARNING: &str = "SMTP not configured";

    #[test]
    fn unconfigured_smtp_warns_once_at_startup() {
        let config = UserServiceConfig {
            storage: StorageBackend::Memory,
            ..UserServiceConfig::default()
        };
        let logs = CapturedLogs::default();

        logs.capture(|| {
            tokio_test::block_on(async {
                let adapters = build_adapters(&config).await.unwrap();
                assert!(adapters.database.is_none());

                for email in ["ana@x.com", "bo@x.com"] {
                    adapters
                        .mailer
                        .send_mail(Message::welcome("Someone", email))
                        .await
                        .unwrap();
                }
            })
        });

        let output = logs.contents();
        assert_eq!(output.matches(SMTP_WARNING).count(), 1);
        assert_eq!(output.matches("EMAIL (not sent)").count(), 2);
    }
}
