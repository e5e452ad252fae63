//! CreateUser use case - registers a user and sends a welcome message.
//!
//! Steps run strictly in order: existence check, save, notify. The
//! existence check is a read-then-write and is not atomic; concurrent
//! registrations for one email are only stopped by the repository's own
//! guard (a unique index, or the in-memory store's write lock).
//!
//! A notification failure after a successful save is returned to the
//! caller as-is. The saved user is kept; nothing is rolled back or retried.

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;
use domain::{CreateUserRequest, DomainError, Message, User};

use crate::mail::MailProvider;
use crate::repository::UserRepository;

/// Registration use case trait for dependency injection.
#[async_trait]
pub trait CreateUser: Send + Sync {
    /// Register a new user.
    ///
    /// Fails with `AppError::Conflict("User")` when the email is already on
    /// file. Repository and mail provider errors are returned unchanged.
    async fn execute(&self, request: CreateUserRequest) -> AppResult<()>;
}

/// Concrete implementation of CreateUser over the two ports.
pub struct CreateUserUseCase {
    users: Arc<dyn UserRepository>,
    mailer: Arc<dyn MailProvider>,
}

impl CreateUserUseCase {
    /// Create the use case with its repository and mail provider
    pub fn new(users: Arc<dyn UserRepository>, mailer: Arc<dyn MailProvider>) -> Self {
        Self { users, mailer }
    }
}

#[async_trait]
impl CreateUser for CreateUserUseCase {
    async fn execute(&self, request: CreateUserRequest) -> AppResult<()> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(DomainError::conflict("User").into());
        }

        let (name, email) = (request.name.clone(), request.email.clone());

        let user = User::new(request);
        let user_id = user.id;
        self.users.save(user).await?;

        tracing::info!(user_id = %user_id, email = %email, "User registered");

        self.mailer.send_mail(Message::welcome(name, email)).await
    }
}
