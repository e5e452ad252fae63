//! Shared test doubles.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use common::{AppError, AppResult};
use domain::Message;
use user_service_lib::mail::MailProvider;
use user_service_lib::repository::InMemoryUserStore;
use user_service_lib::service::{CreateUser, CreateUserUseCase};

/// Mail provider that records messages instead of sending them.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Message>>,
    fail_with: Option<String>,
}

impl RecordingMailer {
    /// A mailer whose every delivery fails with the given reason
    pub fn failing(reason: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_with: Some(reason.to_string()),
        }
    }

    pub async fn sent(&self) -> Vec<Message> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl MailProvider for RecordingMailer {
    async fn send_mail(&self, message: Message) -> AppResult<()> {
        if let Some(reason) = &self.fail_with {
            return Err(AppError::notification(reason.clone()));
        }
        self.sent.lock().await.push(message);
        Ok(())
    }
}

/// Use case wired to an in-memory store and a recording mailer.
pub fn wire(
    store: Arc<InMemoryUserStore>,
    mailer: Arc<RecordingMailer>,
) -> Arc<dyn CreateUser> {
    Arc::new(CreateUserUseCase::new(store, mailer))
}
