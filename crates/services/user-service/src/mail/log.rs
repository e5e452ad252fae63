//! Development mail provider that logs instead of sending.

use async_trait::async_trait;

use common::AppResult;
use domain::Message;

use super::MailProvider;

/// Writes every message to the log and reports success.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailProvider;

#[async_trait]
impl MailProvider for LogMailProvider {
    async fn send_mail(&self, message: Message) -> AppResult<()> {
        tracing::info!(
            "=== EMAIL (not sent) ===\n\
             From: {}\n\
             To: {}\n\
             Subject: {}\n\
             Body:\n{}\n\
             ========================",
            message.from,
            message.to,
            message.subject,
            message.body
        );
        Ok(())
    }
}
