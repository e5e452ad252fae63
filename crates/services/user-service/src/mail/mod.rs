//! Notification port and its adapters.

mod log;
mod smtp;

use async_trait::async_trait;

use common::AppResult;
use domain::Message;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use self::log::LogMailProvider;
pub use self::smtp::SmtpMailProvider;

/// Mail provider trait for dependency injection.
///
/// Delivery is best-effort; implementations report transport failures
/// but never retry or queue.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait MailProvider: Send + Sync {
    /// Dispatch a message to the underlying transport
    async fn send_mail(&self, message: Message) -> AppResult<()>;
}
