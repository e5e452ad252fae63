//! SMTP mail provider built on lettre.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox as LettreMailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message as Email, Tokio1Executor,
};

use common::{AppError, AppResult, SmtpConfig};
use domain::{Mailbox, Message};

use super::MailProvider;

/// Sends messages through an SMTP relay.
pub struct SmtpMailProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailProvider {
    /// Build a transport from configuration.
    ///
    /// No connection is opened until the first message is sent.
    pub fn new(config: &SmtpConfig) -> AppResult<Self> {
        let host = config
            .host
            .as_deref()
            .ok_or_else(|| AppError::internal("SMTP host is not configured"))?;

        let builder = if config.tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| AppError::internal(format!("Invalid SMTP relay {}: {}", host, e)))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
        };
        let mut builder = builder.port(config.port);

        if let Some(username) = &config.username {
            let password = config.password.clone().unwrap_or_default();
            builder = builder.credentials(Credentials::new(username.clone(), password));
        }

        tracing::info!(host = %host, port = config.port, tls = config.tls, "SMTP transport ready");

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl MailProvider for SmtpMailProvider {
    async fn send_mail(&self, message: Message) -> AppResult<()> {
        let email = build_email(message)?;

        self.transport
            .send(email)
            .await
            .map_err(|e| AppError::notification(e.to_string()))?;

        Ok(())
    }
}

fn to_lettre_mailbox(mailbox: &Mailbox) -> AppResult<LettreMailbox> {
    let address = mailbox
        .address
        .parse::<Address>()
        .map_err(|e| AppError::notification(format!("Invalid address {}: {}", mailbox.address, e)))?;

    Ok(LettreMailbox::new(Some(mailbox.name.clone()), address))
}

/// Convert a domain message to an HTML email.
fn build_email(message: Message) -> AppResult<Email> {
    Email::builder()
        .from(to_lettre_mailbox(&message.from)?)
        .to(to_lettre_mailbox(&message.to)?)
        .subject(message.subject)
        .header(ContentType::TEXT_HTML)
        .body(message.body)
        .map_err(|e| AppError::notification(e.to_string()))
}
