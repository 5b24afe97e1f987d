//! Contact-form mail relay

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use serde::Deserialize;

use crate::config::SmtpConfig;

/// A contact-form submission
#[derive(Debug, Clone, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Mail relay failures
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("SMTP transport is not configured")]
    NotConfigured,

    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP send failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Relays contact messages to the configured recipient
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, msg: &ContactMessage) -> Result<(), MailError>;
}

/// SMTP-backed mailer
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    recipient: String,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        Ok(Self {
            transport,
            from: config.username.clone(),
            recipient: config.recipient.clone(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, msg: &ContactMessage) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(self.from.parse::<Mailbox>()?)
            .to(self.recipient.parse::<Mailbox>()?)
            .subject(format!("Portfolio contact from {}", msg.name));

        // Visitor address goes into Reply-To when it parses; junk input must
        // not block the relay itself.
        if let Ok(reply_to) = msg.email.parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        let email = builder.body(format!(
            "From: {} <{}>\n\n{}",
            msg.name, msg.email, msg.message
        ))?;

        self.transport.send(email).await?;
        Ok(())
    }
}

/// Stands in when SMTP is not configured; every send fails
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, _msg: &ContactMessage) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }
}
