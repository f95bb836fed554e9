//! Email delivery via lettre

pub mod template;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;
use tracing::info;

use crate::config::EmailConfig;

/// A fully rendered outbound message, ready to hand to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("{0}")]
    Message(#[from] lettre::error::Error),

    #[error("{0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Delivery refused with a bare reason, for transports that do not go
    /// through lettre (test doubles).
    #[error("{0}")]
    Rejected(String),
}

/// Port for sending emails. Handlers depend on this seam so tests can
/// substitute a recording double for the SMTP transport.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver one message, returning the transport's human-readable
    /// delivery response on success.
    async fn send(&self, email: &OutboundEmail) -> Result<String, TransportError>;
}

/// SMTP-backed mail transport.
#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
}

impl SmtpMailer {
    /// Create a new SMTP transport from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            // Use builder_dangerous for unauthenticated SMTP (e.g., MailDev)
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                operator = %config.operator_address(),
                "SMTP transport initialized with authentication and TLS"
            );
            // SmtpTransport::relay() uses STARTTLS by default, which is
            // what port 587 expects
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self { mailer })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<String, TransportError> {
        // Submitted addresses are passed through unvalidated; a value that
        // does not parse as a mailbox surfaces here as a transport failure.
        let from: Mailbox = email.from.parse()?;
        let to: Mailbox = email.to.parse()?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())?;

        let response = self.mailer.send(&message)?;
        Ok(response.message().collect::<Vec<_>>().join(" "))
    }
}
