//! Email notification service using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::MultiPart,
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::NotificationError;

/// How the connection to the relay is secured.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SmtpTls {
    /// Implicit TLS, usually port 465.
    #[default]
    Wrapper,
    /// STARTTLS upgrade, usually port 587.
    Starttls,
    /// Plain connection without authentication (e.g., MailDev).
    #[serde(rename = "none")]
    Disabled,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    #[serde(default)]
    pub smtp_tls: SmtpTls,
    pub from_address: String,
    /// Staff inbox receiving contact notifications
    pub admin_address: String,
}

/// A rendered email ready to hand to the relay.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub plain: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError>;
}

/// Email service for sending notifications
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> Result<Self, NotificationError> {
        let mailer = match config.smtp_tls {
            SmtpTls::Disabled => {
                tracing::info!(
                    smtp_host = %config.smtp_host,
                    smtp_port = config.smtp_port,
                    "SMTP TLS disabled, using unauthenticated connection (e.g., MailDev)"
                );

                SmtpTransport::builder_dangerous(&config.smtp_host)
                    .port(config.smtp_port)
                    .build()
            }
            tls => {
                tracing::info!(
                    smtp_host = %config.smtp_host,
                    smtp_port = config.smtp_port,
                    from = %config.from_address,
                    tls = ?tls,
                    "Email service initialized with authentication and TLS"
                );

                let builder = if tls == SmtpTls::Starttls {
                    SmtpTransport::starttls_relay(&config.smtp_host)?
                } else {
                    SmtpTransport::relay(&config.smtp_host)?
                };

                let creds =
                    Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

                builder.port(config.smtp_port).credentials(creds).build()
            }
        };

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl Mailer for EmailService {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: OutgoingEmail) -> Result<(), NotificationError> {
        let message = Message::builder()
            .from(self.from.parse()?)
            .to(email.to.parse()?)
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(email.plain, email.html))?;

        // lettre's SmtpTransport blocks on the socket
        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        tracing::info!("Email sent");

        Ok(())
    }
}
