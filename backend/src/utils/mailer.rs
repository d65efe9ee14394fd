use async_trait::async_trait;
use lettre::address::AddressError;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::mail_config::SmtpSettings;
use crate::handlers::contact_dtos::ContactSubmission;
use crate::utils::email_templates::render_contact_email;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("{0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("{0}")]
    Message(#[from] lettre::error::Error),

    #[error("Invalid address {0}")]
    Address(String),

    #[error("No recipients defined")]
    NoRecipients,

    #[error("SMTP server rejected the connection test")]
    Unverified,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    /// Comma separated, as `MAIL_TO` allows.
    pub to: Option<String>,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl OutgoingEmail {
    pub fn for_submission(submission: &ContactSubmission, from: &str, to: Option<&str>) -> Self {
        let rendered = render_contact_email(submission);
        Self {
            from: from.to_string(),
            to: to.map(str::to_string),
            reply_to: submission.email.clone(),
            subject: rendered.subject,
            text: rendered.text,
            html: rendered.html,
        }
    }

    pub fn into_message(self) -> Result<Message, MailError> {
        let to = self.to.ok_or(MailError::NoRecipients)?;
        let mut recipients = to.split(',').map(str::trim).filter(|addr| !addr.is_empty()).peekable();
        if recipients.peek().is_none() {
            return Err(MailError::NoRecipients);
        }

        let mut builder = Message::builder()
            .from(parse_mailbox(&self.from)?)
            .reply_to(parse_mailbox(&self.reply_to)?)
            .subject(self.subject);
        for addr in recipients {
            builder = builder.to(parse_mailbox(addr)?);
        }

        Ok(builder.multipart(MultiPart::alternative_plain_html(self.text, self.html))?)
    }
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, MailError> {
    raw.parse()
        .map_err(|e: AddressError| MailError::Address(format!("{}: {}", raw, e)))
}

/// An authenticated connection to the mail relay.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn verify(&self) -> Result<(), MailError>;
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError>;
}

/// Opens transports. Building one does no network I/O; `verify` is the first round trip.
#[cfg_attr(test, mockall::automock)]
pub trait Mailer: Send + Sync {
    fn connect(&self, settings: &SmtpSettings) -> Result<Box<dyn MailTransport>, MailError>;
}

pub struct SmtpMailer;

impl Mailer for SmtpMailer {
    fn connect(&self, settings: &SmtpSettings) -> Result<Box<dyn MailTransport>, MailError> {
        let params = TlsParameters::new(settings.host.clone())?;
        // secure=true is implicit TLS (465); otherwise upgrade with STARTTLS when offered
        let tls = if settings.secure {
            Tls::Wrapper(params)
        } else {
            Tls::Opportunistic(params)
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(settings.host.as_str())
            .port(settings.port)
            .tls(tls)
            .credentials(Credentials::new(
                settings.user.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Box::new(SmtpTransport { inner: transport }))
    }
}

struct SmtpTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn verify(&self) -> Result<(), MailError> {
        if self.inner.test_connection().await? {
            Ok(())
        } else {
            Err(MailError::Unverified)
        }
    }

    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let message = email.into_message()?;
        let response = self.inner.send(message).await?;
        tracing::debug!("SMTP relay answered {}", response.code());
        Ok(())
    }
}
