//! Email delivery over SMTP.

use anyhow::{Context, Result};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::Config;

/// Subject line for the digest email.
pub const SUBJECT: &str = "Unfulfilled Orders Export";

/// Email sender for order digests.
pub struct Mailer {
    config: Config,
}

impl Mailer {
    /// Create a new mailer with the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Send a plain-text email, optionally with a CSV attachment.
    ///
    /// Callers check the recipient precondition before getting here; a
    /// missing recipient at this point is an error.
    pub async fn send(
        &self,
        subject: &str,
        body: &str,
        attachment: Option<(String, Vec<u8>)>,
    ) -> Result<()> {
        let recipient = self
            .config
            .recipient
            .as_deref()
            .context("No recipient configured")?;

        let from: Mailbox = self
            .config
            .sender
            .parse()
            .context("Invalid sender email address")?;

        let to: Mailbox = recipient.parse().context("Invalid recipient email address")?;

        let builder = Message::builder().from(from).to(to).subject(subject);

        let email = match attachment {
            Some((filename, bytes)) => {
                let csv_type = ContentType::parse("text/csv; charset=utf-8")
                    .context("Invalid attachment content type")?;
                builder
                    .multipart(
                        MultiPart::mixed()
                            .singlepart(
                                SinglePart::builder()
                                    .header(ContentType::TEXT_PLAIN)
                                    .body(body.to_string()),
                            )
                            .singlepart(Attachment::new(filename).body(bytes, csv_type)),
                    )
                    .context("Failed to build email message")?
            }
            None => builder
                .header(ContentType::TEXT_PLAIN)
                .body(body.to_string())
                .context("Failed to build email message")?,
        };

        let creds = Credentials::new(
            self.config.sender.clone(),
            self.config.sender_password.clone(),
        );

        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
                .context("Failed to create SMTP transport")?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build();

        mailer
            .send(email)
            .await
            .context("Failed to send email via SMTP")?;

        tracing::info!(to = %recipient, subject, "Email sent successfully");

        Ok(())
    }

    /// Send a simple test email to verify SMTP configuration.
    pub async fn send_test(&self) -> Result<()> {
        let body = format!(
            "Order digest test email\n\n\
             SMTP configuration is working.\n\
             Sent {}.\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M UTC")
        );
        self.send("Order Digest - Test Email", &body, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(recipient: Option<&str>) -> Config {
        Config {
            store: "example-store".to_string(),
            api_version: "2023-04".to_string(),
            access_token: "shpat_test".to_string(),
            smtp_host: "smtp.example.com".to_string(),
            smtp_port: 587,
            sender: "sender@example.com".to_string(),
            sender_password: "secret".to_string(),
            recipient: recipient.map(ToString::to_string),
        }
    }

    #[tokio::test]
    async fn test_missing_recipient_is_an_error() {
        let mailer = Mailer::new(test_config(None));
        let err = mailer.send(SUBJECT, "body", None).await.unwrap_err();
        assert!(err.to_string().contains("No recipient configured"));
    }

    #[tokio::test]
    async fn test_invalid_sender_is_reported() {
        let mut config = test_config(Some("ops@example.com"));
        config.sender = "not an address".to_string();
        let mailer = Mailer::new(config);
        let err = mailer.send(SUBJECT, "body", None).await.unwrap_err();
        assert!(err.to_string().contains("Invalid sender email address"));
    }
}
