//! Email notification service using lettre

use lettre::{
    Message, SmtpTransport, Transport, message::header::ContentType,
    transport::smtp::authentication::Credentials,
};
use tracing::{error, info};

use crate::config::EmailConfig;

/// Sends plain-text notifications for organizer-request decisions and
/// support-ticket replies. Delivery is best effort: callers log failures
/// and never fail the request over them.
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
    skip_sending: bool,
}

impl EmailService {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let creds =
                Credentials::new(config.smtp_username.to_owned(), config.smtp_password.to_owned());
            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: format!("{} <{}>", config.from_name, config.from_email),
            skip_sending: false,
        })
    }

    /// Mock service for tests: logs instead of connecting to SMTP.
    pub fn new_mock(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = SmtpTransport::builder_dangerous("localhost").port(1025).build();

        Ok(Self {
            mailer,
            from: format!("{} <{}>", config.from_name, config.from_email),
            skip_sending: true,
        })
    }

    pub fn send_organizer_request_decision(
        &self,
        to_email: &str,
        approved: bool,
        comment: &str,
    ) -> anyhow::Result<()> {
        let (subject, body) = if approved {
            (
                "Your organizer request was approved",
                format!(
                    "Good news! Your organizer request was approved.\n\n\
                     You can now create events and send them to moderation.\n\n\
                     Comment: {comment}\n"
                ),
            )
        } else {
            (
                "Your organizer request was rejected",
                format!(
                    "Unfortunately your organizer request was rejected.\n\n\
                     Comment: {comment}\n\n\
                     You can file a new request at any time.\n"
                ),
            )
        };

        self.send(to_email, subject, body)
    }

    pub fn send_support_reply(
        &self,
        to_email: &str,
        ticket_subject: &str,
        reply: &str,
    ) -> anyhow::Result<()> {
        let body = format!(
            "Support replied to your ticket \"{ticket_subject}\":\n\n{reply}\n"
        );

        self.send(to_email, &format!("Re: {ticket_subject}"), body)
    }

    fn send(&self, to_email: &str, subject: &str, body: String) -> anyhow::Result<()> {
        if self.skip_sending {
            info!(to = %to_email, subject = %subject, "Mock email service: skipping SMTP send");
            return Ok(());
        }

        let email = Message::builder()
            .from(self.from.parse()?)
            .to(to_email.parse()?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)?;

        match self.mailer.send(&email) {
            Ok(_) => {
                info!(to = %to_email, subject = %subject, "Notification email sent");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, to = %to_email, "Failed to send notification email");
                Err(anyhow::anyhow!("SMTP error: {e}"))
            }
        }
    }
}
