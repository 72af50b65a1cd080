use common::settings::types::{EmailBackendKind, EmailSettings};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        PoolConfig,
    },
    Message, SmtpTransport, Transport,
};
use use_cases::users::registration::message_service::{
    MessageService, MessageType, OutboxMessageService,
};

/// Delivery backend picked from `EmailSettings` at startup.
#[derive(Clone)]
pub enum Mailer {
    Smtp(SmtpMessageService),
    Outbox(OutboxMessageService),
}

impl Mailer {
    pub fn init(settings: &EmailSettings) -> Result<Self, String> {
        match settings.backend {
            EmailBackendKind::Smtp => Ok(Self::Smtp(SmtpMessageService::init(settings)?)),
            EmailBackendKind::Outbox => Ok(Self::Outbox(OutboxMessageService::new())),
        }
    }

    /// Messages kept so far; always empty for SMTP delivery.
    pub fn outbox(&self) -> Option<&OutboxMessageService> {
        match self {
            Mailer::Smtp(_) => None,
            Mailer::Outbox(outbox) => Some(outbox),
        }
    }
}

impl MessageService for Mailer {
    async fn send_message(
        &self,
        email: &str,
        message_type: MessageType,
        subject: &str,
        html_content: &str,
    ) -> Result<(), String> {
        match self {
            Mailer::Smtp(service) => {
                service
                    .send_message(email, message_type, subject, html_content)
                    .await
            }
            Mailer::Outbox(service) => {
                service
                    .send_message(email, message_type, subject, html_content)
                    .await
            }
        }
    }
}

#[derive(Clone)]
pub struct SmtpMessageService {
    sender: Mailbox,
    transport: SmtpTransport,
}

impl SmtpMessageService {
    pub fn init(settings: &EmailSettings) -> Result<Self, String> {
        let sender = settings.sender.parse::<Mailbox>().map_err(|e| {
            tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to get sender mailbox setting: {:#?}", e);
            e.to_string()
        })?;
        let credentials = Credentials::new(
            settings.host_user.clone(),
            settings.host_user_password.clone(),
        );
        let transport = SmtpTransport::starttls_relay(&settings.host)
            .map_err(|e| format!("Invalid SMTP relay {}: {}", settings.host, e))?
            .credentials(credentials)
            .authentication(vec![Mechanism::Plain])
            .pool_config(PoolConfig::new().max_size(20))
            .build();
        Ok(Self { sender, transport })
    }
}

impl MessageService for SmtpMessageService {
    #[tracing::instrument(
        name = "Sending e-mail over SMTP",
        skip(self, subject, html_content),
        fields(recipient_email = %email)
    )]
    async fn send_message(
        &self,
        email: &str,
        message_type: MessageType,
        subject: &str,
        html_content: &str,
    ) -> Result<(), String> {
        let recipient = email
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid recipient {}: {}", email, e))?;
        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_content.to_string())
            .map_err(|e| format!("Could not build email: {}", e))?;

        let transport = self.transport.clone();
        match actix_web::web::block(move || transport.send(&message)).await {
            Ok(Ok(_)) => {
                tracing::event!(target: "backend", tracing::Level::INFO, "Email successfully sent!");
                Ok(())
            }
            Ok(Err(e)) => {
                tracing::event!(target: "backend", tracing::Level::ERROR, "Could not send email: {:#?}", e);
                Err(format!("Could not send email: {:#?}", e))
            }
            Err(e) => Err(format!("Could not send email: {:#?}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn outbox_mailer_keeps_messages() -> Result<(), String> {
        let mailer = Mailer::init(&EmailSettings {
            backend: EmailBackendKind::Outbox,
            ..Default::default()
        })?;

        mailer
            .send_message(
                "user@example.com",
                MessageType::CreateAccountConfirmation,
                "Activate your account",
                "<p>hello</p>",
            )
            .await?;

        let messages = mailer.outbox().unwrap().messages_to("user@example.com");
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].subject, "Activate your account");

        Ok(())
    }

    #[test]
    fn smtp_mailer_rejects_invalid_sender() {
        let res = SmtpMessageService::init(&EmailSettings {
            backend: EmailBackendKind::Smtp,
            host: "smtp.example.com".to_string(),
            sender: "not a mailbox".to_string(),
            ..Default::default()
        });

        assert!(res.is_err());
    }
}
