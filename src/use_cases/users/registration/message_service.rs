use std::{
    future::Future,
    sync::{Arc, Mutex},
};

use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    CreateAccountConfirmation,
}

pub trait MessageService {
    fn send_message(
        &self,
        email: &str,
        message_type: MessageType,
        subject: &str,
        html_content: &str,
    ) -> impl Future<Output = Result<(), String>>;
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OutboxMessage {
    pub email: String,
    pub message_type: MessageType,
    pub subject: String,
    pub html_content: String,
}

/// Keeps messages in memory instead of delivering them. Used in development and tests.
#[derive(Debug, Clone, Default)]
pub struct OutboxMessageService {
    messages: Arc<Mutex<Vec<OutboxMessage>>>,
}

impl OutboxMessageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<OutboxMessage> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages_to(&self, email: &str) -> Vec<OutboxMessage> {
        self.messages()
            .into_iter()
            .filter(|message| message.email == email)
            .collect()
    }
}

impl MessageService for OutboxMessageService {
    #[tracing::instrument(name = "Storing message in outbox", skip(self, html_content))]
    async fn send_message(
        &self,
        email: &str,
        message_type: MessageType,
        subject: &str,
        html_content: &str,
    ) -> Result<(), String> {
        let mut messages = self
            .messages
            .lock()
            .map_err(|e| format!("Outbox is unavailable: {}", e))?;
        messages.push(OutboxMessage {
            email: email.to_string(),
            message_type,
            subject: subject.to_string(),
            html_content: html_content.to_string(),
        });
        tracing::event!(target: "backend", tracing::Level::INFO, "Message stored in outbox.");
        Ok(())
    }
}
