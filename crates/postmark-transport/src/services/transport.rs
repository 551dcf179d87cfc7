/// Transport adapter - the host's single mail-sending entry point
use crate::email::parser::{EmailParser, MailParserEmailParser};
use crate::error::{MailError, PostmarkError};
use crate::models::{SendReceipt, SenderOptions};
use crate::services::config::{ConfigProvider, EnvConfigProvider};
use crate::services::fallback::{FallbackSender, LocalTransport};
use crate::services::gate::CapabilityGate;
use crate::services::postmark::{EmailSender, PostmarkSender};
use lettre::Message;
use std::sync::Arc;
use tracing::{debug, error};

/// Which path delivered a message
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Postmark(SendReceipt),
    Local,
}

pub struct Transport {
    gate: CapabilityGate,
    sender: Arc<dyn EmailSender>,
    parser: Arc<dyn EmailParser>,
    fallback: Arc<dyn FallbackSender>,
}

impl Transport {
    pub fn new(
        gate: CapabilityGate,
        sender: Arc<dyn EmailSender>,
        fallback: Arc<dyn FallbackSender>,
    ) -> Self {
        Self {
            gate,
            sender,
            parser: Arc::new(MailParserEmailParser::new()),
            fallback,
        }
    }

    pub fn with_parser(mut self, parser: Arc<dyn EmailParser>) -> Self {
        self.parser = parser;
        self
    }

    /// Environment-configured transport falling back to local sendmail
    pub fn from_env() -> Result<Self, PostmarkError> {
        let config: Arc<dyn ConfigProvider> = Arc::new(EnvConfigProvider::new());
        let sender = PostmarkSender::new(SenderOptions::from_env()?)?;

        Ok(Self::new(
            CapabilityGate::new(config),
            Arc::new(sender),
            Arc::new(LocalTransport::sendmail()),
        ))
    }

    pub fn gate(&self) -> &CapabilityGate {
        &self.gate
    }

    /// Sends one message, through Postmark when the gate is open.
    ///
    /// Every failure comes back as a `MailError` carrying the original text.
    #[tracing::instrument(name = "transport.send_message", skip(self, message))]
    pub async fn send_message(&self, message: &Message) -> Result<Delivery, MailError> {
        let Some(config) = self.gate.active_config().await else {
            debug!("Postmark disabled, delegating to local transport");
            self.fallback.send(message).await?;
            return Ok(Delivery::Local);
        };

        self.send_via_postmark(&config.api_key, message)
            .await
            .map(Delivery::Postmark)
            .map_err(|e| {
                error!(
                    error = %e,
                    retriable = e.is_retriable(),
                    "Failed to send email via Postmark"
                );
                MailError::from(e)
            })
    }

    async fn send_via_postmark(
        &self,
        api_key: &str,
        message: &Message,
    ) -> Result<SendReceipt, PostmarkError> {
        let raw_email = message.formatted();
        let parsed = self.parser.parse(&raw_email).await?;
        self.sender.send(api_key, &parsed).await
    }
}
