/// Postmark email sending service
use crate::constants::{EMAIL_PATH, JSON_CONTENT_TYPE, SERVER_TOKEN_HEADER};
use crate::email::translator::MessageTranslator;
use crate::error::PostmarkError;
use crate::models::{ApiErrorBody, EmailPayload, MailMessage, SendReceipt, SenderOptions};
use crate::utils::logging::{redact_email, redact_subject};
use crate::utils::validation::validate_recipient_count;
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tokio::sync::OnceCell;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(
        &self,
        api_key: &str,
        message: &MailMessage,
    ) -> Result<SendReceipt, PostmarkError>;
}

/// Translates messages and posts them to the Postmark API.
///
/// The HTTP client is built on first use and shared by every later send;
/// the API key travels per request.
pub struct PostmarkSender {
    client: OnceCell<reqwest::Client>,
    translator: MessageTranslator,
    options: SenderOptions,
}

impl PostmarkSender {
    pub fn new(options: SenderOptions) -> Result<Self, PostmarkError> {
        options.validate()?;

        Ok(Self {
            client: OnceCell::new(),
            translator: MessageTranslator::new(options.profile),
            options,
        })
    }

    pub fn translator(&self) -> &MessageTranslator {
        &self.translator
    }

    pub fn endpoint(&self) -> String {
        self.options.endpoint(EMAIL_PATH)
    }

    async fn http_client(&self) -> Result<&reqwest::Client, PostmarkError> {
        self.client
            .get_or_try_init(|| async {
                let mut headers = HeaderMap::new();
                headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

                tracing::debug!("Creating Postmark HTTP client");
                reqwest::Client::builder()
                    .default_headers(headers)
                    .build()
                    .map_err(PostmarkError::from)
            })
            .await
    }

    /// Posts an already translated payload; exactly one attempt
    #[tracing::instrument(
        name = "postmark.deliver",
        skip(self, api_key, payload),
        fields(
            recipients = payload.recipient_count(),
            attachments = payload.attachments.len()
        )
    )]
    pub async fn deliver(
        &self,
        api_key: &str,
        payload: &EmailPayload,
    ) -> Result<SendReceipt, PostmarkError> {
        if api_key.trim().is_empty() {
            return Err(PostmarkError::Config(
                "Postmark transport requires API key".to_string(),
            ));
        }

        let client = self.http_client().await?;
        let response = client
            .post(self.endpoint())
            .header(SERVER_TOKEN_HEADER, api_key)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        interpret_response(status, &body)
    }
}

#[async_trait]
impl EmailSender for PostmarkSender {
    async fn send(
        &self,
        api_key: &str,
        message: &MailMessage,
    ) -> Result<SendReceipt, PostmarkError> {
        let payload = self.translator.translate(message)?;

        if let Err(e) = validate_recipient_count(payload.recipient_count()) {
            tracing::warn!(error = %e, "Sending anyway; Postmark will reject the message");
        }

        tracing::info!(
            from = %redact_email(&payload.from),
            subject = %redact_subject(payload.subject.as_deref().unwrap_or_default()),
            "Sending email via Postmark"
        );

        let receipt = self.deliver(api_key, &payload).await?;

        tracing::info!(
            message_id = receipt.message_id().unwrap_or("-"),
            "Sent email via Postmark"
        );
        Ok(receipt)
    }
}

/// Maps a provider response onto a receipt or a typed error
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<SendReceipt, PostmarkError> {
    if status.is_success() {
        let value: serde_json::Value = serde_json::from_slice(body)?;
        return Ok(SendReceipt::new(value));
    }

    tracing::debug!(status = status.as_u16(), "Postmark returned an error status");

    match status {
        StatusCode::UNAUTHORIZED => Err(PostmarkError::Unauthorized),
        StatusCode::UNPROCESSABLE_ENTITY => {
            let error: ApiErrorBody = serde_json::from_slice(body)?;
            Err(PostmarkError::Rejected {
                code: error.error_code,
                message: error.message,
            })
        }
        StatusCode::INTERNAL_SERVER_ERROR => Err(PostmarkError::ProviderInternal),
        _ => Err(PostmarkError::UnknownProvider {
            status: status.as_u16(),
        }),
    }
}
