/// Error types for the Postmark transport
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostmarkError {
    #[error("Invalid email; {0}")]
    Validation(String),

    #[error("Postmark request error: Unauthorized - Missing or incorrect API Key header.")]
    Unauthorized,

    #[error(
        "Postmark request error: Unprocessable Entity - API error code {code}, message: {message}"
    )]
    Rejected { code: i64, message: String },

    #[error("Postmark request error: Postmark Internal Server Error")]
    ProviderInternal,

    #[error("Unknown error during request to Postmark server (HTTP {status})")]
    UnknownProvider { status: u16 },

    #[error("Postmark transport error: {0}")]
    Transport(String),

    #[error("Invalid Postmark response: {0}")]
    InvalidResponse(String),

    #[error("Email parsing error: {0}")]
    EmailParsing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Local transport error: {0}")]
    LocalTransport(String),
}

impl PostmarkError {
    /// Determines if an error is retriable.
    ///
    /// Informational only: the transport makes exactly one attempt per send.
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::ProviderInternal => true,
            Self::LocalTransport(_) => true,
            Self::Validation(_) => false,
            Self::Unauthorized => false,
            Self::Rejected { .. } => false,
            Self::UnknownProvider { .. } => false,
            Self::InvalidResponse(_) => false,
            Self::EmailParsing(_) => false,
            Self::Config(_) => false,
        }
    }

    pub(crate) fn missing_addresses(header: &str) -> Self {
        Self::Validation(format!("\"{}\" header contains no addresses", header))
    }
}

impl From<serde_json::Error> for PostmarkError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}

impl From<reqwest::Error> for PostmarkError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// Generic mail-send failure surfaced to the host.
///
/// Only the message of the underlying failure survives; callers never see
/// which kind of error caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct MailError {
    message: String,
}

impl MailError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<PostmarkError> for MailError {
    fn from(err: PostmarkError) -> Self {
        Self::new(err.to_string())
    }
}
