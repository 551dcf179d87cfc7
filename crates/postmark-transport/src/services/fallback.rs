/// Default local-mail delivery used while Postmark is disabled
use crate::error::PostmarkError;
use async_trait::async_trait;
use lettre::{AsyncSendmailTransport, AsyncTransport, Message, Tokio1Executor};
use std::fmt::Display;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FallbackSender: Send + Sync {
    async fn send(&self, message: &Message) -> Result<(), PostmarkError>;
}

/// Hands messages unchanged to any `lettre` async transport
pub struct LocalTransport<T> {
    inner: T,
}

impl<T> LocalTransport<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl LocalTransport<AsyncSendmailTransport<Tokio1Executor>> {
    /// Local delivery through the system `sendmail` binary
    pub fn sendmail() -> Self {
        Self::new(AsyncSendmailTransport::new())
    }
}

#[async_trait]
impl<T> FallbackSender for LocalTransport<T>
where
    T: AsyncTransport + Send + Sync,
    T::Error: Display,
{
    async fn send(&self, message: &Message) -> Result<(), PostmarkError> {
        self.inner
            .send(message.clone())
            .await
            .map(|_| ())
            .map_err(|e| PostmarkError::LocalTransport(e.to_string()))?;

        tracing::debug!("Delivered email via local transport");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lettre::transport::stub::AsyncStubTransport;

    fn message() -> Message {
        Message::builder()
            .from("yash@example.com".parse().unwrap())
            .to("yash+1@example.com".parse().unwrap())
            .subject("Local")
            .body(String::from("Delivered locally"))
            .unwrap()
    }

    #[tokio::test]
    async fn test_local_transport_delivers() {
        let transport = LocalTransport::new(AsyncStubTransport::new_ok());
        assert!(transport.send(&message()).await.is_ok());
    }

    #[tokio::test]
    async fn test_local_transport_error_is_wrapped() {
        let transport = LocalTransport::new(AsyncStubTransport::new_error());
        let err = transport.send(&message()).await.unwrap_err();
        assert!(matches!(err, PostmarkError::LocalTransport(_)));
    }
}
