/// Capability gate - decides per send whether Postmark delivery is active
use crate::models::PostmarkConfig;
use crate::services::config::ConfigProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct CapabilityGate {
    config: Arc<dyn ConfigProvider>,
}

impl CapabilityGate {
    pub fn new(config: Arc<dyn ConfigProvider>) -> Self {
        Self { config }
    }

    /// True when the transport is enabled and an API key is configured.
    ///
    /// Reads configuration on each call; an unreadable configuration keeps
    /// the gate closed.
    pub async fn can_use(&self) -> bool {
        self.active_config().await.is_some()
    }

    /// Settings snapshot to send with, or `None` when the gate is closed.
    ///
    /// A failed read refreshes the provider and retries once.
    pub async fn active_config(&self) -> Option<PostmarkConfig> {
        let config = match self.config.get_config().await {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::debug!(error = %e, "Refreshing Postmark configuration");
                match self.config.refresh().await {
                    Ok(()) => self.config.get_config().await,
                    Err(refresh_error) => Err(refresh_error),
                }
            }
        };

        match config {
            Ok(config) if config.is_usable() => Some(config),
            Ok(config) => {
                tracing::debug!(
                    enabled = config.enabled,
                    has_api_key = !config.api_key.trim().is_empty(),
                    "Postmark transport not usable"
                );
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read Postmark configuration");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PostmarkError;
    use crate::services::config::StaticConfigProvider;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct BrokenProvider;

    /// Fails until refreshed
    #[derive(Default)]
    struct StaleProvider {
        refreshed: AtomicBool,
    }

    #[async_trait]
    impl ConfigProvider for StaleProvider {
        async fn get_config(&self) -> Result<PostmarkConfig, PostmarkError> {
            if self.refreshed.load(Ordering::SeqCst) {
                Ok(PostmarkConfig::new(true, "server-token"))
            } else {
                Err(PostmarkError::Config("cache expired".to_string()))
            }
        }

        async fn refresh(&self) -> Result<(), PostmarkError> {
            self.refreshed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    #[async_trait]
    impl ConfigProvider for BrokenProvider {
        async fn get_config(&self) -> Result<PostmarkConfig, PostmarkError> {
            Err(PostmarkError::Config("store unavailable".to_string()))
        }

        async fn refresh(&self) -> Result<(), PostmarkError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_gate_closed_without_key() {
        for enabled in [true, false] {
            let provider = StaticConfigProvider::new(PostmarkConfig::new(enabled, ""));
            let gate = CapabilityGate::new(Arc::new(provider));
            assert!(!gate.can_use().await);
        }
    }

    #[tokio::test]
    async fn test_gate_follows_config_changes() {
        let provider = Arc::new(StaticConfigProvider::new(PostmarkConfig::new(
            false,
            "server-token",
        )));
        let gate = CapabilityGate::new(provider.clone());
        assert!(!gate.can_use().await);

        provider
            .update(PostmarkConfig::new(true, "server-token"))
            .unwrap();
        assert!(gate.can_use().await);
        assert_eq!(
            gate.active_config().await.unwrap().api_key,
            "server-token"
        );
    }

    #[tokio::test]
    async fn test_gate_closed_on_provider_error() {
        let gate = CapabilityGate::new(Arc::new(BrokenProvider));
        assert!(!gate.can_use().await);
    }

    #[tokio::test]
    async fn test_gate_refreshes_after_failed_read() {
        let provider = Arc::new(StaleProvider::default());
        let gate = CapabilityGate::new(provider.clone());

        let config = gate.active_config().await.unwrap();
        assert_eq!(config.api_key, "server-token");
        assert!(provider.refreshed.load(Ordering::SeqCst));
    }
}
