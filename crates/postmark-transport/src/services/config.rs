/// Configuration service - exposes the host's Postmark settings
use crate::constants::{ENV_API_KEY, ENV_ENABLED};
use crate::error::PostmarkError;
use crate::models::PostmarkConfig;
use async_trait::async_trait;
use std::fmt;
use std::sync::{Arc, RwLock};

#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn get_config(&self) -> Result<PostmarkConfig, PostmarkError>;
    async fn refresh(&self) -> Result<(), PostmarkError>;
}

type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Environment variable-based configuration provider.
///
/// Variables are read on every call so edits apply to the next send.
#[derive(Clone)]
pub struct EnvConfigProvider {
    lookup: Lookup,
}

impl EnvConfigProvider {
    pub fn new() -> Self {
        Self::with_lookup(|name| std::env::var(name).ok())
    }

    /// Provider reading variables through `lookup` instead of the process environment
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    fn parse_flag(value: &str) -> bool {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    }

    fn load(&self) -> PostmarkConfig {
        Self::load_from(self.lookup.as_ref())
    }

    fn load_from(lookup: impl Fn(&str) -> Option<String>) -> PostmarkConfig {
        let enabled = lookup(ENV_ENABLED)
            .map(|value| Self::parse_flag(&value))
            .unwrap_or(false);
        let api_key = lookup(ENV_API_KEY).unwrap_or_default();

        PostmarkConfig::new(enabled, api_key.trim())
    }
}

impl Default for EnvConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EnvConfigProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvConfigProvider").finish_non_exhaustive()
    }
}

#[async_trait]
impl ConfigProvider for EnvConfigProvider {
    async fn get_config(&self) -> Result<PostmarkConfig, PostmarkError> {
        Ok(self.load())
    }

    async fn refresh(&self) -> Result<(), PostmarkError> {
        // No-op: nothing is cached
        Ok(())
    }
}

/// In-memory provider updated by the host configuration store
#[derive(Debug, Default)]
pub struct StaticConfigProvider {
    config: RwLock<PostmarkConfig>,
}

impl StaticConfigProvider {
    pub fn new(config: PostmarkConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Replaces the settings; the next send observes the new values
    pub fn update(&self, config: PostmarkConfig) -> Result<(), PostmarkError> {
        let mut current = self
            .config
            .write()
            .map_err(|e| PostmarkError::Config(format!("Config lock poisoned: {}", e)))?;
        *current = config;

        tracing::info!(enabled = current.enabled, "Postmark configuration updated");
        Ok(())
    }
}

#[async_trait]
impl ConfigProvider for StaticConfigProvider {
    async fn get_config(&self) -> Result<PostmarkConfig, PostmarkError> {
        self.config
            .read()
            .map(|config| config.clone())
            .map_err(|e| PostmarkError::Config(format!("Config lock poisoned: {}", e)))
    }

    async fn refresh(&self) -> Result<(), PostmarkError> {
        Ok(())
    }
}
