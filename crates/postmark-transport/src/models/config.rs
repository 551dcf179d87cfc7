/// Configuration models
use crate::constants::{API_BASE_URL, ENV_API_URL, ENV_CLIENT_PROFILE};
use crate::error::PostmarkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Runtime settings owned by the host configuration store, read per send
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct PostmarkConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub api_key: String,
}

impl PostmarkConfig {
    pub fn new(enabled: bool, api_key: impl Into<String>) -> Self {
        Self {
            enabled,
            api_key: api_key.into(),
        }
    }

    /// True only when the transport is switched on and an API key is set
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}

impl fmt::Debug for PostmarkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostmarkConfig")
            .field("enabled", &self.enabled)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    "<empty>"
                } else {
                    "<redacted>"
                },
            )
            .finish()
    }
}

/// Address and body serialization profile of the sender
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClientProfile {
    /// RFC 5322 encoded address lists, body sent verbatim
    #[default]
    Standard,
    /// Bare comma-joined addresses and dot-escaped body lines
    Legacy,
}

impl FromStr for ClientProfile {
    type Err = PostmarkError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "standard" | "default" => Ok(Self::Standard),
            "legacy" => Ok(Self::Legacy),
            other => Err(PostmarkError::Config(format!(
                "Unknown client profile: {}",
                other
            ))),
        }
    }
}

/// Construction-time settings of the Postmark sender
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SenderOptions {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub profile: ClientProfile,
}

fn default_base_url() -> String {
    API_BASE_URL.to_string()
}

impl Default for SenderOptions {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            profile: ClientProfile::default(),
        }
    }
}

impl SenderOptions {
    pub fn new(base_url: impl Into<String>, profile: ClientProfile) -> Self {
        Self {
            base_url: base_url.into(),
            profile,
        }
    }

    /// Reads `POSTMARK_API_URL` and `POSTMARK_CLIENT_PROFILE`, both optional
    pub fn from_env() -> Result<Self, PostmarkError> {
        let base_url = std::env::var(ENV_API_URL)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(default_base_url);

        let profile = std::env::var(ENV_CLIENT_PROFILE)
            .unwrap_or_default()
            .parse()?;

        let options = Self { base_url, profile };
        options.validate()?;
        Ok(options)
    }

    /// Validates the base URL is an absolute http(s) URL
    pub fn validate(&self) -> Result<(), PostmarkError> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            PostmarkError::Config(format!("Invalid API base URL {}: {}", self.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(PostmarkError::Config(format!(
                "Unsupported API URL scheme: {}",
                url.scheme()
            )));
        }

        Ok(())
    }

    /// Full URL of the message-send endpoint
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_usable_requires_key() {
        assert!(PostmarkConfig::new(true, "server-token").is_usable());
        assert!(!PostmarkConfig::new(true, "").is_usable());
        assert!(!PostmarkConfig::new(true, "   ").is_usable());
        assert!(!PostmarkConfig::new(false, "").is_usable());
        assert!(!PostmarkConfig::new(false, "server-token").is_usable());
    }

    #[test]
    fn test_config_debug_hides_key() {
        let debug = format!("{:?}", PostmarkConfig::new(true, "secret-token"));
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_config_deserialization() {
        let json = r#"{ "enabled": true, "api_key": "server-token" }"#;
        let config: PostmarkConfig = serde_json::from_str(json).unwrap();
        assert!(config.is_usable());

        let options: SenderOptions = serde_json::from_str(r#"{ "profile": "legacy" }"#).unwrap();
        assert_eq!(options.base_url, API_BASE_URL);
        assert_eq!(options.profile, ClientProfile::Legacy);
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!("".parse::<ClientProfile>().unwrap(), ClientProfile::Standard);
        assert_eq!(
            "Legacy".parse::<ClientProfile>().unwrap(),
            ClientProfile::Legacy
        );
        assert!("windows".parse::<ClientProfile>().is_err());
    }

    #[test]
    fn test_endpoint_joins_path() {
        let options = SenderOptions::new("http://127.0.0.1:8080/", ClientProfile::Standard);
        assert_eq!(options.endpoint("/email"), "http://127.0.0.1:8080/email");
        assert_eq!(
            SenderOptions::default().endpoint("/email"),
            "https://api.postmarkapp.com/email"
        );
    }

    #[test]
    fn test_validate_base_url() {
        assert!(SenderOptions::default().validate().is_ok());
        assert!(
            SenderOptions::new("not a url", ClientProfile::Standard)
                .validate()
                .is_err()
        );
        assert!(
            SenderOptions::new("ftp://example.com", ClientProfile::Standard)
                .validate()
                .is_err()
        );
    }
}
