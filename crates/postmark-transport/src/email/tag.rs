/// `Postmark-Tag` header for messages built with lettre
use crate::constants::TAG_HEADER;
use lettre::message::header::{Header, HeaderName, HeaderValue};
use std::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostmarkTag(String);

impl PostmarkTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Header for PostmarkTag {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_str(TAG_HEADER)
    }

    fn parse(s: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(Self(s.trim().to_string()))
    }

    fn display(&self) -> HeaderValue {
        HeaderValue::new(Self::name(), self.0.clone())
    }
}
