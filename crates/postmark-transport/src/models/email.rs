/// Email domain models
use serde::{Deserialize, Serialize};

/// Parsed message handed over by the host, read-only for the transport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MailMessage {
    headers: Vec<Header>,
    body: MessageBody,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailAddress {
    pub address: String,
    pub name: Option<String>,
}

impl EmailAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: None,
        }
    }

    pub fn with_name(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: Some(name.into()),
        }
    }
}

/// A single header occurrence, kept in message order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: HeaderValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderValue {
    /// Address-list header; may be present with zero addresses
    Addresses(Vec<EmailAddress>),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    Text(String),
    Multipart(MultipartBody),
}

impl Default for MessageBody {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    /// Plain-text rendition of the message body
    pub text: String,
    /// Leaf MIME parts in encounter order
    pub parts: Vec<MimePart>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Inline,
    Attachment,
}

impl Disposition {
    /// Parses a Content-Disposition type; unknown types yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "inline" => Some(Self::Inline),
            "attachment" => Some(Self::Attachment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimePart {
    pub content_type: String,
    pub filename: Option<String>,
    pub disposition: Option<Disposition>,
    /// Decoded part content
    pub content: Vec<u8>,
}

impl MimePart {
    /// True for parts carrying a non-empty filename and an explicit
    /// `attachment` disposition
    pub fn is_attachment(&self) -> bool {
        self.disposition == Some(Disposition::Attachment)
            && self.filename.as_deref().is_some_and(|name| !name.is_empty())
    }
}

impl MailMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, name: impl Into<String>, value: HeaderValue) -> Self {
        self.push_header(name, value);
        self
    }

    pub fn with_addresses(self, name: impl Into<String>, addresses: Vec<EmailAddress>) -> Self {
        self.with_header(name, HeaderValue::Addresses(addresses))
    }

    pub fn with_text_header(self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_header(name, HeaderValue::Text(text.into()))
    }

    pub fn with_body(mut self, body: MessageBody) -> Self {
        self.body = body;
        self
    }

    pub fn push_header(&mut self, name: impl Into<String>, value: HeaderValue) {
        self.headers.push(Header {
            name: name.into(),
            value,
        });
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|header| header.name.eq_ignore_ascii_case(name))
    }

    /// All values of a header, case-insensitive, in message order
    pub fn header_values<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a HeaderValue> + use<'a, 'n> {
        self.headers
            .iter()
            .filter(move |header| header.name.eq_ignore_ascii_case(name))
            .map(|header| &header.value)
    }

    /// Addresses of an address-list header across all its occurrences.
    ///
    /// `None` when the header is absent, an empty list when it is present
    /// without any address.
    pub fn addresses(&self, name: &str) -> Option<Vec<&EmailAddress>> {
        if !self.has_header(name) {
            return None;
        }

        Some(
            self.header_values(name)
                .flat_map(|value| match value {
                    HeaderValue::Addresses(list) => list.iter().collect::<Vec<_>>(),
                    HeaderValue::Text(_) => Vec::new(),
                })
                .collect(),
        )
    }

    /// Text values of a header in message order
    pub fn text_values<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a str> + use<'a, 'n> {
        self.header_values(name).filter_map(|value| match value {
            HeaderValue::Text(text) => Some(text.as_str()),
            HeaderValue::Addresses(_) => None,
        })
    }

    pub fn subject(&self) -> Option<&str> {
        self.text_values(crate::constants::SUBJECT_HEADER).next()
    }

    pub fn body(&self) -> &MessageBody {
        &self.body
    }

    pub fn body_text(&self) -> &str {
        match &self.body {
            MessageBody::Text(text) => text,
            MessageBody::Multipart(multipart) => &multipart.text,
        }
    }

    pub fn parts(&self) -> &[MimePart] {
        match &self.body {
            MessageBody::Text(_) => &[],
            MessageBody::Multipart(multipart) => &multipart.parts,
        }
    }
}
