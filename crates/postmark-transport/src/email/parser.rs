/// Email parser using mail-parser crate
use crate::constants::{
    BCC_HEADER, CC_HEADER, FROM_HEADER, REPLY_TO_HEADER, SUBJECT_HEADER, TO_HEADER,
};
use crate::error::PostmarkError;
use crate::models::{
    Disposition, EmailAddress, HeaderValue, MailMessage, MessageBody, MimePart, MultipartBody,
};
use async_trait::async_trait;
use mail_parser::decoders::base64::base64_decode;
use mail_parser::decoders::quoted_printable::quoted_printable_decode;
use mail_parser::{
    Addr, Address, Encoding, HeaderName, Message, MessageParser, MimeHeaders, PartType,
};

/// Turns the serialized form of a host message back into a `MailMessage`
#[async_trait]
pub trait EmailParser: Send + Sync {
    async fn parse(&self, raw_email: &[u8]) -> Result<MailMessage, PostmarkError>;
}

pub struct MailParserEmailParser;

impl MailParserEmailParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_addr(addr: &Addr) -> EmailAddress {
        EmailAddress {
            address: addr
                .address
                .as_ref()
                .map(|a| a.to_string())
                .unwrap_or_default(),
            name: addr.name.as_ref().map(|n| n.to_string()),
        }
    }

    fn extract_addresses(address: Option<&Address>) -> Vec<EmailAddress> {
        match address {
            Some(Address::List(list)) => list.iter().map(Self::parse_addr).collect(),
            Some(Address::Group(groups)) => groups
                .iter()
                .flat_map(|g| g.addresses.iter())
                .map(Self::parse_addr)
                .collect(),
            None => vec![],
        }
    }

    fn extract_text(value: &mail_parser::HeaderValue) -> String {
        match value {
            mail_parser::HeaderValue::Text(text) => text.trim().to_string(),
            mail_parser::HeaderValue::TextList(list) => list
                .iter()
                .map(|text| text.trim())
                .collect::<Vec<_>>()
                .join(","),
            _ => String::new(),
        }
    }

    /// Maps one parsed header; headers the transport never reads are dropped
    fn convert_header(header: &mail_parser::Header) -> Option<(String, HeaderValue)> {
        let address_header = match &header.name {
            HeaderName::From => Some(FROM_HEADER),
            HeaderName::To => Some(TO_HEADER),
            HeaderName::Cc => Some(CC_HEADER),
            HeaderName::Bcc => Some(BCC_HEADER),
            HeaderName::ReplyTo => Some(REPLY_TO_HEADER),
            _ => None,
        };

        if let Some(name) = address_header {
            let addresses = Self::extract_addresses(header.value.as_address())
                .into_iter()
                .filter(|addr| !addr.address.is_empty())
                .collect();
            return Some((name.to_string(), HeaderValue::Addresses(addresses)));
        }

        match &header.name {
            HeaderName::Subject => Some((
                SUBJECT_HEADER.to_string(),
                HeaderValue::Text(Self::extract_text(&header.value)),
            )),
            HeaderName::Other(name) => Some((
                name.to_string(),
                HeaderValue::Text(Self::extract_text(&header.value)),
            )),
            _ => None,
        }
    }

    fn convert_part(raw_email: &[u8], part: &mail_parser::MessagePart) -> MimePart {
        let content_type = part
            .content_type()
            .map(|ct| match ct.subtype() {
                Some(subtype) => format!("{}/{}", ct.ctype(), subtype),
                None => ct.ctype().to_string(),
            })
            .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());

        let disposition = part
            .content_disposition()
            .and_then(|disposition| Disposition::parse(disposition.ctype()));

        // Text attachments keep their own charset
        let content = match (&part.body, disposition) {
            (PartType::Text(_) | PartType::Html(_), Some(Disposition::Attachment)) => {
                Self::transfer_decoded(raw_email, part)
                    .or_else(|| Self::get_part_body(part))
            }
            _ => Self::get_part_body(part),
        };

        MimePart {
            content_type,
            filename: part.attachment_name().map(|name| name.to_string()),
            disposition,
            content: content.unwrap_or_default(),
        }
    }

    /// Part body with only the transfer encoding undone
    fn transfer_decoded(raw_email: &[u8], part: &mail_parser::MessagePart) -> Option<Vec<u8>> {
        let encoded =
            raw_email.get(part.raw_body_offset() as usize..part.raw_end_offset() as usize)?;

        match part.encoding {
            Encoding::Base64 => base64_decode(encoded),
            Encoding::QuotedPrintable => quoted_printable_decode(encoded),
            Encoding::None => Some(encoded.to_vec()),
        }
    }

    /// Body of a single-part message exactly as sent, markup included
    fn root_text(message: &Message) -> String {
        message
            .parts
            .first()
            .and_then(Self::get_part_body)
            .map(|body| String::from_utf8_lossy(&body).into_owned())
            .unwrap_or_default()
    }

    fn get_part_body(part: &mail_parser::MessagePart) -> Option<Vec<u8>> {
        match &part.body {
            PartType::Text(text) => Some(text.as_bytes().to_vec()),
            PartType::Html(html) => Some(html.as_bytes().to_vec()),
            PartType::Binary(data) => Some(data.to_vec()),
            PartType::InlineBinary(data) => Some(data.to_vec()),
            _ => None,
        }
    }

    /// Parses a raw RFC 5322 message
    pub fn parse_message(raw_email: &[u8]) -> Result<MailMessage, PostmarkError> {
        let message = MessageParser::default()
            .parse(raw_email)
            .ok_or_else(|| PostmarkError::EmailParsing("Failed to parse email".to_string()))?;

        let mut mail = MailMessage::new();
        for (name, value) in message.headers().iter().filter_map(Self::convert_header) {
            mail.push_header(name, value);
        }

        let is_multipart = message
            .parts
            .first()
            .is_some_and(|root| matches!(root.body, PartType::Multipart(_)));

        let body = if is_multipart {
            let text = message
                .body_text(0)
                .map(|text| text.into_owned())
                .unwrap_or_default();
            let parts = message
                .parts
                .iter()
                .filter(|part| !matches!(part.body, PartType::Multipart(_)))
                .map(|part| Self::convert_part(raw_email, part))
                .collect();
            MessageBody::Multipart(MultipartBody { text, parts })
        } else {
            MessageBody::Text(Self::root_text(&message))
        };

        tracing::debug!(
            headers = mail.headers().len(),
            parts = match &body {
                MessageBody::Text(_) => 0,
                MessageBody::Multipart(multipart) => multipart.parts.len(),
            },
            "Parsed outgoing message"
        );

        Ok(mail.with_body(body))
    }
}

impl Default for MailParserEmailParser {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailParser for MailParserEmailParser {
    async fn parse(&self, raw_email: &[u8]) -> Result<MailMessage, PostmarkError> {
        Self::parse_message(raw_email)
    }
}
