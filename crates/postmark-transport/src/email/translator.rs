/// Translation of a parsed message into a Postmark request payload
use crate::constants::{
    BCC_HEADER, CC_HEADER, FROM_HEADER, REPLY_TO_HEADER, TAG_HEADER, TAG_SEPARATOR, TO_HEADER,
};
use crate::email::address::format_address_list;
use crate::email::attachment::collect_attachments;
use crate::error::PostmarkError;
use crate::models::{ClientProfile, EmailPayload, MailMessage};

const RECIPIENT_HEADERS: [&str; 3] = [TO_HEADER, CC_HEADER, BCC_HEADER];

#[derive(Debug, Clone, Copy, Default)]
pub struct MessageTranslator {
    profile: ClientProfile,
}

impl MessageTranslator {
    pub fn new(profile: ClientProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> ClientProfile {
        self.profile
    }

    /// Builds the request payload; fails before any I/O on invalid headers
    pub fn translate(&self, message: &MailMessage) -> Result<EmailPayload, PostmarkError> {
        let body = self.body_text(message);

        Ok(EmailPayload {
            from: self.from_address(message)?,
            to: self.recipients(message, TO_HEADER)?,
            cc: self.recipients(message, CC_HEADER)?,
            bcc: self.recipients(message, BCC_HEADER)?,
            subject: self.subject(message),
            reply_to: self.reply_to(message)?,
            html_body: body.clone(),
            text_body: body,
            tag: self.tags(message),
            attachments: collect_attachments(message.parts()),
            recipients: self.recipient_total(message),
        })
    }

    /// Addresses across To, Cc and Bcc
    pub fn recipient_total(&self, message: &MailMessage) -> usize {
        RECIPIENT_HEADERS
            .iter()
            .filter_map(|header| message.addresses(header))
            .map(|addresses| addresses.len())
            .sum()
    }

    pub fn from_address(&self, message: &MailMessage) -> Result<String, PostmarkError> {
        let addresses = message.addresses(FROM_HEADER).ok_or_else(|| {
            PostmarkError::Validation("contains no \"From\" header".to_string())
        })?;

        if addresses.is_empty() {
            return Err(PostmarkError::missing_addresses(FROM_HEADER));
        }

        Ok(format_address_list(&addresses, self.profile))
    }

    /// To, Cc or Bcc: each optional, but at least one must be present
    pub fn recipients(&self, message: &MailMessage, header: &str) -> Result<String, PostmarkError> {
        let Some(addresses) = message.addresses(header) else {
            if RECIPIENT_HEADERS.iter().any(|name| message.has_header(name)) {
                return Ok(String::new());
            }
            return Err(PostmarkError::Validation(
                "contains no at least one of \"To\", \"Cc\", and \"Bcc\" header".to_string(),
            ));
        };

        if addresses.is_empty() {
            return Err(PostmarkError::missing_addresses(header));
        }

        Ok(format_address_list(&addresses, self.profile))
    }

    pub fn reply_to(&self, message: &MailMessage) -> Result<String, PostmarkError> {
        match message.addresses(REPLY_TO_HEADER) {
            None => Ok(String::new()),
            Some(addresses) if addresses.is_empty() => {
                Err(PostmarkError::missing_addresses(REPLY_TO_HEADER))
            }
            Some(addresses) => Ok(format_address_list(&addresses, self.profile)),
        }
    }

    pub fn subject(&self, message: &MailMessage) -> Option<String> {
        message.subject().map(str::to_string)
    }

    /// Plain-text body, reused for both HtmlBody and TextBody
    pub fn body_text(&self, message: &MailMessage) -> String {
        let text = message.body_text();
        match self.profile {
            ClientProfile::Standard => text.to_string(),
            ClientProfile::Legacy => text.replace("\n.", "\n.."),
        }
    }

    pub fn tags(&self, message: &MailMessage) -> String {
        message
            .text_values(TAG_HEADER)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect::<Vec<_>>()
            .join(TAG_SEPARATOR)
    }
}
