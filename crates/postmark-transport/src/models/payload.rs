/// Postmark request and response models
use base64::Engine;
use serde::{Deserialize, Serialize, Serializer};

/// Request body of `POST /email`
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EmailPayload {
    pub from: String,
    pub to: String,
    pub cc: String,
    pub bcc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub reply_to: String,
    pub html_body: String,
    pub text_body: String,
    #[serde(rename = "tag")]
    pub tag: String,
    pub attachments: Vec<PayloadAttachment>,
    /// To, Cc and Bcc addresses counted during translation
    #[serde(skip)]
    pub recipients: usize,
}

impl EmailPayload {
    /// Total number of To, Cc and Bcc recipients
    pub fn recipient_count(&self) -> usize {
        self.recipients
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PayloadAttachment {
    pub content_type: String,
    pub name: String,
    /// Decoded bytes, sent base64 encoded
    #[serde(serialize_with = "serialize_base64")]
    pub content: Vec<u8>,
}

fn serialize_base64<S: Serializer>(content: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(content))
}

/// Parsed JSON body of a successful send
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SendReceipt(serde_json::Value);

impl SendReceipt {
    pub fn new(body: serde_json::Value) -> Self {
        Self(body)
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    pub fn message_id(&self) -> Option<&str> {
        self.get("MessageID").and_then(|id| id.as_str())
    }

    pub fn error_code(&self) -> Option<i64> {
        self.get("ErrorCode").and_then(|code| code.as_i64())
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

/// Error body of a 422 response
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    #[serde(rename = "ErrorCode")]
    pub error_code: i64,
    #[serde(rename = "Message", default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_field_names() {
        let payload = EmailPayload {
            from: "sender@example.com".to_string(),
            to: "rcpt@example.com".to_string(),
            html_body: "Hi".to_string(),
            text_body: "Hi".to_string(),
            tag: "welcome".to_string(),
            attachments: vec![PayloadAttachment {
                content_type: "text/plain".to_string(),
                name: "a.txt".to_string(),
                content: b"hello".to_vec(),
            }],
            ..Default::default()
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["From"], "sender@example.com");
        assert_eq!(value["To"], "rcpt@example.com");
        assert_eq!(value["Cc"], "");
        assert_eq!(value["ReplyTo"], "");
        assert_eq!(value["HtmlBody"], "Hi");
        assert_eq!(value["tag"], "welcome");
        assert!(value.get("Subject").is_none());
        assert_eq!(
            value["Attachments"],
            json!([{ "ContentType": "text/plain", "Name": "a.txt", "Content": "aGVsbG8=" }])
        );
    }

    #[test]
    fn test_recipient_count_is_not_serialized() {
        let payload = EmailPayload {
            to: "a@example.com".to_string(),
            recipients: 1,
            ..Default::default()
        };
        assert_eq!(payload.recipient_count(), 1);

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("Recipients").is_none());
        assert_eq!(EmailPayload::default().recipient_count(), 0);
    }

    #[test]
    fn test_receipt_accessors() {
        let receipt = SendReceipt::new(json!({
            "To": "rcpt@example.com",
            "MessageID": "b7bc2f4a-e38e-4336-af7d-e6c392c2f817",
            "ErrorCode": 0,
            "Message": "OK"
        }));

        assert_eq!(
            receipt.message_id(),
            Some("b7bc2f4a-e38e-4336-af7d-e6c392c2f817")
        );
        assert_eq!(receipt.error_code(), Some(0));
        assert_eq!(receipt.get("Message"), Some(&json!("OK")));
    }

    #[test]
    fn test_api_error_body() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"ErrorCode":300,"Message":"foo"}"#).unwrap();
        assert_eq!(body.error_code, 300);
        assert_eq!(body.message, "foo");
    }
}
