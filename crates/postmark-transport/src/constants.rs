/// Constants used throughout the transport
///
/// Centralizes the provider endpoint, header names and environment keys.
// Provider endpoint
/// Default base URL of the Postmark API
pub const API_BASE_URL: &str = "https://api.postmarkapp.com";

/// Path of the single-message send endpoint, appended to the base URL
pub const EMAIL_PATH: &str = "/email";

/// Maximum number of recipients (To + Cc + Bcc) Postmark accepts per message.
///
/// Not enforced by the sender; a message over the limit is rejected by the
/// provider with a 422.
pub const RECIPIENTS_LIMIT: usize = 20;

// Request headers
pub const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";
pub const JSON_CONTENT_TYPE: &str = "application/json";

// Message headers
/// Custom header carrying Postmark tags; may occur more than once
pub const TAG_HEADER: &str = "Postmark-Tag";
pub const FROM_HEADER: &str = "From";
pub const TO_HEADER: &str = "To";
pub const CC_HEADER: &str = "Cc";
pub const BCC_HEADER: &str = "Bcc";
pub const REPLY_TO_HEADER: &str = "Reply-To";
pub const SUBJECT_HEADER: &str = "Subject";

/// Separator between values of a joined address or tag list
pub const ADDRESS_SEPARATOR: &str = ", ";
pub const TAG_SEPARATOR: &str = ",";

// Environment variables
pub const ENV_ENABLED: &str = "POSTMARK_ENABLED";
pub const ENV_API_KEY: &str = "POSTMARK_API_KEY";
pub const ENV_API_URL: &str = "POSTMARK_API_URL";
pub const ENV_CLIENT_PROFILE: &str = "POSTMARK_CLIENT_PROFILE";
