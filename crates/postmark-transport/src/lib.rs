/// Postmark Transport - delivers platform mail through the Postmark HTTP API
///
/// The crate translates an assembled MIME message into a Postmark request
/// payload, sends it, and maps the provider response back into the host's
/// mail-sending contract. When the transport is disabled, messages fall back
/// to a local `lettre` transport untouched.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::{MailError, PostmarkError};
pub use models::{ClientProfile, EmailPayload, MailMessage, PostmarkConfig, SendReceipt};
pub use services::{CapabilityGate, Delivery, PostmarkSender, Transport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
