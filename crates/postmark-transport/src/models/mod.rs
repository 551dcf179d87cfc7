/// Data models for the Postmark transport
pub mod config;
pub mod email;
pub mod payload;

// Re-export commonly used types
pub use config::*;
pub use email::*;
pub use payload::*;
