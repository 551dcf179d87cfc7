/// Delivery services: configuration, gating, Postmark and local transports
pub mod config;
pub mod fallback;
pub mod gate;
pub mod postmark;
pub mod transport;

// Re-export service traits
pub use config::{ConfigProvider, EnvConfigProvider, StaticConfigProvider};
pub use fallback::{FallbackSender, LocalTransport};
pub use gate::CapabilityGate;
pub use postmark::{EmailSender, PostmarkSender};
pub use transport::{Delivery, Transport};
