//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

pub mod test_data;

use postmark_transport::models::{ClientProfile, SenderOptions};
use postmark_transport::services::PostmarkSender;
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";

/// Routes tracing output through the test harness; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("postmark_transport=debug")
        .with_test_writer()
        .try_init();
}

/// Sender pointed at a mock Postmark server
pub fn sender_for(server: &MockServer) -> PostmarkSender {
    sender_with_profile(server, ClientProfile::Standard)
}

pub fn sender_with_profile(server: &MockServer, profile: ClientProfile) -> PostmarkSender {
    PostmarkSender::new(SenderOptions::new(server.uri(), profile))
        .expect("mock server URI is a valid base URL")
}

/// JSON bodies of every request the mock server received
pub async fn received_payloads(server: &MockServer) -> Vec<serde_json::Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.body_json().expect("request body is JSON"))
        .collect()
}
