/// Webhook probe: fire a test payload at a workflow-automation webhook
///
/// This library holds the typed payload, the single-shot client and the report
/// renderer used by the `webhook-probe` binary.

// Configuration with defaults and environment overrides
pub mod config;

// Payload posted to the webhook
pub mod payload;

// HTTP client and outcome classification
pub mod client;

// Operator-facing output
pub mod report;

// End-to-end run of one probe
pub mod probe;

// Re-export commonly used types for external consumers
pub use client::{ProbeOutcome, WebhookClient};
pub use config::Config;
pub use payload::WebhookPayload;
pub use probe::run_probe;
