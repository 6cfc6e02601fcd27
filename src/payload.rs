/// Webhook payload types
///
/// The classifier workflow reads the transaction description from `body.text`,
/// so the payload nests the text one level under `body`.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_PAYLOAD_TEXT;

/// JSON document posted to the webhook: `{"body": {"text": "..."}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub body: PayloadBody,
}

/// Inner record carrying the transaction description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadBody {
    pub text: String,
}

impl WebhookPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            body: PayloadBody { text: text.into() },
        }
    }
}

impl Default for WebhookPayload {
    fn default() -> Self {
        Self::new(DEFAULT_PAYLOAD_TEXT)
    }
}
