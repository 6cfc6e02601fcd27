/// Configuration management for the webhook probe
///
/// Holds the target webhook, the payload text and the optional request timeout.
/// Defaults match the classify-transfer test webhook of a local workflow server.

use serde::{Deserialize, Serialize};

/// Default webhook exposed by a workflow server running on localhost
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/classify-transfer";

/// Simulated card transaction sent to the classifier workflow
pub const DEFAULT_PAYLOAD_TEXT: &str = "COMPRA APROVADA 12.345.678/0001-99 RESTAURANTE TESTE SAO PAULO";

/// Main probe configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Target webhook configuration
    pub webhook: WebhookConfig,
    /// Payload configuration
    pub payload: PayloadConfig,
}

/// Where and how the request is sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Full webhook URL (e.g., "http://localhost:5678/webhook/classify-transfer")
    pub url: String,
    /// Request timeout in seconds; `None` waits until the server answers
    pub timeout_secs: Option<u64>,
}

/// What gets sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadConfig {
    /// Value placed in `body.text`
    pub text: String,
}

impl Config {
    /// Configuration built from the literal defaults only, ignoring the environment
    pub fn builtin() -> Self {
        Self {
            webhook: WebhookConfig {
                url: DEFAULT_WEBHOOK_URL.to_string(),
                timeout_secs: None,
            },
            payload: PayloadConfig {
                text: DEFAULT_PAYLOAD_TEXT.to_string(),
            },
        }
    }

    /// Apply overrides from a variable lookup
    ///
    /// Unparsable timeouts are ignored and leave the current value in place.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("PROBE_WEBHOOK_URL") {
            self.webhook.url = url;
        }
        if let Some(text) = lookup("PROBE_PAYLOAD_TEXT") {
            self.payload.text = text;
        }
        if let Some(raw) = lookup("PROBE_TIMEOUT_SECS") {
            match raw.trim().parse() {
                Ok(secs) => self.webhook.timeout_secs = Some(secs),
                Err(_) => tracing::warn!("⚠️ Ignoring invalid PROBE_TIMEOUT_SECS: {}", raw),
            }
        }
        self
    }
}

impl Default for Config {
    /// Default configuration with ENV_VAR support for scripted runs
    fn default() -> Self {
        Self::builtin().with_env(|key| std::env::var(key).ok())
    }
}
