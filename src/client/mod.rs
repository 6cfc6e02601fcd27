/// Webhook HTTP client
///
/// Posts the payload exactly once and classifies whatever comes back into a
/// `ProbeOutcome`. Transport errors are caught only at the reqwest call sites.

// Outcome classification
pub mod outcome;

pub use outcome::ProbeOutcome;

use crate::{config::WebhookConfig, payload::WebhookPayload};
use anyhow::{Context, Result};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::time::Duration;

/// Single-shot client bound to one webhook URL
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    url: Url,
}

impl WebhookClient {
    /// Validate the URL and build the underlying HTTP client
    ///
    /// A URL that cannot be parsed or is not http(s) is a configuration error,
    /// not a transport failure, so it is rejected here instead of at send time.
    pub fn new(config: &WebhookConfig) -> Result<Self> {
        let url = Url::parse(&config.url)
            .with_context(|| format!("Invalid webhook URL: {}", config.url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("Invalid webhook URL: {} (scheme must be http or https)", config.url);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, url })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// POST the payload as JSON and classify the response
    ///
    /// No retries: one call, one request.
    pub async fn send(&self, payload: &WebhookPayload) -> ProbeOutcome {
        tracing::info!("📤 Posting payload to {}", self.url);
        tracing::debug!(
            "📄 Request body: {}",
            serde_json::to_string(payload).unwrap_or_else(|_| "invalid_json".to_string())
        );

        let start_time = std::time::Instant::now();
        let response = match self.http.post(self.url.clone()).json(payload).send().await {
            Ok(response) => response,
            Err(e) => return connection_failed(&e),
        };

        let status = response.status();
        tracing::debug!("📥 Response status {} after {:?}", status, start_time.elapsed());

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return connection_failed(&e),
        };
        tracing::debug!("📄 Response body: {}", text);

        classify(status, text)
    }
}

/// Sort a complete response into delivered, rejected or malformed
fn classify(status: StatusCode, text: String) -> ProbeOutcome {
    let code = status.as_u16();
    if status != StatusCode::OK {
        tracing::warn!("❌ Webhook answered {}", code);
        return ProbeOutcome::Rejected { status: code, text };
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(body) => {
            tracing::info!("✅ Webhook accepted payload");
            ProbeOutcome::Delivered { status: code, body }
        }
        Err(e) => {
            tracing::warn!("❌ Webhook answered 200 with a non-JSON body: {}", e);
            ProbeOutcome::MalformedBody {
                status: code,
                text,
                error: e.to_string(),
            }
        }
    }
}

fn connection_failed(error: &reqwest::Error) -> ProbeOutcome {
    let error = error_chain(error);
    tracing::error!("❌ Request failed: {}", error);
    ProbeOutcome::ConnectionFailed { error }
}

/// Render an error and all of its sources as one line
///
/// A source whose message already appears in the previous entry is skipped.
fn error_chain(error: &(dyn std::error::Error + 'static)) -> String {
    let mut parts: Vec<String> = Vec::new();
    for err in std::iter::successors(Some(error), |err| err.source()) {
        let text = err.to_string();
        if parts.last().is_some_and(|prev| prev.contains(&text)) {
            continue;
        }
        parts.push(text);
    }
    parts.join(" → ")
}
