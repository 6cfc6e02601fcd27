/// Probe runner
///
/// Wires configuration, payload, client and report together for one exchange.

use crate::{
    client::{ProbeOutcome, WebhookClient},
    config::Config,
    payload::WebhookPayload,
    report,
};
use anyhow::{Context, Result};
use std::io::Write;

/// Run one probe: announce, post once, report
///
/// Reported failures come back as `Ok(outcome)`. `Err` is reserved for an
/// invalid webhook URL, the HTTP client failing to build or the report
/// failing to write.
pub async fn run_probe<W: Write>(config: &Config, out: &mut W) -> Result<ProbeOutcome> {
    let client = WebhookClient::new(&config.webhook)?;
    let payload = WebhookPayload::new(config.payload.text.clone());

    report::announce(out, client.url()).context("Failed to write probe report")?;
    out.flush().context("Failed to write probe report")?;

    let outcome = client.send(&payload).await;

    report::write_outcome(out, &outcome).context("Failed to write probe report")?;
    tracing::debug!("🏁 Probe finished, success = {}", outcome.is_success());

    Ok(outcome)
}
