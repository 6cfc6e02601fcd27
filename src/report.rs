/// Human-readable probe report
///
/// Everything the operator reads goes through here, written to any `io::Write`
/// so the binary can target stdout and tests can capture a buffer.

use crate::client::ProbeOutcome;
use std::io::{self, Write};

/// Shown after a rejected call, pointing at the usual culprits
pub const REJECTION_HINT: &str = "Hint: check that the workflow server is running and that the workflow is ACTIVE or in TEST mode (Execute Workflow).";

/// Progress line printed before the request goes out
pub fn announce<W: Write>(out: &mut W, url: &str) -> io::Result<()> {
    writeln!(out, "Sending test to {}...", url)
}

/// Print the outcome of the exchange
pub fn write_outcome<W: Write>(out: &mut W, outcome: &ProbeOutcome) -> io::Result<()> {
    match outcome {
        ProbeOutcome::Delivered { body, .. } => {
            writeln!(out, "✅ Success! Response from the workflow server:")?;
            let pretty = serde_json::to_string_pretty(body).map_err(io::Error::from)?;
            writeln!(out, "{}", pretty)
        }
        ProbeOutcome::Rejected { status, text } => {
            writeln!(out, "❌ Error {}: {}", status, text)?;
            writeln!(out)?;
            writeln!(out, "{}", REJECTION_HINT)
        }
        ProbeOutcome::MalformedBody { status, text, error } => {
            writeln!(out, "❌ Invalid JSON in response (status {}): {}", status, error)?;
            writeln!(out, "Raw response: {}", text)
        }
        ProbeOutcome::ConnectionFailed { error } => {
            writeln!(out, "❌ Connection error: {}", error)
        }
    }
}
