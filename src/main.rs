/// Webhook probe entry point
///
/// Sends one test payload to the configured webhook and prints the result.
/// Runs with no arguments against the local classify-transfer webhook.

use clap::Parser;
use tracing::Level;
use webhook_probe::{config::Config, run_probe};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Webhook URL (overrides PROBE_WEBHOOK_URL)
    #[arg(long)]
    url: Option<String>,

    /// Transaction text placed in body.text (overrides PROBE_PAYLOAD_TEXT)
    #[arg(long)]
    text: Option<String>,

    /// Request timeout in seconds (overrides PROBE_TIMEOUT_SECS)
    #[arg(long)]
    timeout: Option<u64>,

    /// Exit with status 1 unless the webhook answered 200 with JSON
    #[arg(long)]
    strict: bool,

    /// Debug logs on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(url) = &self.url {
            config.webhook.url = url.clone();
        }
        if let Some(text) = &self.text {
            config.payload.text = text.clone();
        }
        if let Some(secs) = self.timeout {
            config.webhook.timeout_secs = Some(secs);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let config = args.apply(Config::default());
    tracing::debug!("⚙️ Probe configuration: {:?}", config);

    let mut stdout = std::io::stdout().lock();
    let outcome = run_probe(&config, &mut stdout).await?;
    drop(stdout);

    let code = outcome.exit_code(args.strict);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
