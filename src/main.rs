use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use ts_compressor::engine::compressor::Compressor;
use ts_compressor::frontend::{LineTransport, SHUTDOWN_GRACE, block_on_with_grace, run_files};
use ts_compressor::logging;
use ts_compressor::shared::config::load_settings;

/// Aggregates timestamped JSON records into fewer windowed records.
#[derive(Parser, Debug)]
#[command(name = "ts_compressor", version)]
struct Args {
    /// Settings file (YAML, TOML or JSON); falls back to $TSC_CONFIG
    #[arg(short, long)]
    config: Option<String>,

    /// Payload files, one JSON array each. Reads one array per stdin line when omitted.
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    // stdin reads cannot be cancelled, so exit must not wait on them
    block_on_with_grace(run(args), SHUTDOWN_GRACE)?
}

async fn run(args: Args) -> anyhow::Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    logging::init(&settings.logging)?;

    let compressor = Arc::new(Compressor::new(settings.compressor_config()));
    info!(config = ?compressor.config(), "TimeSeriesCompressor is starting...");

    let stats = if args.files.is_empty() {
        info!("Reading payloads from stdin. Press Ctrl+C to exit.");
        let mut transport =
            LineTransport::new(tokio::io::stdin(), tokio::io::stdout(), Arc::clone(&compressor));
        transport
            .run(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await?
    } else {
        let mut stdout = tokio::io::stdout();
        run_files(Arc::clone(&compressor), &args.files, &mut stdout).await?
    };

    stats.log_summary();
    info!("Shutting down...");
    Ok(())
}
