//! Formpilot - form discovery and write-back over a stdio transport.
//!
//! Loads a document fixture, runs the eager on-load scan, then serves
//! newline-delimited JSON requests on stdin. Responses and push
//! notifications go to stdout, one JSON value per line.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use formpilot_engine::dom::Document;
use formpilot_engine::probe::ProbeConfig;
use formpilot_engine::scan::{ProbeMode, ScanConfig};
use formpilot_engine::service::FormService;
use formpilot_protocols::error::TransportError;
use formpilot_protocols::message::{Notification, Response};
use formpilot_protocols::transport::Transport;

/// Formpilot CLI.
#[derive(Parser)]
#[command(name = "formpilot")]
#[command(about = "Form structure discovery and write-back engine")]
#[command(version)]
struct Cli {
    /// Document fixture to serve (NodeSpec JSON)
    #[arg(short, long)]
    document: PathBuf,

    /// Dropdown probing mode for scans
    #[arg(long, value_enum, default_value = "eager")]
    probing: Probing,

    /// Override both probe settle delays, in milliseconds
    #[arg(long)]
    settle_ms: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Probing {
    None,
    Eager,
}

/// Push notifications as JSON lines on stdout, interleaved with responses.
struct StdioTransport;

#[async_trait]
impl Transport for StdioTransport {
    async fn notify(&self, notification: Notification) -> Result<(), TransportError> {
        let line = serde_json::to_string(&notification)
            .map_err(|e| TransportError::SendFailed(e.to_string()))?;
        println!("{line}");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let raw = std::fs::read_to_string(&cli.document)?;
    let document = Document::from_json(&raw)?;

    let mut probe = ProbeConfig::default();
    if let Some(ms) = cli.settle_ms {
        probe.settle_open = Duration::from_millis(ms);
        probe.settle_close = Duration::from_millis(ms);
    }
    let config = ScanConfig {
        probing: match cli.probing {
            Probing::None => ProbeMode::None,
            Probing::Eager => ProbeMode::Eager,
        },
        probe,
    };

    let mut service = FormService::new(document, config);
    let transport = StdioTransport;

    info!("Serving document {}", cli.document.display());
    service.run_eager_scan(&transport).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match service.handle_json(line).await {
            Ok(response) => println!("{}", serde_json::to_string(&response)?),
            Err(e) => {
                warn!("Request rejected: {}", e);
                println!("{}", serde_json::to_string(&Response::ack(false))?);
            }
        }
    }

    Ok(())
}
