use anyhow::{Context, Result};
use endpoint_client::textify::{newest_ping, render_table, ClientSummary};
use endpoint_client::ProcessConfig;
use shared::types::ClientRecord;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("endpoint_status=info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .context("Usage: endpoint-status <snapshot.json> [config.toml]")?;

    // Load config
    let config = match args.next() {
        Some(config_path) => {
            let config = ProcessConfig::load(&config_path)
                .with_context(|| format!("Failed to load config from {}", config_path))?;
            tracing::info!("Loaded config from {}", config_path);
            config.with_env_overrides()
        }
        None => ProcessConfig::from_env(),
    };

    match config.admin_ui_url() {
        Some(url) => tracing::info!("Admin UI at {}", url),
        None => tracing::info!("No admin UI configured"),
    }

    let contents = std::fs::read_to_string(&snapshot_path)
        .with_context(|| format!("Failed to read snapshot: {}", snapshot_path))?;
    let records: Vec<ClientRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse snapshot: {}", snapshot_path))?;

    tracing::info!("Loaded {} clients from {}", records.len(), snapshot_path);
    if let Some(newest) = newest_ping(&records) {
        tracing::info!("Newest ping at {}", newest.to_rfc3339());
    }

    let summaries: Vec<ClientSummary> = records.iter().map(ClientSummary::from_record).collect();
    println!("{}", render_table(&summaries));

    Ok(())
}
