use std::sync::Arc;

use fetch_sizes::{run, telemetry, write_report, Fetch, FetchConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    let config = FetchConfig::from_env();
    let transport = Arc::new(Fetch::new(Some(config.clone()))?);

    let results = run(transport, urls, &config).await;

    // Per-url failures are part of the report, not the exit status.
    write_report(&mut std::io::stdout().lock(), &results)?;
    Ok(())
}
