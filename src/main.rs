// src/main.rs

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use swapi_planets::{App, Cli, HttpJsonReader, JsonReader, StdConsole};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. LOGGING (stderr only; stdout is the report)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install log subscriber")?;

    // 2. WIRING
    let config = cli.config();
    log::debug!("configuration: {:?}", config);
    let reader: Arc<dyn JsonReader> = Arc::new(HttpJsonReader::new());
    let app = App::new(reader, config);

    // 3. RUN
    let mut console = StdConsole::new();
    app.execute(&mut console)
        .await
        .context("console is unavailable")?;

    Ok(())
}
