use anyhow::Result;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tracing::{error, info};

use turntable_export::utils::http::{create_client, HttpFetcher};
use turntable_export::{BatchDriver, Config, RunSummary};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("turntable_export=info".parse()?),
        )
        .init();

    info!("Starting Turntable Export");

    // Last-resort boundary: anything escaping the page loop is logged, not re-raised.
    match AssertUnwindSafe(export()).catch_unwind().await {
        Ok(Ok(summary)) => info!(
            "Export finished: {} pages written, {} failed, {} products written, {} failed",
            summary.pages_written,
            summary.pages_failed,
            summary.products_written,
            summary.products_failed
        ),
        Ok(Err(e)) => error!("An overall error occurred: {:#}", e),
        Err(_) => error!("An overall error occurred: export aborted by a panic"),
    }

    Ok(())
}

async fn export() -> Result<RunSummary> {
    let config = Config::load()?;
    let client = create_client(&config)?;
    let fetcher = HttpFetcher::new(client, &config);

    let driver = BatchDriver::new(config, Box::new(fetcher));
    Ok(driver.run().await)
}
