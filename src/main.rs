use std::sync::Arc;

use anyhow::Result;
use profile_fetcher::{logging, ConsoleLogger, NetworkService, ProfileFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let fetcher = ProfileFetcher::new(Arc::new(NetworkService::new()), Arc::new(ConsoleLogger));

    log::info!("Fetching profiles from {}", fetcher.endpoint());
    // The task only logs; waiting keeps the runtime alive until it has.
    if let Some(task) = fetcher.fetch_profiles() {
        task.await?;
    }

    Ok(())
}
