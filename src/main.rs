mod catalog;
mod config;
mod dataset;
mod models;
mod scrapers;

use config::Config;
use dataset::Dataset;
use scrapers::{ScraperTrait, WeeklyMansionScraper};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    info!("🏠 Weekly Mansion Scout");
    info!(
        "Searching {} in {} postal areas: {}",
        config.search.prefecture,
        config.search.postal_codes.len(),
        config.search.postal_codes.join(", ")
    );

    let scraper =
        WeeklyMansionScraper::with_params(config.search.clone(), config.timeout, config.max_retries)?
            .with_retry_delay(config.retry_delay);
    let listings = scraper.scrape().await?;

    let mut dataset = Dataset::open(&config.output_dir).await?;
    for listing in &listings {
        dataset.push_data(listing).await?;
    }
    dataset.write_summary(&listings).await?;

    info!(
        "✅ Stored {} listings from {} in {}",
        dataset.len(),
        scraper.source_name(),
        dataset.dir().display()
    );

    Ok(())
}
