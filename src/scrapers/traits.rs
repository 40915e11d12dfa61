use crate::models::PropertyListing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for listing scrapers
#[async_trait]
pub trait ScraperTrait: Send + Sync {
    /// Fetch the search results and extract every listing on them
    async fn scrape(&self) -> Result<Vec<PropertyListing>>;

    /// Get the name of the scraper source
    fn source_name(&self) -> &'static str;
}
