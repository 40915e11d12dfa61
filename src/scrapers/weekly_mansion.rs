use crate::models::PropertyListing;
use crate::scrapers::listing::ListingExtractor;
use crate::scrapers::request::{apartments_list_search_request, SearchRequest};
use crate::scrapers::traits::ScraperTrait;
use crate::scrapers::types::SearchParams;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Base delay between attempts; grows linearly with the attempt number
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// weekly-mansion.com search scraper
pub struct WeeklyMansionScraper {
    client: Client,
    params: SearchParams,
    extractor: ListingExtractor,
    max_retries: u32,
    retry_delay: Duration,
}

impl WeeklyMansionScraper {
    /// Create a scraper with custom search parameters
    pub fn with_params(params: SearchParams, timeout: Duration, max_retries: u32) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            params,
            extractor: ListingExtractor::new()?,
            max_retries,
            retry_delay: RETRY_DELAY,
        })
    }

    /// Override the base delay between attempts
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Send the search request, retrying failed attempts
    async fn fetch(&self, request: &SearchRequest) -> Result<String> {
        let mut attempt = 0;

        loop {
            match self.fetch_once(request).await {
                Ok(html) => return Ok(html),
                Err(e) if attempt < self.max_retries => {
                    attempt += 1;
                    warn!(
                        "Request to {} failed (attempt {}/{}): {:#}",
                        request.url,
                        attempt,
                        self.max_retries + 1,
                        e
                    );
                    tokio::time::sleep(self.retry_delay * attempt).await;
                }
                Err(e) => {
                    return Err(e).with_context(|| {
                        format!("Giving up on {} after {} attempts", request.url, attempt + 1)
                    });
                }
            }
        }
    }

    async fn fetch_once(&self, request: &SearchRequest) -> Result<String> {
        let mut builder = self.client.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, *value);
        }

        let response = builder
            .form(&request.form_fields())
            .send()
            .await
            .context("Failed to fetch listing page")?;

        if !response.status().is_success() {
            anyhow::bail!("Listing page returned status: {}", response.status());
        }

        let html = response.text().await.context("Failed to read response body")?;
        debug!("Downloaded {} bytes of HTML", html.len());

        Ok(html)
    }
}

#[async_trait]
impl ScraperTrait for WeeklyMansionScraper {
    async fn scrape(&self) -> Result<Vec<PropertyListing>> {
        let request = apartments_list_search_request(&self.params.prefecture, &self.params.postal_codes);

        info!(
            "Processing listing page: {} {} ({} postal areas)",
            request.method.as_str(),
            request.url,
            request.postal_codes.len()
        );
        debug!(
            "Search nonce: {}",
            request.field("random_number").unwrap_or_default()
        );

        let html = self.fetch(&request).await?;
        let listings = self.extractor.extract(&html);

        if listings.is_empty() {
            warn!("No listing containers found on {}", request.url);
        }
        info!("Found {} listings", listings.len());

        Ok(listings)
    }

    fn source_name(&self) -> &'static str {
        "weekly-mansion.com"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FIXTURE: &str = include_str!("../../tests/fixtures/list_add.html");
    const SEARCH_PATH: &str = "/tokyo/search/list_add.html";

    fn scraper(max_retries: u32) -> WeeklyMansionScraper {
        WeeklyMansionScraper::with_params(SearchParams::default(), Duration::from_secs(5), max_retries)
            .unwrap()
            .with_retry_delay(Duration::from_millis(10))
    }

    fn request_to(server: &MockServer) -> SearchRequest {
        SearchRequest {
            url: format!("{}{}", server.uri(), SEARCH_PATH),
            ..apartments_list_search_request("tokyo", &["13113".to_string()])
        }
    }

    #[test]
    fn builds_with_default_params() {
        let scraper =
            WeeklyMansionScraper::with_params(SearchParams::default(), Duration::from_secs(5), 3)
                .unwrap();
        assert_eq!(scraper.source_name(), "weekly-mansion.com");
        assert_eq!(scraper.params.postal_codes, vec!["13113"]);
    }

    #[tokio::test]
    async fn unreachable_host_fails_after_retries() {
        let scraper =
            WeeklyMansionScraper::with_params(SearchParams::default(), Duration::from_secs(1), 0)
                .unwrap();
        let request = SearchRequest {
            url: "http://127.0.0.1:9/tokyo/search/list_add.html".to_string(),
            ..apartments_list_search_request("tokyo", &["13113".to_string()])
        };

        let err = scraper.fetch(&request).await.unwrap_err();
        assert!(err.to_string().contains("after 1 attempts"));
    }

    #[tokio::test]
    async fn retries_server_error_then_extracts_listings() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path(SEARCH_PATH))
            .and(body_string_contains("jyuusyo_cd_list%5B%5D=13113"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FIXTURE))
            .expect(1)
            .mount(&server)
            .await;

        let scraper = scraper(1);
        let html = scraper.fetch(&request_to(&server)).await.unwrap();
        let listings = scraper.extractor.extract(&html);

        let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["12345", "67890", "24680"]);
    }

    #[tokio::test]
    async fn persistent_server_error_gives_up() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&server)
            .await;

        let err = scraper(1).fetch(&request_to(&server)).await.unwrap_err();
        assert!(err.to_string().contains("after 2 attempts"));
        assert!(format!("{:#}", err).contains("500"));
    }
}
