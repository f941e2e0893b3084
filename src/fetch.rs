//! Blocking page fetcher.

use crate::error::{Result, ScraperError};
use crate::options::ScraperOptions;
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;

/// Fetches page HTML with a fixed user agent, timeout and polite delay.
///
/// ```rust,no_run
/// use headline_scraper::{Fetcher, ScraperOptions};
///
/// let fetcher = Fetcher::new(&ScraperOptions::default())?;
/// let html = fetcher.fetch("https://www.bbc.com/news")?;
/// # Ok::<(), headline_scraper::ScraperError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    delay: Duration,
}

impl Fetcher {
    /// Build a fetcher from the timeout, delay and user agent in `options`.
    pub fn new(options: &ScraperOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()
            .map_err(ScraperError::HttpClient)?;

        Ok(Self {
            client,
            delay: options.request_delay,
        })
    }

    /// GET `url` and return the response body.
    ///
    /// Sleeps for the configured delay first. Transport failures and
    /// non-success statuses both come back as [`ScraperError::Fetch`].
    pub fn fetch(&self, url: &str) -> Result<String> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }

        tracing::info!(url, "fetching page");
        let fetch_err = |source| ScraperError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .map_err(fetch_err)?;

        let status = response.status();
        let body = response.text().map_err(fetch_err)?;
        tracing::info!(url, %status, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
