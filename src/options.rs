//! Configuration options for fetching and extraction.
//!
//! This module provides [`ScraperOptions`] and [`ScraperOptionsBuilder`].
//!
//! ## Example
//!
//! ```rust
//! use headline_scraper::{ScraperOptions, Strategy};
//! use std::time::Duration;
//!
//! let options = ScraperOptions::builder()
//!     .max_items(20)
//!     .timeout(Duration::from_secs(5))
//!     .strategy(Strategy::Generic)
//!     .build();
//!
//! assert_eq!(options.max_items, 20);
//! ```

use crate::strategy::Strategy;
use std::time::Duration;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; NewsScraper/1.0; +https://example.com/bot)";

/// Default cap on the number of headlines returned.
pub const DEFAULT_MAX_ITEMS: usize = 50;

/// Options controlling the fetch and extraction steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperOptions {
    /// Maximum number of headlines to return.
    ///
    /// Default: `50`
    pub max_items: usize,

    /// Total timeout for the HTTP request.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// Fixed pause taken before every request.
    ///
    /// Default: 1 second
    pub request_delay: Duration,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,

    /// Force a strategy instead of choosing one from the URL.
    ///
    /// Default: `None`
    pub strategy: Option<Strategy>,
}

impl Default for ScraperOptions {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            timeout: Duration::from_secs(10),
            request_delay: Duration::from_secs(1),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            strategy: None,
        }
    }
}

impl ScraperOptions {
    /// Creates a new builder for ScraperOptions
    pub fn builder() -> ScraperOptionsBuilder {
        ScraperOptionsBuilder::default()
    }
}

/// Builder for [`ScraperOptions`].
#[derive(Default)]
pub struct ScraperOptionsBuilder {
    max_items: Option<usize>,
    timeout: Option<Duration>,
    request_delay: Option<Duration>,
    user_agent: Option<String>,
    strategy: Option<Strategy>,
}

impl ScraperOptionsBuilder {
    /// Set the maximum number of headlines
    pub fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the pause taken before each request
    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = Some(delay);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Force an extraction strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Build the ScraperOptions
    pub fn build(self) -> ScraperOptions {
        let defaults = ScraperOptions::default();
        ScraperOptions {
            max_items: self.max_items.unwrap_or(defaults.max_items),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            request_delay: self.request_delay.unwrap_or(defaults.request_delay),
            user_agent: self.user_agent.unwrap_or(defaults.user_agent),
            strategy: self.strategy.or(defaults.strategy),
        }
    }
}
