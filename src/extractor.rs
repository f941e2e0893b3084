//! Main extractor struct tying document, strategy and options together.
//!
//! ## Example
//!
//! ```rust,no_run
//! use headline_scraper::{HeadlineExtractor, ScraperOptions};
//!
//! let html = std::fs::read_to_string("front-page.html").unwrap();
//! let url = "https://www.bbc.com/news";
//!
//! let options = ScraperOptions::builder().max_items(10).build();
//! let headlines = HeadlineExtractor::new(&html, Some(url), Some(options))?.extract();
//!
//! println!("{} headlines via {}", headlines.len(), headlines.strategy);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{
    error::{Result, ScraperError},
    fetch::Fetcher,
    headlines::Headlines,
    options::ScraperOptions,
    selector::select_strategy,
    strategy::Strategy,
};
use scraper::Html;
use url::Url;

/// Extracts headlines from a single HTML document.
///
/// The strategy is fixed at construction: an explicit
/// [`ScraperOptions::strategy`] wins, otherwise it is derived from the URL
/// with [`select_strategy`], and documents without a URL use
/// [`Strategy::Generic`].
pub struct HeadlineExtractor {
    /// The parsed HTML document
    document: Html,

    /// Source URL, if known
    url: Option<String>,

    /// Strategy resolved from options or URL
    strategy: Strategy,

    /// Configuration options
    options: ScraperOptions,
}

impl HeadlineExtractor {
    /// Create a new extractor
    ///
    /// # Arguments
    /// * `html` - The HTML content to parse
    /// * `url` - Optional page URL, used to pick a site-specific strategy
    /// * `options` - Optional configuration options
    ///
    /// # Returns
    /// The extractor, or [`ScraperError::InvalidUrl`] if `url` is not an
    /// absolute URL
    pub fn new(html: &str, url: Option<&str>, options: Option<ScraperOptions>) -> Result<Self> {
        let url = url
            .map(|u| {
                Url::parse(u)
                    .map(|_| u.to_string())
                    .map_err(|_| ScraperError::InvalidUrl(u.to_string()))
            })
            .transpose()?;

        let options = options.unwrap_or_default();
        let strategy = options
            .strategy
            .or_else(|| url.as_deref().map(select_strategy))
            .unwrap_or_default();

        tracing::debug!(url = ?url, %strategy, "resolved strategy");

        Ok(Self {
            document: Html::parse_document(html),
            url,
            strategy,
            options,
        })
    }

    /// Strategy this extractor will run
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Run the strategy and collect at most `max_items` headlines
    pub fn extract(&self) -> Headlines {
        let items = self.strategy.extract(&self.document, self.options.max_items);
        tracing::debug!(strategy = %self.strategy, headlines = items.len(), "extracted headlines");

        Headlines {
            url: self.url.clone(),
            strategy: self.strategy,
            items,
        }
    }
}

/// Fetch `url` and extract its headlines in one step.
///
/// ```rust,no_run
/// use headline_scraper::scrape_headlines;
///
/// let headlines = scrape_headlines("https://www.bbc.com/news", None)?;
/// for headline in &headlines {
///     println!("{}", headline);
/// }
/// # Ok::<(), headline_scraper::ScraperError>(())
/// ```
pub fn scrape_headlines(url: &str, options: Option<ScraperOptions>) -> Result<Headlines> {
    let options = options.unwrap_or_default();
    let html = Fetcher::new(&options)?.fetch(url)?;
    Ok(HeadlineExtractor::new(&html, Some(url), Some(options))?.extract())
}
