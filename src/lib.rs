//! # headline-scraper
//!
//! Fetch a news page and pull out its headlines.
//!
//! ## Overview
//!
//! The crate is a linear pipeline: fetch a page, parse it, run an extraction
//! strategy over the document, and normalize and deduplicate the candidate
//! text into an ordered list of headlines.
//!
//! - **Strategies**: a generic strategy (page title plus every `h1`/`h2`/`h3`)
//!   and site-specific rule lists chosen by matching the URL
//! - **Normalization**: whitespace runs collapse to single spaces
//! - **Deduplication**: case-insensitive, first occurrence wins, order preserved
//! - **Fetching**: blocking GET with user agent, timeout and a polite delay
//! - **Persistence**: one headline per line in a text file
//!
//! ## Basic Usage
//!
//! ```rust
//! use headline_scraper::HeadlineExtractor;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Home</title></head>
//!         <body><h1>  Big   Story  </h1><h2>Big Story</h2></body>
//!     </html>
//! "#;
//!
//! let headlines = HeadlineExtractor::new(html, Some("https://example.org/page"), None)
//!     .unwrap()
//!     .extract();
//!
//! assert_eq!(headlines.items, vec!["Home", "Big Story"]);
//! ```
//!
//! ## Fetching
//!
//! ```rust,no_run
//! use headline_scraper::{save_headlines, scrape_headlines, ScraperOptions};
//! use std::path::Path;
//!
//! let options = ScraperOptions::builder().max_items(20).build();
//! let headlines = scrape_headlines("https://www.bbc.com/news", Some(options))?;
//!
//! if !headlines.is_empty() {
//!     save_headlines(&headlines.items, Path::new("headlines.txt"))?;
//! }
//! # Ok::<(), headline_scraper::ScraperError>(())
//! ```
//!
//! ## Custom documents
//!
//! Strategies only depend on the [`DocumentQuery`] trait, which is
//! implemented for [`scraper::Html`]. Any other document representation can
//! implement it and be passed to [`Strategy::extract`] directly.

mod dedup;
mod document;
mod error;
mod extractor;
mod fetch;
mod headlines;
mod normalize;
mod options;
mod output;
mod report;
mod rules;
mod selector;
mod strategy;

// Public exports
pub use dedup::clean_and_dedupe;
pub use document::DocumentQuery;
pub use error::{Result, ScraperError};
pub use extractor::{scrape_headlines, HeadlineExtractor};
pub use fetch::Fetcher;
pub use headlines::Headlines;
pub use normalize::normalize;
pub use options::{ScraperOptions, ScraperOptionsBuilder, DEFAULT_MAX_ITEMS, DEFAULT_USER_AGENT};
pub use output::{save_headlines, DEFAULT_OUTPUT_FILE};
pub use report::{scrape_and_report, ReportTarget, RunOutcome, NO_HEADLINES_MESSAGE};
pub use rules::ExtractionRule;
pub use selector::{select_strategy, SITE_STRATEGIES};
pub use strategy::{Strategy, UnknownStrategy};
