//! Headlines data structure representing the extraction output.
//!
//! ## Example
//!
//! ```rust
//! use headline_scraper::HeadlineExtractor;
//!
//! let html = r#"<html><head><title>Home</title></head><body><h1>Big Story</h1></body></html>"#;
//! let headlines = HeadlineExtractor::new(html, Some("https://example.org/"), None)
//!     .unwrap()
//!     .extract();
//!
//! for (i, headline) in headlines.iter().enumerate() {
//!     println!("{}. {}", i + 1, headline);
//! }
//! ```

use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};

/// Headlines extracted from one page, in first-seen order.
///
/// Every entry is whitespace-normalized, non-empty, and unique under
/// case-insensitive comparison. The list may be empty; that is a valid
/// outcome, not an error.
///
/// ## Serialization
///
/// ```rust
/// use headline_scraper::{Headlines, Strategy};
///
/// let headlines = Headlines {
///     url: Some("https://www.bbc.com/news".to_string()),
///     strategy: Strategy::Bbc,
///     items: vec!["Top story".to_string()],
/// };
/// let json = serde_json::to_string(&headlines).unwrap();
/// assert!(json.contains("\"strategy\":\"bbc\""));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Headlines {
    /// Page the headlines came from, when known.
    pub url: Option<String>,

    /// Strategy that produced them.
    pub strategy: Strategy,

    /// The headlines themselves.
    pub items: Vec<String>,
}

impl Headlines {
    /// Number of headlines
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no headline was found
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Headlines in first-seen order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Headlines {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Headlines {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
