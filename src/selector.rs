//! URL → strategy classification.

use crate::strategy::Strategy;

/// Site-specific strategies keyed by a URL fragment, checked in order.
///
/// Add a `(fragment, strategy)` pair here to route another site to its own
/// rule list.
pub const SITE_STRATEGIES: &[(&str, Strategy)] = &[("bbc.", Strategy::Bbc)];

/// Pick the extraction strategy for `url`.
///
/// The URL is lowercased and tested against [`SITE_STRATEGIES`] by plain
/// substring match; the first hit wins and anything else falls back to
/// [`Strategy::Generic`].
///
/// ```rust
/// use headline_scraper::{select_strategy, Strategy};
///
/// assert_eq!(select_strategy("https://www.BBC.co.uk/news"), Strategy::Bbc);
/// assert_eq!(select_strategy("https://example.org/page"), Strategy::Generic);
/// ```
pub fn select_strategy(url: &str) -> Strategy {
    let haystack = url.to_lowercase();
    SITE_STRATEGIES
        .iter()
        .find(|(fragment, _)| haystack.contains(fragment))
        .map(|(_, strategy)| *strategy)
        .unwrap_or_default()
}
