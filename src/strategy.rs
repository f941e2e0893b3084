//! Headline extraction strategies.
//!
//! A [`Strategy`] is an ordered list of [`ExtractionRule`]s plus a flag for
//! whether the document title counts as a candidate. The set of strategies is
//! closed and edited by hand: supporting a new site means adding a variant,
//! its rule list, and an entry in the selector table
//! (see [`select_strategy`](crate::select_strategy)).

use crate::dedup::clean_and_dedupe;
use crate::document::DocumentQuery;
use crate::rules::ExtractionRule;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const GENERIC_RULES: &[ExtractionRule] = &[
    ExtractionRule::tag("h1"),
    ExtractionRule::tag("h2"),
    ExtractionRule::tag("h3"),
];

// Plain h1/h2, promo-classed h3 and anchor links.
const BBC_RULES: &[ExtractionRule] = &[
    ExtractionRule::tag("h1"),
    ExtractionRule::tag("h2"),
    ExtractionRule::with_class("h3", "gs-c-promo-heading__title"),
    ExtractionRule::with_class("a", "gs-c-promo-heading"),
];

/// How candidate headlines are pulled out of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Page `<title>` followed by every `h1`, `h2` and `h3`.
    #[default]
    Generic,
    /// BBC promo headings.
    Bbc,
}

impl Strategy {
    /// Every known strategy, in declaration order.
    pub const ALL: [Strategy; 2] = [Strategy::Generic, Strategy::Bbc];

    /// Stable lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Generic => "generic",
            Strategy::Bbc => "bbc",
        }
    }

    /// Rules evaluated by this strategy, in evaluation order.
    pub fn rules(&self) -> &'static [ExtractionRule] {
        match self {
            Strategy::Generic => GENERIC_RULES,
            Strategy::Bbc => BBC_RULES,
        }
    }

    /// Whether the document title is emitted ahead of the rule matches.
    pub fn uses_title(&self) -> bool {
        matches!(self, Strategy::Generic)
    }

    /// Raw candidate text, before normalization and dedup.
    ///
    /// Rules are evaluated one after the other; all matches of a rule come
    /// before any match of the next, regardless of where they sit in the page.
    pub fn candidates<D>(&self, document: &D) -> Vec<String>
    where
        D: DocumentQuery + ?Sized,
    {
        let mut candidates = Vec::new();

        if self.uses_title() {
            if let Some(title) = document.title() {
                candidates.push(title);
            }
        }

        for rule in self.rules() {
            candidates.extend(
                document
                    .texts(rule)
                    .into_iter()
                    .filter(|text| !text.is_empty()),
            );
        }

        candidates
    }

    /// Extract at most `max_items` unique, normalized headlines.
    pub fn extract<D>(&self, document: &D, max_items: usize) -> Vec<String>
    where
        D: DocumentQuery + ?Sized,
    {
        let candidates = self.candidates(document);
        tracing::debug!(
            strategy = self.name(),
            candidates = candidates.len(),
            "collected candidates"
        );
        clean_and_dedupe(candidates, max_items)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy '{0}' (expected one of: generic, bbc)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
