//! Read-only query interface over a parsed HTML document.
//!
//! Strategies only need two things from a document: its `<title>` and the
//! text of every element matching an [`ExtractionRule`]. [`DocumentQuery`]
//! captures exactly that, so strategies can be exercised against an
//! in-memory fake as easily as against a real [`scraper::Html`] tree.

use crate::rules::ExtractionRule;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("static title selector is valid"));

/// The capability a strategy needs from a parsed document.
pub trait DocumentQuery {
    /// Text of the document title, or `None` if it is missing or blank.
    fn title(&self) -> Option<String>;

    /// Text of every element matching `rule`, in document order.
    ///
    /// Each entry joins the element's descendant text nodes with a single
    /// space after trimming them.
    fn texts(&self, rule: &ExtractionRule) -> Vec<String>;
}

impl DocumentQuery for Html {
    fn title(&self) -> Option<String> {
        let title = self.select(&TITLE_SELECTOR).next()?;
        let text = title.text().collect::<String>();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn texts(&self, rule: &ExtractionRule) -> Vec<String> {
        let css = rule.css();
        let selector = match Selector::parse(&css) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::warn!(selector = %css, error = %e, "skipping unparsable selector");
                return Vec::new();
            }
        };

        let texts: Vec<String> = self.select(&selector).map(element_text).collect();
        tracing::debug!(selector = %css, matches = texts.len(), "rule matched");
        texts
    }
}

/// Join an element's descendant text nodes, trimming each and skipping the
/// empty ones.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_title() {
        let doc = Html::parse_document("<html><head><title> Home </title></head></html>");
        assert_eq!(doc.title().as_deref(), Some(" Home "));
    }

    #[test]
    fn blank_title_is_none() {
        let doc = Html::parse_document("<html><head><title>  </title></head></html>");
        assert_eq!(doc.title(), None);

        let doc = Html::parse_document("<html><body><h1>No title</h1></body></html>");
        assert_eq!(doc.title(), None);
    }

    #[test]
    fn joins_descendant_text_with_spaces() {
        let doc = Html::parse_document(
            "<h2><span>Markets</span><em>rally</em>\n  <b> again </b></h2>",
        );
        assert_eq!(doc.texts(&ExtractionRule::tag("h2")), vec!["Markets rally again"]);
    }

    #[test]
    fn keeps_document_order() {
        let doc = Html::parse_document(
            "<div><h3>first</h3><section><h3>second</h3></section></div><h3>third</h3>",
        );
        assert_eq!(
            doc.texts(&ExtractionRule::tag("h3")),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn class_rules_only_match_qualified_elements() {
        let doc = Html::parse_document(
            r#"<h3>plain</h3><h3 class="promo other">promoted</h3>"#,
        );
        assert_eq!(
            doc.texts(&ExtractionRule::with_class("h3", "promo")),
            vec!["promoted"]
        );
    }

    #[test]
    fn unparsable_rule_matches_nothing() {
        let doc = Html::parse_document("<h1>Title</h1>");
        assert!(doc.texts(&ExtractionRule::tag("h1[")).is_empty());
    }

    #[test]
    fn empty_elements_yield_empty_text() {
        let doc = Html::parse_document("<h1>   </h1>");
        assert_eq!(doc.texts(&ExtractionRule::tag("h1")), vec![String::new()]);
    }
}
