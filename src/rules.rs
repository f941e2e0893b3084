//! Declarative extraction rules.

use std::fmt;

/// Where to look for headline text in a document: a bare tag name, or a tag
/// qualified by a single CSS class.
///
/// Rules carry no behaviour of their own. A [`DocumentQuery`](crate::DocumentQuery)
/// implementation decides how to match them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExtractionRule {
    pub tag: &'static str,
    pub class: Option<&'static str>,
}

impl ExtractionRule {
    /// Match every element with the given tag name.
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, class: None }
    }

    /// Match elements with the given tag name that carry `class`.
    pub const fn with_class(tag: &'static str, class: &'static str) -> Self {
        Self {
            tag,
            class: Some(class),
        }
    }

    /// CSS selector equivalent, e.g. `h3.gs-c-promo-heading__title`.
    pub fn css(&self) -> String {
        match self.class {
            Some(class) => format!("{}.{}", self.tag, class),
            None => self.tag.to_string(),
        }
    }
}

impl fmt::Display for ExtractionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}
