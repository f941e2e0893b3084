//! Console report for a single scrape run.
//!
//! [`scrape_and_report`] is the whole command-line flow minus argument
//! parsing: fetch, extract, print, save. Output goes to any [`Write`] so the
//! binary passes stdout and tests pass a buffer.

use crate::error::{Result, ScraperError};
use crate::extractor::HeadlineExtractor;
use crate::fetch::Fetcher;
use crate::options::ScraperOptions;
use crate::output::save_headlines;
use std::io::Write;
use std::path::Path;

/// Message printed when a page yields no headlines.
pub const NO_HEADLINES_MESSAGE: &str =
    "No headlines found — try changing the URL or add a site-specific selector.";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Headlines were printed and written to the output file.
    Saved(usize),
    /// The page had no headlines; nothing was written.
    NoHeadlines,
    /// The page could not be fetched; nothing was written.
    FetchFailed,
}

impl RunOutcome {
    /// Whether the process should exit successfully
    pub fn is_success(&self) -> bool {
        !matches!(self, RunOutcome::FetchFailed)
    }
}

/// Where and how a run reports its headlines.
#[derive(Debug, Clone, Copy)]
pub struct ReportTarget<'a> {
    /// File the headlines are saved to
    pub output: &'a Path,
    /// Print the serialized [`Headlines`](crate::Headlines) instead of a numbered list
    pub json: bool,
}

/// Fetch `url`, print its headlines to `out` and save them.
///
/// A fetch failure is reported on `out` and returned as
/// [`RunOutcome::FetchFailed`]; an empty page is reported as
/// [`RunOutcome::NoHeadlines`]. In both cases the output file is left alone.
/// Errors are reserved for failures of the report itself (client setup,
/// console or file writes).
pub fn scrape_and_report<W: Write>(
    out: &mut W,
    url: &str,
    options: ScraperOptions,
    target: ReportTarget<'_>,
) -> Result<RunOutcome> {
    let url = url.trim();
    let max_items = options.max_items;

    writeln!(out, "Fetching: {url}").map_err(ScraperError::Report)?;
    let fetcher = Fetcher::new(&options)?;
    let html = match fetcher.fetch(url) {
        Ok(html) => html,
        Err(e @ ScraperError::Fetch { .. }) => {
            tracing::debug!(error = %e, "fetch failed");
            writeln!(out, "{e}").map_err(ScraperError::Report)?;
            return Ok(RunOutcome::FetchFailed);
        }
        Err(e) => return Err(e),
    };

    let headlines = HeadlineExtractor::new(&html, Some(url), Some(options))?.extract();

    if headlines.is_empty() {
        writeln!(out, "{NO_HEADLINES_MESSAGE}").map_err(ScraperError::Report)?;
        return Ok(RunOutcome::NoHeadlines);
    }

    writeln!(
        out,
        "Found {} headlines (showing up to {}):\n",
        headlines.len(),
        max_items
    )
    .map_err(ScraperError::Report)?;

    if target.json {
        let json = serde_json::to_string_pretty(&headlines)?;
        writeln!(out, "{json}").map_err(ScraperError::Report)?;
    } else {
        for (i, headline) in headlines.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, headline).map_err(ScraperError::Report)?;
        }
    }

    save_headlines(&headlines.items, target.output)?;
    writeln!(out, "\nSaved to {}", target.output.display()).map_err(ScraperError::Report)?;

    Ok(RunOutcome::Saved(headlines.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_fetch_failure_is_unsuccessful() {
        assert!(RunOutcome::Saved(3).is_success());
        assert!(RunOutcome::NoHeadlines.is_success());
        assert!(!RunOutcome::FetchFailed.is_success());
    }

    #[test]
    fn unfetchable_url_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("headlines.txt");
        let options = ScraperOptions::builder()
            .request_delay(std::time::Duration::ZERO)
            .build();

        let mut out = Vec::new();
        let outcome = scrape_and_report(
            &mut out,
            "  not a url ",
            options,
            ReportTarget {
                output: &output,
                json: false,
            },
        )
        .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(outcome, RunOutcome::FetchFailed);
        assert!(printed.starts_with("Fetching: not a url\n"));
        assert!(printed.contains("Error fetching not a url:"));
        assert!(!output.exists());
    }
}
