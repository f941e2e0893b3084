//! headlines - fetch a news page and list its headlines

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use headline_scraper::{
    scrape_and_report, ReportTarget, ScraperOptions, Strategy, DEFAULT_MAX_ITEMS,
    DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_URL: &str = "https://www.bbc.com/news";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Page to scrape
    #[arg(value_name = "URL", default_value = DEFAULT_URL)]
    url: String,

    /// File the headlines are written to, one per line
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Maximum number of headlines to keep
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_ITEMS)]
    max_items: usize,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    timeout: u64,

    /// Pause before the request, in seconds
    #[arg(long, value_name = "SECS", default_value_t = 1)]
    delay: u64,

    /// User-Agent header to send
    #[arg(long, env = "HEADLINES_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Force an extraction strategy (generic, bbc) instead of matching the URL
    #[arg(long)]
    strategy: Option<Strategy>,

    /// Print the result as JSON instead of a numbered list
    #[arg(long)]
    json: bool,

    /// Turn debug logging on
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn options(&self) -> ScraperOptions {
        let mut builder = ScraperOptions::builder()
            .max_items(self.max_items)
            .timeout(Duration::from_secs(self.timeout))
            .request_delay(Duration::from_secs(self.delay))
            .user_agent(self.user_agent.clone());
        if let Some(strategy) = self.strategy {
            builder = builder.strategy(strategy);
        }
        builder.build()
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.debug) {
        eprintln!("error: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only carries the headline listing.
fn init_logging(debug: bool) -> anyhow::Result<()> {
    let default_filter = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let stdout = std::io::stdout();
    let target = ReportTarget {
        output: &args.output,
        json: args.json,
    };

    let outcome = scrape_and_report(&mut stdout.lock(), &args.url, args.options(), target)
        .with_context(|| format!("failed to scrape {}", args.url.trim()))?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
