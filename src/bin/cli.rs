//! freework crawler CLI
//!
//! Crawls a free-work.com search and exports the job records.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use freework::{
    error::Result,
    export,
    models::{Config, ExportFormat},
    pipeline::{self, shutdown_channel},
    services::HttpFetcher,
};

/// freework - free-work.com job crawler
#[derive(Parser, Debug)]
#[command(name = "freework", version, about = "free-work.com job listing crawler")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl a search and export the jobs found
    Crawl {
        /// Search results URL (first page)
        #[arg(long)]
        url: String,

        /// Maximum search pages to walk (0 = all)
        #[arg(long)]
        max_pages: Option<u32>,

        /// Output directory for exported files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Export format: csv, json or both
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Run the page fetcher headless
        #[arg(long, overrides_with = "no_headless")]
        headless: bool,

        /// Run the page fetcher with a visible browser
        #[arg(long)]
        no_headless: bool,

        /// Disable delays between requests
        #[arg(long)]
        no_pacing: bool,

        /// Job pages fetched concurrently
        #[arg(long)]
        concurrency: Option<usize>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Crawl {
            url,
            max_pages,
            output,
            format,
            headless,
            no_headless,
            no_pacing,
            concurrency,
        } => {
            if let Some(max_pages) = max_pages {
                config.crawler.max_pages = max_pages;
            }
            if let Some(output) = output {
                config.export.output_dir = output;
            }
            if let Some(format) = format {
                config.export.format = format;
            }
            if headless {
                config.crawler.headless = true;
            } else if no_headless {
                config.crawler.headless = false;
            }
            if no_pacing {
                config.crawler.pacing_min_ms = 0;
                config.crawler.pacing_max_ms = 0;
                config.crawler.page_delay_min_ms = 0;
                config.crawler.page_delay_max_ms = 0;
            }
            if let Some(concurrency) = concurrency {
                config.crawler.max_concurrent = concurrency;
            }

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }

            let fetcher = Arc::new(HttpFetcher::new(&config.crawler)?);
            log::info!("HTTP fetcher ready (headless: {})", fetcher.headless());

            let (sender, token) = shutdown_channel();
            tokio::spawn(async move {
                if pipeline::relay_interrupts(sender, tokio::signal::ctrl_c).await {
                    std::process::exit(130);
                }
            });

            let report = pipeline::run_crawler(&config, &url, fetcher, token).await?;
            let files = export::export_records(&report.records, &config.export).await?;
            pipeline::log_summary(&report, &files);

            if let Some(failure) = report.failure {
                log::error!("Crawl ended early: {}", failure);
                return Err(failure);
            }
        }

        Command::Validate => {
            log::info!("Validating {}...", cli.config.display());

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (crawler, selectors and export settings)");
        }
    }

    log::info!("Done!");

    Ok(())
}
