mod echo;
mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use anyhow::{Context, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use pagesift_core::{Categories, FetchConfig, ScrapeOptions, ScrapeReport, Scraper, UrlResolution, validate_url};
use tracing_subscriber::EnvFilter;

use crate::echo::{
    format_size, print_banner, print_detail, print_error, print_info, print_step, print_success, print_timing,
    print_warning,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output format for the scrape report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, json", s)),
        }
    }
}

/// Fetch a web page and sift out headings, links, paragraphs and images
#[derive(Parser, Debug)]
#[command(name = "pagesift")]
#[command(author = "pagesift Contributors")]
#[command(version)]
#[command(about = "Sift headings, links, paragraphs and images out of a web page", long_about = None)]
struct Args {
    /// URL of the page to scrape (e.g. https://example.com)
    #[arg(value_name = "URL")]
    url: String,

    /// Keyword to search for in headings, paragraphs and link text
    #[arg(short, long, value_name = "KEYWORD")]
    keyword: Option<String>,

    /// Extract h1-h3 headings
    #[arg(long)]
    headings: bool,

    /// Extract links
    #[arg(long)]
    links: bool,

    /// Extract paragraphs
    #[arg(long)]
    paragraphs: bool,

    /// Extract images
    #[arg(long)]
    images: bool,

    /// Extract every category
    #[arg(short, long)]
    all: bool,

    /// Directory to write headings.txt, links.csv, paragraphs.txt (and images.zip) into
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Download every image into images.zip (implies --images)
    #[arg(long, requires = "output_dir")]
    zip_images: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    format: OutputFormat,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Resolve relative image sources against the page URL instead of
    /// prefixing scheme://host
    #[arg(long)]
    resolve_relative: bool,

    /// Number of words in the paragraph word summary (0 = all)
    #[arg(long, default_value = "20", value_name = "NUM")]
    top_words: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn categories(&self) -> Categories {
        if self.all {
            return Categories::all();
        }
        Categories {
            headings: self.headings,
            links: self.links,
            paragraphs: self.paragraphs,
            images: self.images || self.zip_images,
        }
    }

    fn scrape_options(&self) -> ScrapeOptions {
        let resolution = if self.resolve_relative { UrlResolution::Join } else { UrlResolution::Concatenate };
        let mut builder = ScrapeOptions::builder()
            .categories(self.categories())
            .url_resolution(resolution)
            .top_words(self.top_words);
        if let Some(keyword) = &self.keyword {
            builder = builder.keyword(keyword.clone());
        }
        builder.build()
    }

    fn fetch_config(&self) -> FetchConfig {
        let defaults = FetchConfig::default();
        FetchConfig { timeout: self.timeout, user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent) }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "pagesift=debug,pagesift_core=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print_error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> anyhow::Result<()> {
    if args.url.trim().is_empty() {
        bail!("Please enter a valid URL.");
    }
    if validate_url(&args.url).is_err() {
        bail!("Invalid URL. Please enter a valid one (e.g., https://example.com).");
    }

    let total = if args.output_dir.is_some() { 3 } else { 2 };
    let options = args.scrape_options();
    let scraper = Scraper::new(args.fetch_config());
    tracing::debug!(?options, timeout = args.timeout, "scrape options");

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
        print_step(1, total, &format!("Fetching {}", args.url.bright_white().underline()));
    }

    if options.categories.is_empty() {
        print_info("No categories selected; use --headings, --links, --paragraphs, --images or --all");
    }

    let started = Instant::now();
    let report = scraper.scrape(&args.url, &options).await?;
    print_success("Successfully fetched the page!");

    if args.verbose {
        print_timing("Fetch and extract", started.elapsed());
        for category in options.categories.iter() {
            print_detail(category.label(), &report.results.count(category).to_string());
        }
        eprintln!();
        print_step(2, total, "Rendering results");
    }

    for url in &report.invalid_images {
        print_warning(&format!("Invalid image URL: {}", url));
    }

    let output = match args.format {
        OutputFormat::Text => render::render_text(&report, &options.categories),
        OutputFormat::Json => format!("{:#}\n", report.to_json().context("Failed to serialize report")?),
    };
    print!("{}", output);

    if let Some(dir) = &args.output_dir {
        if args.verbose {
            eprintln!();
            print_step(3, total, &format!("Writing artifacts to {}", dir.display().bright_white()));
        }
        write_artifacts(dir, &report)?;

        if args.zip_images {
            package_images(&scraper, &report, dir, args.verbose).await?;
        }
    }

    Ok(())
}

fn write_artifacts(dir: &Path, report: &ScrapeReport) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let artifacts = report.artifacts();
    if artifacts.is_empty() {
        print_info("Nothing to export");
    }

    for artifact in artifacts {
        let path = artifact
            .write_to(dir)
            .with_context(|| format!("Failed to write {}", artifact.file_name))?;
        print_success(&format!(
            "Wrote {} ({}, {})",
            path.display().bright_white(),
            artifact.mime,
            format_size(artifact.bytes.len())
        ));
    }

    Ok(())
}

async fn package_images(scraper: &Scraper, report: &ScrapeReport, dir: &Path, verbose: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    let Some(archive) = scraper.package_images(report).await.context("Failed to build images.zip")? else {
        print_info("No images to package");
        return Ok(());
    };

    for warning in &archive.warnings {
        print_warning(&warning.to_string());
    }

    let path = dir.join(pagesift_core::export::IMAGES_FILE);
    fs::write(&path, &archive.bytes).with_context(|| format!("Failed to write to file: {}", path.display()))?;
    print_success(&format!(
        "Wrote {} ({} of {} images, {})",
        path.display().bright_white(),
        archive.entries.len(),
        report.results.images.len(),
        format_size(archive.bytes.len())
    ));

    if verbose {
        print_timing("Image downloads", started.elapsed());
    }

    Ok(())
}
