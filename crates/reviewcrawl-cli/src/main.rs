mod crawl;

use std::path::PathBuf;

use clap::Parser;
use reviewcrawl_core::AppConfig;
use reviewcrawl_export::{normalize_output_filename, write_workbook};
use reviewcrawl_scraper::ReviewClient;
use reviewcrawl_translate::YoudaoTranslator;
use tracing_subscriber::EnvFilter;

use crate::crawl::{CrawlOptions, CrawlReport};

#[derive(Debug, Parser)]
#[command(name = "reviewcrawl")]
#[command(version, about = "Crawl Walmart product reviews into an xlsx workbook")]
struct Cli {
    /// Review page URL(s); separate several products with `;`
    #[arg(short = 'l', long = "link")]
    link: Option<String>,

    /// Number of review pages to crawl per product (estimated when omitted)
    #[arg(short = 'p', long = "page", value_parser = clap::value_parser!(u32).range(1..))]
    page: Option<u32>,

    /// Translate review titles and text through the Youdao API
    #[arg(short = 't', long = "translate")]
    translate: bool,

    /// Output workbook name; `.xlsx` is added when missing
    #[arg(short = 'f', long = "filename")]
    filename: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = reviewcrawl_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    execute(&cli, &config).await
}

/// Runs one crawl end to end: resolve inputs, crawl, optionally translate,
/// then write the workbook.
///
/// Fails before any request is made when no link is available or when
/// translation is requested without credentials.
async fn execute(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    let urls = resolve_links(cli.link.as_deref(), config.default_link.as_deref())?;
    let output = output_path(cli.filename.as_deref(), config);
    let translator = if cli.translate {
        Some(build_translator(config)?)
    } else {
        None
    };

    let client = ReviewClient::new(
        config.request_timeout_secs,
        &config.user_agent,
        config.inter_request_delay_ms,
    )
    .map_err(|e| anyhow::anyhow!("failed to build review client: {e}"))?;

    let options = CrawlOptions::from_config(config, cli.page);
    let mut report = crawl::run(&client, &urls, &options).await;

    if report.is_total_failure() {
        anyhow::bail!(
            "no reviews collected from {} product(s); {} not written",
            urls.len(),
            output.display()
        );
    }

    if let Some(translator) = &translator {
        crawl::translate_report(translator, &mut report).await;
    }

    let sheets = write_workbook(&output, &report.jobs, translator.is_some())?;
    print_summary(&report, &sheets, &output);
    Ok(())
}

/// Splits `;`-separated links, ignoring blank segments. Falls back to
/// `default_link` when no `--link` was given.
fn resolve_links(link: Option<&str>, default_link: Option<&str>) -> anyhow::Result<Vec<String>> {
    let Some(raw) = link.or(default_link) else {
        anyhow::bail!("no product link given; pass --link or set REVIEWCRAWL_DEFAULT_LINK");
    };
    let urls: Vec<String> = raw
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect();
    if urls.is_empty() {
        anyhow::bail!("link list \"{raw}\" contains no URLs");
    }
    Ok(urls)
}

fn output_path(filename: Option<&str>, config: &AppConfig) -> PathBuf {
    let requested = filename.map_or_else(
        || config.output_file.to_string_lossy().into_owned(),
        str::to_owned,
    );
    PathBuf::from(normalize_output_filename(&requested))
}

fn build_translator(config: &AppConfig) -> anyhow::Result<YoudaoTranslator> {
    let credentials = config.youdao_credentials()?;
    YoudaoTranslator::new(
        &config.youdao_url,
        credentials,
        config.request_timeout_secs,
        config.translate_interval_ms,
    )
    .map_err(|e| anyhow::anyhow!("failed to build translator: {e}"))
}

fn print_summary(report: &CrawlReport, sheets: &[String], output: &std::path::Path) {
    for (job, sheet) in report.jobs.iter().zip(sheets) {
        println!(
            "{sheet}: {} review(s) from {} page(s)",
            job.review_count(),
            job.page_count
        );
    }
    println!(
        "wrote {} review(s) across {} worksheet(s) to {}",
        report.total_reviews(),
        sheets.len(),
        output.display()
    );
    let empty = report.empty_products();
    if empty > 0 {
        eprintln!("{empty} product(s) yielded no reviews; see the log for details");
    }
}
