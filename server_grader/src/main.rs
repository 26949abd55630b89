use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use marker::{CaseSelector, GradeReportResponse, Reporter};
use server_grader::grade;
use util::config::AppConfig;
use util::http::HttpFetcher;
use util::logger::init_logging;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Grade a deployed movie server")]
struct Args {
    /// Base URL of the server, e.g. http://localhost:3000
    url: String,
    /// Suppress the per-check report
    #[arg(long)]
    quiet: bool,
    /// Output format: text report or a JSON document
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Seed for the search and detail case selection; defaults to the clock
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::global().clone();
    let _log_guard = init_logging(&config);

    let fetcher = HttpFetcher::new(config.request_timeout(), &config.user_agent)
        .context("failed to build HTTP client")?;
    let mut selector = match args.seed {
        Some(seed) => CaseSelector::from_seed(seed),
        None => CaseSelector::from_time(),
    };

    let show_text = args.format == OutputFormat::Text && !args.quiet;
    let report = grade(&args.url, &fetcher, &mut selector, Reporter::stdout(show_text)).await?;

    if args.format == OutputFormat::Json {
        let response: GradeReportResponse = report.into();
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}
