use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use marker::{GradeReportResponse, Reporter};
use profile_grader::{ProfileSettings, grade};
use util::config::AppConfig;
use util::http::HttpFetcher;
use util::logger::init_logging;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about = "Grade a freeCodeCamp or Codecademy learner profile")]
struct Args {
    /// Profile URL, e.g. https://www.freecodecamp.org/<username>
    url: String,
    /// Suppress the per-step report
    #[arg(long)]
    quiet: bool,
    /// Output format: text report or a JSON document
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::global().clone();
    let _log_guard = init_logging(&config);

    let fetcher = HttpFetcher::new(config.request_timeout(), &config.user_agent)
        .context("failed to build HTTP client")?;
    let settings = ProfileSettings::from_config(&config);

    let show_text = args.format == OutputFormat::Text && !args.quiet;
    let report = grade(&args.url, &fetcher, &settings, Reporter::stdout(show_text)).await?;

    if args.format == OutputFormat::Json {
        let response: GradeReportResponse = report.into();
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}
