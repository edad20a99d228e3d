//! CLI entry point for the regional word-cloud builder.
//!
//! Loads the observation dataset, keeps the West census region, counts the
//! detected-object words and writes the word cloud as JSON.

use anyhow::Result;
use clap::Parser;
use haunted_wordcloud::{
    analyzers::aggregate::build_wordcloud,
    loader::load_observations,
    output::{print_pretty, write_json},
    regions::Region,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Region whose rows feed the word cloud.
const TARGET_REGION: Region = Region::West;

#[derive(Parser)]
#[command(name = "haunted_wordcloud")]
#[command(about = "Builds a word-cloud JSON from detected objects in one census region", long_about = None)]
struct Cli {
    /// CSV dataset to read
    #[arg(short, long, default_value = "final_complete_dataset.csv")]
    input: PathBuf,

    /// JSON file to write
    #[arg(short, long, default_value = "west_wordcloud_d3.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/haunted_wordcloud.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("haunted_wordcloud.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    run(&cli.input, &cli.output)
}

/// Load, filter, aggregate, export. Any error aborts before the output is written.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
fn run(input: &Path, output: &Path) -> Result<()> {
    let rows = load_observations(input)?;
    let records = build_wordcloud(&rows, TARGET_REGION);
    print_pretty(&records);
    write_json(output, &records)?;

    info!(region = %TARGET_REGION, words = records.len(), "Word cloud complete");
    Ok(())
}
