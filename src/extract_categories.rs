/*
cargo run --bin extract_categories -- \
    --output categories.json

offline, from a local export:
cargo run --bin extract_categories -- \
    --input data/dv_subject_train.jsonl \
    --output output/categories.json
*/

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::{create_dir_all, File};
use std::path::PathBuf;
use std::time::Duration;

use dv_subject_tools::{run_extraction, HubDataset, JsonFileSource, RecordSource};

// CLI parameters
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Hub dataset id holding the subject annotations
    #[arg(long, default_value = "siacus/dv_subject")]
    dataset: String,

    /// Split to consume
    #[arg(long, default_value = "train")]
    split: String,

    /// Local JSON/JSONL file to read instead of the hub
    #[arg(long)]
    input: Option<PathBuf>,

    /// Where to write the sorted category array
    #[arg(short, long, default_value = "categories.json")]
    output: PathBuf,

    /// HF access token (falls back to cached creds)
    #[arg(long, env = "HF_TOKEN")]
    token: Option<String>,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // logging setup
    create_dir_all(&cli.log_dir)?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = cli.log_dir.join(format!("extract_categories_{ts}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path)?,
    )?;
    info!("Starting category extraction");

    let source: Box<dyn RecordSource> = match &cli.input {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(HubDataset::new(&cli.dataset).with_token(cli.token.clone())),
    };

    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}")?);
    bar.set_message(format!("Extracting categories from {}", source.describe()));
    bar.enable_steady_tick(Duration::from_millis(120));

    let report = run_extraction(source.as_ref(), &cli.split, &cli.output)
        .with_context(|| format!("extracting categories from {}", source.describe()))?;

    bar.finish_and_clear();

    println!(
        "Saved {} unique subject categories to {}",
        report.categories,
        cli.output.display()
    );
    info!(
        "Processed {} row(s), wrote {} categories, log at {:?}",
        report.rows, report.categories, log_path
    );
    Ok(())
}
