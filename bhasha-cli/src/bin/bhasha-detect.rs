use std::path::PathBuf;

use anyhow::Context;
use bhasha_cli::{load_config, run_files, DEFAULT_CHUNK_SIZE};
use bhasha_core::LanguageDetector;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "bhasha-detect",
    about = "Detect script and language of JSONL journaling records"
)]
struct Cli {
    /// Input JSONL file, one {"id": .., "text": ..} object per line
    #[arg(long, alias = "in_file")]
    in_file: PathBuf,

    /// Output JSONL file
    #[arg(long, alias = "out_file")]
    out_file: PathBuf,

    /// Detector config file (JSON)
    #[arg(long, env = "BHASHA_CONFIG")]
    config: Option<PathBuf>,

    /// Records detected per parallel chunk
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    init_observability();

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("loading detector config")?;
    let detector = LanguageDetector::with_config(config).context("invalid detector config")?;

    let summary = run_files(&detector, &cli.in_file, &cli.out_file, cli.chunk_size)
        .with_context(|| format!("processing {}", cli.in_file.display()))?;

    info!(
        records = summary.records,
        blank_lines = summary.blank_lines,
        "batch complete"
    );
    for (language, count) in &summary.languages {
        info!(language = language.code(), count, "language total");
    }

    Ok(())
}

fn init_observability() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,bhasha_cli=debug".into());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .init();
}
