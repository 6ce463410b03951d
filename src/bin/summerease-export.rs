use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use serde_json::Value;
use summerease::types::{export_summary, ExportConfig, ExportFormat};
use tracing_subscriber::EnvFilter;

/// Export a summarized meeting record as PDF or Word
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding the summary record
    record: PathBuf,

    /// Output format: pdf or word
    #[arg(short, long, default_value = "pdf")]
    format: ExportFormat,

    /// Summary id, used in the output file name
    #[arg(long)]
    id: String,

    /// Directory the document is written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON file with page and metadata settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn load_config(path: Option<&PathBuf>) -> Result<ExportConfig> {
    match path {
        Some(path) => ExportConfig::load(path).with_context(|| format!("loading config {}", path.display())),
        None => Ok(ExportConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let _ = tracing_subscriber::fmt()
        // RUST_LOG wins over -v
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let config = load_config(cli.config.as_ref())?;

    let text = std::fs::read_to_string(&cli.record)
        .with_context(|| format!("reading record {}", cli.record.display()))?;
    let record: Value = serde_json::from_str(&text)
        .with_context(|| format!("parsing record {}", cli.record.display()))?;

    let artifact = export_summary(&record, &cli.id, cli.format, &config)
        .with_context(|| format!("exporting {}", cli.record.display()))?;

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;
    let path = artifact.write_to(&cli.out_dir)?;

    tracing::info!(bytes = artifact.bytes.len(), content_type = artifact.content_type, "export written");
    println!("{}", path.display());

    Ok(())
}
