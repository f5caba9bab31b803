//! Revision comparison binary
//!
//! Entry point for comparing two extracted document revisions.

use std::path::PathBuf;

use clap::Parser;
use revision_cli::{load_document, Config, OutputFormat, Reporter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "revision-compare")]
#[command(
    version,
    about = "Compare two document revisions page by page and recommend whether the new one matters"
)]
struct Args {
    /// Extracted text of the old revision (pages separated by form feeds)
    old: PathBuf,

    /// Extracted text of the new revision (pages separated by form feeds)
    new: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Console)]
    format: OutputFormat,

    /// TOML file overriding the comparison thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Reports go to stdout, so logs always go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting revision-compare v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let engine = config.engine()?;

    let old = load_document(&args.old)?;
    let new = load_document(&args.new)?;
    let report = engine.report(&old, &new);

    let reporter = Reporter::new(args.format);
    match &args.output {
        Some(path) => {
            reporter.write_to_file(&report, path)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => reporter.report(&report)?,
    }

    Ok(())
}
