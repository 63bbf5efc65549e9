use std::{fs, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use log::info;
use redline_text::{MarkupStyle, RedlineConfig, redline_with_config};

/// Prints the redline between two versions of a text file.
///
/// Run it with:
/// `cargo run --example redline-file --features serde -- baseline.md revised.md`
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// The original version of the document
    baseline: PathBuf,

    /// The new version of the document
    revised: PathBuf,

    /// Write the redline to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Use `[-deleted-]{+inserted+}` markers instead of HTML
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redline_text=info,redline_file=info".into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("{error}"))
        .context("Failed to initialise tracing")?;

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from '{}'", path.display());
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Cannot read configuration from {}", path.display()))?;
            RedlineConfig::from_yaml_str(&contents).context("Failed to parse configuration")?
        }
        None => RedlineConfig::default(),
    };
    if args.plain {
        config = config.with_markup(MarkupStyle::plain());
    }

    let baseline = fs::read_to_string(&args.baseline)
        .with_context(|| format!("Error reading {}", args.baseline.display()))?;
    let revised = fs::read_to_string(&args.revised)
        .with_context(|| format!("Error reading {}", args.revised.display()))?;

    let markup = redline_with_config(&baseline, &revised, &config)?;

    if let Some(path) = &args.output {
        fs::write(path, markup).with_context(|| format!("Error writing to {}", path.display()))?;
        info!("Wrote redline to '{}'", path.display());
    } else {
        print!("{markup}");
    }

    Ok(())
}
