use anyhow::Result;
use clap::Parser;
use demo_sequence::config::Config;
use demo_sequence::output::{self, OutputFormat};
use demo_sequence::program;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "demo",
    about = "Run the demo sequence: bindings, add, check_positive, and printed state"
)]
struct Cli {
    /// Optional TOML file overriding the initial bindings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("demo_sequence=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };

    let transcript = program::run(&config.bindings);
    output::write_transcript(&mut std::io::stdout().lock(), &transcript, cli.format)?;
    Ok(())
}
