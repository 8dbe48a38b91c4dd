use anyhow::Result;
use clap::Parser;

use hueboard::grid::GridConfig;

#[derive(Parser)]
#[command(name = "hueboard")]
#[command(about = "A clickable grid of named colors - click a swatch to copy it")]
#[command(version)]
struct Cli {
    /// Number of grid columns
    #[arg(long, default_value_t = 4)]
    columns: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = GridConfig {
        columns: cli.columns.max(1),
    };

    hueboard::gui::run_gui(config)?;

    Ok(())
}
