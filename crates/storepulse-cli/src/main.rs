mod collect;
mod output;
mod summarize;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storepulse")]
#[command(about = "Collect app store ratings and reviews, then summarize them for the dashboard")]
struct Cli {
    /// Runs collect then summarize when omitted.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch summaries and reviews from both stores into the snapshot file
    Collect,
    /// Score the snapshot's reviews and write the metrics file
    Summarize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = storepulse_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Collect) => collect::run_collect(&config).await?,
        Some(Commands::Summarize) => summarize::run_summarize(&config)?,
        None => {
            collect::run_collect(&config).await?;
            summarize::run_summarize(&config)?;
        }
    }

    Ok(())
}
