//! Binary for the Clash of Clans helper bot.

use anyhow::{Context, Result};
use clap::Parser;
use coc_helper_bot::{init_tracing, load_config, run_supervised, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token).context("Invalid configuration")?;
            init_tracing(config.log_file())?;
            run_supervised(config).await
        }
    }
}
