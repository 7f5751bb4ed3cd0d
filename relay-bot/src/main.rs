//! Binary entry: `relay-bot run [--token T] [--session-token S]`.

use anyhow::Result;
use clap::Parser;
use relay_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            session_token,
        } => {
            let (config, llm_config) = load_config(token, session_token)?;
            run_bot(config, llm_config).await
        }
    }
}
