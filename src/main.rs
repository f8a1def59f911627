mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands, RelayCommands};

// Re-export from lib for internal use
use morse_relay::{codec, error, pipeline, translate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "morse_relay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let config = cli.translator_config();

    match cli.command {
        Commands::Encode { text } => {
            cli::encode_text(&text);
        }
        Commands::Decode { morse } => {
            cli::decode_morse(&morse);
        }
        Commands::Relay { command } => match command {
            RelayCommands::Encode { text } => {
                cli::relay_encode(config, &text).await?;
            }
            RelayCommands::Decode { morse, lang } => {
                cli::relay_decode(config, &morse, &lang).await?;
            }
        },
        Commands::Languages => {
            cli::list_languages();
        }
    }

    Ok(())
}
