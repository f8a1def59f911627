use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::pipeline::Relay;
use crate::translate::{self, TranslatorConfig, TARGET_LANGUAGES};

#[derive(Parser)]
#[command(name = "morse-relay")]
#[command(about = "CLI tool for Morse code translation backed by an LLM translation relay")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Encode English text to Morse (local, no network)
    morse-relay encode "HELLO WORLD"

    # Decode Morse back to English (local, no network)
    morse-relay decode ".... . .-.. .-.. ---"

    # Translate any language to English, then encode
    morse-relay relay encode "你好 世界"

    # Decode Morse and translate the English into Japanese
    morse-relay relay decode "... --- ..." --lang ja

    # List supported target languages
    morse-relay languages
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Chat-completions endpoint for the translation model
    #[arg(
        long,
        global = true,
        default_value = "https://generativelanguage.googleapis.com/v1beta/openai"
    )]
    pub endpoint: String,

    /// Model identifier sent to the endpoint
    #[arg(long, global = true, default_value = "gemini-2.5-flash")]
    pub model: String,

    /// API key (falls back to the MORSE_RELAY_API_KEY environment variable)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "30")]
    pub timeout_secs: u64,
}

impl Cli {
    pub fn translator_config(&self) -> TranslatorConfig {
        TranslatorConfig {
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            api_key: self
                .api_key
                .clone()
                .or_else(|| std::env::var("MORSE_RELAY_API_KEY").ok()),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode English text to Morse code (local only)
    Encode {
        /// Text to encode
        text: String,
    },

    /// Decode Morse code to English text (local only)
    Decode {
        /// Morse message, tokens separated by spaces and words by `/`
        morse: String,
    },

    /// Run the full translation relay
    Relay {
        #[command(subcommand)]
        command: RelayCommands,
    },

    /// List supported target languages
    Languages,
}

#[derive(Subcommand)]
pub enum RelayCommands {
    /// Translate any language to English, then encode to Morse
    Encode {
        /// Text in any language
        text: String,
    },

    /// Decode Morse, then translate the English into a target language
    Decode {
        /// Morse message to decode
        morse: String,

        /// Target language code or name
        #[arg(long, default_value = "en")]
        lang: String,
    },
}

pub fn encode_text(text: &str) {
    println!("{}", crate::codec::encode(text));
}

pub fn decode_morse(morse: &str) {
    println!("{}", crate::codec::decode(morse));
}

pub async fn relay_encode(config: TranslatorConfig, text: &str) -> Result<()> {
    let relay = Relay::new(config)?;
    let message = relay.encode_message(text).await?;

    println!("English: {}", message.english);
    println!("Morse:   {}", message.morse);

    Ok(())
}

pub async fn relay_decode(config: TranslatorConfig, morse: &str, lang: &str) -> Result<()> {
    let target = translate::resolve(lang)?;
    let relay = Relay::new(config)?;
    let message = relay.decode_message(morse, target).await?;

    println!("English:    {}", message.english);
    println!("{} ({}): {}", target.name, target.code, message.translated);

    Ok(())
}

pub fn list_languages() {
    println!("Supported target languages:");
    for lang in TARGET_LANGUAGES {
        println!("  {:<6} {}", lang.code, lang.name);
    }
}
