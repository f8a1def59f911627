//! Orchestration of the two-hop flow: translation model on one side, local
//! Morse codec on the other.

use tracing::{debug, info};

use crate::codec;
use crate::error::{RelayError, Result};
use crate::translate::{TargetLanguage, TranslatorClient, TranslatorConfig};

/// Result of encoding: the intermediate English plus its Morse form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage {
    pub english: String,
    pub morse: String,
}

/// Result of decoding: the restored English plus its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub english: String,
    pub translated: String,
}

pub struct Relay {
    client: TranslatorClient,
}

impl Relay {
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        Ok(Self {
            client: TranslatorClient::new(config)?,
        })
    }

    /// Translates text in any language to English, then encodes it as Morse.
    ///
    /// Blank input short-circuits to empty outputs without touching the
    /// translation endpoint.
    pub async fn encode_message(&self, text: &str) -> Result<EncodedMessage> {
        if text.trim().is_empty() {
            return Ok(EncodedMessage {
                english: String::new(),
                morse: String::new(),
            });
        }

        let english = self.client.translate_to_english(text).await?;
        let morse = codec::encode(&english);
        info!(chars = english.len(), "encoded message");

        Ok(EncodedMessage { english, morse })
    }

    /// Decodes Morse to English, then translates into the target language.
    ///
    /// Decoding itself never fails; input that decodes to nothing is reported
    /// as `EmptyDecode` before any translation call is made. A target of
    /// English still goes through the model for natural phrasing.
    pub async fn decode_message(
        &self,
        morse: &str,
        target: &TargetLanguage,
    ) -> Result<DecodedMessage> {
        let english = codec::decode(morse);
        if english.trim().is_empty() {
            return Err(RelayError::EmptyDecode);
        }
        debug!(target = target.code, "decoded Morse, translating");

        let translated = self.client.translate_to_target(&english, target.name).await?;

        Ok(DecodedMessage {
            english,
            translated,
        })
    }
}
