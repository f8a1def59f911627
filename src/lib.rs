pub mod codec;
pub mod error;
pub mod pipeline;
pub mod translate;

pub use codec::{decode, encode};
pub use error::{RelayError, Result};
pub use pipeline::{DecodedMessage, EncodedMessage, Relay};
pub use translate::{TargetLanguage, TranslatorClient, TranslatorConfig, TARGET_LANGUAGES};
