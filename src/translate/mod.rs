//! Translation collaborator: the hosted model that bridges arbitrary
//! languages and the English the codec works in.

pub mod client;
pub mod languages;

pub use client::{ChatMessage, TranslatorClient, TranslatorConfig};
pub use languages::{resolve, TargetLanguage, TARGET_LANGUAGES};
