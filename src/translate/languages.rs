//! Supported target languages for the second translation hop.

use crate::error::{RelayError, Result};

/// A target language the relay can translate decoded English into. The name
/// is the natural-language form handed to the model prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLanguage {
    pub code: &'static str,
    pub name: &'static str,
}

pub const TARGET_LANGUAGES: &[TargetLanguage] = &[
    TargetLanguage {
        code: "zh-TW",
        name: "Traditional Chinese (Taiwan)",
    },
    TargetLanguage {
        code: "en",
        name: "English",
    },
    TargetLanguage {
        code: "ja",
        name: "Japanese",
    },
    TargetLanguage {
        code: "ko",
        name: "Korean",
    },
];

/// Resolves a language code or name, case-insensitively.
pub fn resolve(identifier: &str) -> Result<&'static TargetLanguage> {
    let wanted = identifier.trim();
    TARGET_LANGUAGES
        .iter()
        .find(|lang| {
            lang.code.eq_ignore_ascii_case(wanted) || lang.name.eq_ignore_ascii_case(wanted)
        })
        .ok_or_else(|| RelayError::UnknownLanguage(identifier.to_string()))
}
