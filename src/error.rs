use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Unknown target language: {0}")]
    UnknownLanguage(String),

    #[error("Morse input decoded to empty text")]
    EmptyDecode,
}

pub type Result<T> = std::result::Result<T, RelayError>;
