//! Error types for worddrill

use std::io;
use thiserror::Error;

/// Main error type for worddrill
#[derive(Error, Debug)]
pub enum WorddrillError {
    #[error("Deck error: {0}")]
    Deck(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Draft store error: {0}")]
    Drafts(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for worddrill operations
pub type Result<T> = std::result::Result<T, WorddrillError>;

impl From<String> for WorddrillError {
    fn from(s: String) -> Self {
        WorddrillError::Other(s)
    }
}

impl From<&str> for WorddrillError {
    fn from(s: &str) -> Self {
        WorddrillError::Other(s.to_string())
    }
}

impl From<csv::Error> for WorddrillError {
    fn from(e: csv::Error) -> Self {
        WorddrillError::Deck(format!("CSV error: {}", e))
    }
}

impl From<serde_json::Error> for WorddrillError {
    fn from(e: serde_json::Error) -> Self {
        WorddrillError::Drafts(format!("JSON error: {}", e))
    }
}
