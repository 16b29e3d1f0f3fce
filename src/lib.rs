//! worddrill - terminal vocabulary flashcard trainer
//!
//! Loads decks of English vocabulary cards, checks typed answers against
//! reference translations, and pronounces English words with text-to-speech.

pub mod answer;
pub mod deck;
pub mod drafts;
pub mod error;
pub mod feedback;
pub mod speech;
pub mod state;

pub use error::{Result, WorddrillError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "worddrill";
