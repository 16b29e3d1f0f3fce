//! Deck loading from CSV word lists
//!
//! Expected header: `word,transcription,translation,example_en,example_ru`.
//! Fields are trimmed; word and translation are required, the rest may be
//! empty.

use crate::deck::{Card, Deck};
use crate::{Result, WorddrillError};
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;

/// One CSV row, before validation
#[derive(Debug, Deserialize)]
struct CardRow {
    word: String,
    #[serde(default)]
    transcription: String,
    translation: String,
    #[serde(default)]
    example_en: String,
    #[serde(default)]
    example_ru: String,
}

impl CardRow {
    fn into_card(self, line: usize) -> Result<Card> {
        let card = Card {
            word: self.word.trim().to_string(),
            transcription: self.transcription.trim().to_string(),
            translation: self.translation.trim().to_string(),
            example_en: self.example_en.trim().to_string(),
            example_ru: self.example_ru.trim().to_string(),
        };

        if card.word.is_empty() {
            return Err(WorddrillError::Deck(format!("Row {}: empty word", line)));
        }
        if card.translation.is_empty() {
            return Err(WorddrillError::Deck(format!(
                "Row {}: empty translation for \"{}\"",
                line, card.word
            )));
        }

        Ok(card)
    }
}

/// Load a deck from a CSV file
pub fn load_deck(path: &Path) -> Result<Deck> {
    debug!("Loading deck from {:?}", path);

    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| WorddrillError::Deck(format!("Failed to open {:?}: {}", path, e)))?;

    let mut cards = Vec::new();
    for (i, row) in reader.deserialize::<CardRow>().enumerate() {
        // Header is line 1, first record line 2
        let line = i + 2;
        let row = row.map_err(|e| WorddrillError::Deck(format!("Row {}: {}", line, e)))?;
        cards.push(row.into_card(line)?);
    }

    if cards.is_empty() {
        return Err(WorddrillError::Deck(format!("Deck {:?} has no cards", path)));
    }

    info!("Loaded {} cards from {:?}", cards.len(), path);
    Ok(Deck::new(cards))
}
