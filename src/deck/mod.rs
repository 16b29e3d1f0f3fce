//! Vocabulary decks
//!
//! A deck is an ordered list of cards loaded from a CSV word list. Each
//! card can be practiced in three directions matching the card templates:
//! translate the English word, recall the English word from the
//! translation, or translate the example sentence freely.

pub mod loader;

pub use loader::load_deck;

use crate::answer::MatchMode;
use rand::seq::SliceRandom;

/// One vocabulary card
///
/// Fields mirror the deck note model: Word, Transcription, Translation,
/// ExampleEn, ExampleRu. The translation may hold several accepted
/// variants separated by semicolons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub word: String,
    pub transcription: String,
    pub translation: String,
    pub example_en: String,
    pub example_ru: String,
}

/// Practice direction, one per card template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Show the English word, expect its translation
    EnToRus,
    /// Show the translation, expect the English word
    RusToEn,
    /// Show the Russian example, display the English example for comparison
    Example,
}

impl Direction {
    /// Matching mode this direction is checked with
    pub fn match_mode(&self) -> MatchMode {
        match self {
            Direction::EnToRus => MatchMode::AnyVariant,
            Direction::RusToEn => MatchMode::Exact,
            Direction::Example => MatchMode::DisplayOnly,
        }
    }

    /// What the user is shown for a card
    pub fn prompt<'a>(&self, card: &'a Card) -> &'a str {
        match self {
            Direction::EnToRus => &card.word,
            Direction::RusToEn => &card.translation,
            Direction::Example => &card.example_ru,
        }
    }

    /// The reference answer for a card
    pub fn reference<'a>(&self, card: &'a Card) -> &'a str {
        match self {
            Direction::EnToRus => &card.translation,
            Direction::RusToEn => &card.word,
            Direction::Example => &card.example_en,
        }
    }

    /// English text to pronounce for a card, if any. Recall cards stay
    /// silent so the answer is not given away.
    pub fn spoken_text<'a>(&self, card: &'a Card) -> Option<&'a str> {
        match self {
            Direction::EnToRus => Some(&card.word),
            Direction::RusToEn => None,
            Direction::Example => Some(&card.example_en),
        }
    }
}

/// An ordered collection of cards
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle card order in place
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rand::thread_rng());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card {
            word: "apple".to_string(),
            transcription: "[ˈæpl]".to_string(),
            translation: "яблоко".to_string(),
            example_en: "I ate an apple.".to_string(),
            example_ru: "Я съел яблоко.".to_string(),
        }
    }

    #[test]
    fn test_direction_prompt_and_reference() {
        let c = card();
        assert_eq!(Direction::EnToRus.prompt(&c), "apple");
        assert_eq!(Direction::EnToRus.reference(&c), "яблоко");
        assert_eq!(Direction::RusToEn.prompt(&c), "яблоко");
        assert_eq!(Direction::RusToEn.reference(&c), "apple");
        assert_eq!(Direction::Example.prompt(&c), "Я съел яблоко.");
        assert_eq!(Direction::Example.reference(&c), "I ate an apple.");
    }

    #[test]
    fn test_direction_modes() {
        assert_eq!(Direction::EnToRus.match_mode(), MatchMode::AnyVariant);
        assert_eq!(Direction::RusToEn.match_mode(), MatchMode::Exact);
        assert_eq!(Direction::Example.match_mode(), MatchMode::DisplayOnly);
    }

    #[test]
    fn test_spoken_text_only_for_english_prompts() {
        let c = card();
        assert_eq!(Direction::EnToRus.spoken_text(&c), Some("apple"));
        assert_eq!(Direction::RusToEn.spoken_text(&c), None);
        assert_eq!(Direction::Example.spoken_text(&c), Some("I ate an apple."));
    }

    #[test]
    fn test_shuffle_keeps_all_cards() {
        let mut cards = Vec::new();
        for i in 0..20 {
            let mut c = card();
            c.word = format!("word{}", i);
            cards.push(c);
        }
        let mut deck = Deck::new(cards.clone());
        deck.shuffle();

        assert_eq!(deck.len(), 20);
        for c in &cards {
            assert!(deck.cards().contains(c));
        }
    }
}
