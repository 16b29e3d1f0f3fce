//! Practice session state

pub mod config;

pub use config::Config;

use crate::deck::{Card, Deck, Direction};
use crate::feedback::{FeedbackResult, FeedbackStyle};

/// One pass through a deck in a fixed direction
///
/// Tracks the current card and the running score. Judged answers tally as
/// correct or incorrect; neutral example displays are counted separately.
pub struct Session {
    deck: Deck,
    direction: Direction,
    index: usize,
    correct: usize,
    incorrect: usize,
    displayed: usize,
}

impl Session {
    pub fn new(deck: Deck, direction: Direction) -> Self {
        Self {
            deck,
            direction,
            index: 0,
            correct: 0,
            incorrect: 0,
            displayed: 0,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Card currently being practiced, if any remain
    pub fn current(&self) -> Option<&Card> {
        self.deck.cards().get(self.index)
    }

    /// 1-based position for display ("card 3 of 20")
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.deck.len())
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.deck.len()
    }

    /// Move to the next card
    pub fn advance(&mut self) {
        if !self.is_finished() {
            self.index += 1;
        }
    }

    /// Stable draft key for the current card and direction
    ///
    /// Opaque to the draft store; derived from the card so a half-typed
    /// answer is found again on the same card.
    pub fn draft_key(&self) -> Option<String> {
        let tag = match self.direction {
            Direction::EnToRus => "en",
            Direction::RusToEn => "ru",
            Direction::Example => "ex",
        };
        self.current()
            .map(|card| format!("draft_{}_{}", tag, card.word))
    }

    /// Tally a presented result
    pub fn record(&mut self, result: &FeedbackResult) {
        match result.style {
            FeedbackStyle::Correct => self.correct += 1,
            FeedbackStyle::Incorrect => self.incorrect += 1,
            FeedbackStyle::Neutral => self.displayed += 1,
        }
    }

    pub fn score(&self) -> (usize, usize) {
        (self.correct, self.incorrect)
    }

    /// Summary line for the end of a session
    pub fn summary(&self) -> String {
        let judged = self.correct + self.incorrect;
        if judged > 0 {
            format!(
                "Done: {} of {} correct ({} cards seen)",
                self.correct,
                judged,
                self.deck.len()
            )
        } else {
            format!("Done: {} examples reviewed", self.displayed)
        }
    }
}
