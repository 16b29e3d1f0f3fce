//! Answer matching
//!
//! Compares a typed answer against a reference answer. The reference may
//! hold several accepted variants separated by a delimiter (`;` by default),
//! the way deck authors write "car;automobile". Comparison is always
//! case-insensitive and whitespace-trimmed; the reference is never mutated.

use crate::feedback::{FeedbackResult, FeedbackStyle};

/// Default delimiter between accepted variants in a reference answer
pub const VARIANT_DELIMITER: char = ';';

/// Shown in place of the user's answer when they submitted nothing
pub const EMPTY_PLACEHOLDER: &str = "(empty)";

/// How a user answer is matched against the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Exact equality after normalization. Used when the expected answer
    /// is a single English word (RUS -> EN cards).
    Exact,
    /// The reference is split into variants; the answer is correct if it
    /// equals or contains any variant. Used for translations, where "a red
    /// apple" should pass against the variant "apple" (EN -> RUS cards).
    AnyVariant,
    /// Never judges. Shows the user's text next to the reference so they
    /// can compare themselves (free-form example practice).
    DisplayOnly,
}

/// Answer evaluator with configurable variant delimiter and placeholder
#[derive(Debug, Clone)]
pub struct Evaluator {
    delimiter: char,
    placeholder: String,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            delimiter: VARIANT_DELIMITER,
            placeholder: EMPTY_PLACEHOLDER.to_string(),
        }
    }
}

impl Evaluator {
    pub fn new(delimiter: char, placeholder: &str) -> Self {
        Self {
            delimiter,
            placeholder: placeholder.to_string(),
        }
    }

    /// Evaluate a user answer against a reference answer
    ///
    /// Returns `None` only in `DisplayOnly` mode with empty input; every
    /// other call produces a result. Pure: identical inputs give identical
    /// results.
    pub fn evaluate(
        &self,
        user_answer: &str,
        reference_answer: &str,
        mode: MatchMode,
    ) -> Option<FeedbackResult> {
        match mode {
            MatchMode::DisplayOnly => self.display_only(user_answer, reference_answer),
            MatchMode::Exact | MatchMode::AnyVariant => {
                let user = normalize(user_answer);
                let reference = normalize(reference_answer);

                let is_correct = match mode {
                    MatchMode::Exact => user == reference,
                    MatchMode::AnyVariant => self.matches_any_variant(&user, &reference),
                    MatchMode::DisplayOnly => unreachable!(),
                };

                if is_correct {
                    Some(FeedbackResult {
                        is_correct: true,
                        lines: vec![format!("✓ Correct! Your answer: {}", user)],
                        style: FeedbackStyle::Correct,
                    })
                } else {
                    let echo = if user.is_empty() {
                        self.placeholder.as_str()
                    } else {
                        user.as_str()
                    };
                    Some(FeedbackResult {
                        is_correct: false,
                        lines: vec![
                            "✗ Incorrect.".to_string(),
                            format!("Your answer: {}", echo),
                            format!("Correct answer: {}", reference),
                        ],
                        style: FeedbackStyle::Incorrect,
                    })
                }
            }
        }
    }

    /// An answer is correct if it equals any variant or contains one as a
    /// substring. The leniency is deliberate: extended answers like
    /// "a big red apple" pass against the variant "apple".
    fn matches_any_variant(&self, user: &str, reference: &str) -> bool {
        reference
            .split(self.delimiter)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .any(|variant| user == variant || user.contains(variant))
    }

    /// Side-by-side display without judgement. Empty input shows nothing.
    fn display_only(&self, user_answer: &str, reference_answer: &str) -> Option<FeedbackResult> {
        if user_answer.trim().is_empty() {
            return None;
        }
        Some(FeedbackResult {
            is_correct: false,
            lines: vec![
                "Your answer:".to_string(),
                user_answer.to_string(),
                String::new(),
                "Correct answer:".to_string(),
                reference_answer.to_string(),
            ],
            style: FeedbackStyle::Neutral,
        })
    }
}

/// Evaluate with the default delimiter and placeholder
pub fn evaluate(
    user_answer: &str,
    reference_answer: &str,
    mode: MatchMode,
) -> Option<FeedbackResult> {
    Evaluator::default().evaluate(user_answer, reference_answer, mode)
}

/// Trim and lowercase for comparison
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
