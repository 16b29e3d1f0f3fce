//! Answer evaluation
//!
//! Pure matching logic plus the checker entry points that wire results
//! into feedback surfaces and the draft store.

pub mod checker;
pub mod evaluator;

pub use checker::{check_translation, check_with, check_word, display_example};
pub use evaluator::{evaluate, Evaluator, MatchMode};
