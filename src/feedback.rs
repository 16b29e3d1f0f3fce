//! Feedback presentation surfaces
//!
//! The evaluator never writes to the terminal directly. It produces a
//! `FeedbackResult` which is presented into an addressable `FeedbackRegion`,
//! looked up by string id in a `SurfaceMap`. This keeps the answer logic
//! pure and lets tests observe exactly what would have been shown.

use std::collections::HashMap;

/// Style classification for a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStyle {
    /// Answer matched the reference
    Correct,
    /// Answer did not match
    Incorrect,
    /// No judgement, informational display only
    Neutral,
}

impl FeedbackStyle {
    /// Stable class name, used by surfaces that style by name
    pub fn class_name(&self) -> &'static str {
        match self {
            FeedbackStyle::Correct => "correct",
            FeedbackStyle::Incorrect => "incorrect",
            FeedbackStyle::Neutral => "neutral",
        }
    }
}

/// Outcome of one answer evaluation
///
/// Produced by the evaluator, consumed immediately by a `FeedbackRegion`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackResult {
    /// Whether the answer was judged correct (always false for Neutral)
    pub is_correct: bool,
    /// Message lines to display
    pub lines: Vec<String>,
    /// Style classification for the surface
    pub style: FeedbackStyle,
}

impl FeedbackResult {
    /// Message as a single newline-joined string
    pub fn display_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// An addressable region that can show one feedback message
///
/// Implementations decide how a message and its style become visible
/// (terminal lines, a test buffer, ...).
pub trait FeedbackRegion {
    /// Show the result, replacing any previous message
    fn present(&mut self, result: &FeedbackResult);
}

/// Registry of feedback regions addressable by id
///
/// Held explicitly and passed to the checker instead of being reached
/// through ambient global state, so the answer logic stays testable.
#[derive(Default)]
pub struct SurfaceMap {
    regions: HashMap<String, Box<dyn FeedbackRegion>>,
}

impl SurfaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region under an id, replacing any previous one
    pub fn register(&mut self, id: &str, region: Box<dyn FeedbackRegion>) {
        self.regions.insert(id.to_string(), region);
    }

    /// Look up a region by id
    pub fn region_mut(&mut self, id: &str) -> Option<&mut (dyn FeedbackRegion + 'static)> {
        self.regions.get_mut(id).map(|r| r.as_mut())
    }
}

/// Region that remembers what was presented, for tests and summaries
#[derive(Default)]
pub struct RecordingRegion {
    /// All results presented, in order
    pub presented: Vec<FeedbackResult>,
}

impl RecordingRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently presented result, if any
    pub fn last(&self) -> Option<&FeedbackResult> {
        self.presented.last()
    }
}

impl FeedbackRegion for RecordingRegion {
    fn present(&mut self, result: &FeedbackResult) {
        self.presented.push(result.clone());
    }
}
