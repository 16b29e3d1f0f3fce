//! Checker entry points
//!
//! One function per card template, mirroring the practice flows: checking
//! a translation (EN -> RUS), checking the English word (RUS -> EN), and
//! showing an example answer without judging it. Each presents its result
//! into a feedback region looked up by id and then clears the draft for
//! the submitted answer.

use crate::answer::evaluator::{Evaluator, MatchMode};
use crate::drafts::DraftStore;
use crate::feedback::{FeedbackResult, SurfaceMap};
use crate::Result;
use log::{debug, error};

/// Check a translation answer; several accepted variants may be separated
/// by the delimiter, and extended answers match by substring
pub fn check_translation(
    surfaces: &mut SurfaceMap,
    drafts: &mut dyn DraftStore,
    feedback_id: &str,
    draft_key: &str,
    user_answer: &str,
    reference_answer: &str,
) -> Result<Option<FeedbackResult>> {
    check_with(
        &Evaluator::default(),
        MatchMode::AnyVariant,
        surfaces,
        drafts,
        feedback_id,
        draft_key,
        user_answer,
        reference_answer,
    )
}

/// Check an English word answer; exact match only
pub fn check_word(
    surfaces: &mut SurfaceMap,
    drafts: &mut dyn DraftStore,
    feedback_id: &str,
    draft_key: &str,
    user_answer: &str,
    reference_answer: &str,
) -> Result<Option<FeedbackResult>> {
    check_with(
        &Evaluator::default(),
        MatchMode::Exact,
        surfaces,
        drafts,
        feedback_id,
        draft_key,
        user_answer,
        reference_answer,
    )
}

/// Show the user's free-form answer next to the reference, without judging
pub fn display_example(
    surfaces: &mut SurfaceMap,
    drafts: &mut dyn DraftStore,
    feedback_id: &str,
    draft_key: &str,
    user_answer: &str,
    reference_answer: &str,
) -> Result<Option<FeedbackResult>> {
    check_with(
        &Evaluator::default(),
        MatchMode::DisplayOnly,
        surfaces,
        drafts,
        feedback_id,
        draft_key,
        user_answer,
        reference_answer,
    )
}

/// Evaluate and present with an explicit evaluator and mode
///
/// If the feedback region is missing the call logs a diagnostic and aborts
/// with no effect at all - nothing presented, no draft cleared, no error
/// returned to the caller. Otherwise the result (if any) is presented and
/// exactly one draft-clear is issued for `draft_key`, whatever the verdict.
#[allow(clippy::too_many_arguments)]
pub fn check_with(
    evaluator: &Evaluator,
    mode: MatchMode,
    surfaces: &mut SurfaceMap,
    drafts: &mut dyn DraftStore,
    feedback_id: &str,
    draft_key: &str,
    user_answer: &str,
    reference_answer: &str,
) -> Result<Option<FeedbackResult>> {
    let Some(region) = surfaces.region_mut(feedback_id) else {
        error!("Feedback region \"{}\" not found", feedback_id);
        return Ok(None);
    };

    let result = evaluator.evaluate(user_answer, reference_answer, mode);
    if let Some(ref result) = result {
        debug!(
            "Presenting {:?} feedback into \"{}\"",
            result.style, feedback_id
        );
        region.present(result);
    }

    drafts.clear(draft_key)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::MemoryDraftStore;
    use crate::feedback::{FeedbackStyle, RecordingRegion, SurfaceMap};

    fn surfaces_with(id: &str) -> SurfaceMap {
        let mut map = SurfaceMap::new();
        map.register(id, Box::new(RecordingRegion::new()));
        map
    }

    #[test]
    fn test_check_translation_presents_and_clears() {
        let mut surfaces = surfaces_with("fb");
        let mut drafts = MemoryDraftStore::new();
        drafts.save("key1", "appl").unwrap();

        let result = check_translation(
            &mut surfaces, &mut drafts, "fb", "key1", "a big red apple", "apple",
        )
        .unwrap()
        .unwrap();

        assert!(result.is_correct);
        assert_eq!(drafts.cleared, vec!["key1"]);
        assert!(drafts.load("key1").is_none());
    }

    #[test]
    fn test_missing_region_aborts_without_effect() {
        let mut surfaces = SurfaceMap::new();
        let mut drafts = MemoryDraftStore::new();
        drafts.save("key1", "draft").unwrap();

        let result =
            check_word(&mut surfaces, &mut drafts, "absent", "key1", "apple", "apple").unwrap();

        assert!(result.is_none());
        // Aborted lookup must not clear the draft
        assert!(drafts.cleared.is_empty());
        assert_eq!(drafts.load("key1").as_deref(), Some("draft"));
    }

    #[test]
    fn test_incorrect_answer_still_clears_draft() {
        let mut surfaces = surfaces_with("fb");
        let mut drafts = MemoryDraftStore::new();

        let result =
            check_word(&mut surfaces, &mut drafts, "fb", "key2", "banana", "apple")
                .unwrap()
                .unwrap();

        assert!(!result.is_correct);
        assert_eq!(drafts.cleared, vec!["key2"]);
    }

    #[test]
    fn test_display_example_empty_input_presents_nothing_but_clears() {
        let mut surfaces = surfaces_with("fb");
        let mut drafts = MemoryDraftStore::new();

        let result =
            display_example(&mut surfaces, &mut drafts, "fb", "key3", "  ", "The cat sat.")
                .unwrap();

        assert!(result.is_none());
        assert_eq!(drafts.cleared, vec!["key3"]);
    }

    #[test]
    fn test_display_example_neutral_presentation() {
        let mut surfaces = surfaces_with("fb");
        let mut drafts = MemoryDraftStore::new();

        let result = display_example(
            &mut surfaces, &mut drafts, "fb", "key4", "The cat sits.", "The cat sat.",
        )
        .unwrap()
        .unwrap();

        assert_eq!(result.style, FeedbackStyle::Neutral);
    }

    #[test]
    fn test_exactly_one_clear_per_check() {
        let mut surfaces = surfaces_with("fb");
        let mut drafts = MemoryDraftStore::new();

        check_word(&mut surfaces, &mut drafts, "fb", "k", "apple", "apple").unwrap();
        check_word(&mut surfaces, &mut drafts, "fb", "k", "wrong", "apple").unwrap();

        assert_eq!(drafts.cleared, vec!["k", "k"]);
    }
}
