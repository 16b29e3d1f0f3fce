//! Voice selection
//!
//! Decks hold American English vocabulary, so pronunciation prefers a
//! known-good en-US voice. Platforms expose wildly different voice names;
//! the preference list covers the common desktop voices and falls back to
//! any en-US voice before giving up and letting the platform default speak.

use once_cell::sync::Lazy;

/// A voice as reported by the speech platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSpec {
    /// Platform identifier, used to select the voice
    pub id: String,
    /// Human-readable name, e.g. "Microsoft Zira"
    pub name: String,
    /// BCP 47 language tag, e.g. "en-US"
    pub language: String,
}

/// Ordered matching rules for picking a voice
///
/// A voice matches when its language tag equals `language` and its name
/// contains every substring of at least one marker group. Re-evaluated
/// against the live voice set on each announcement, since voices can
/// appear or disappear between calls.
#[derive(Debug, Clone)]
pub struct VoicePreference {
    pub language: String,
    /// Marker groups; each inner list is a set of substrings that must all
    /// appear in the voice name
    pub name_markers: Vec<Vec<&'static str>>,
}

impl VoicePreference {
    /// Does this voice satisfy the language and any marker group?
    pub fn matches(&self, voice: &VoiceSpec) -> bool {
        self.matches_language(voice)
            && self
                .name_markers
                .iter()
                .any(|group| group.iter().all(|m| voice.name.contains(m)))
    }

    fn matches_language(&self, voice: &VoiceSpec) -> bool {
        voice.language.eq_ignore_ascii_case(&self.language)
    }
}

/// Default preference: well-known American English desktop voices
pub static AMERICAN_ENGLISH: Lazy<VoicePreference> = Lazy::new(|| VoicePreference {
    language: "en-US".to_string(),
    name_markers: vec![
        vec!["Google US English"],
        vec!["Microsoft David"],
        vec!["Microsoft Mark"],
        vec!["Microsoft Zira"],
        vec!["Alex"],
        vec!["Samantha"],
        vec!["American"],
        vec!["English", "United States"],
    ],
});

/// Pick a voice from the platform's set
///
/// First voice (in platform order) matching the preference wins; if none
/// match by name, the first voice with the right language; if none at all,
/// `None` and the caller keeps the platform default.
pub fn select_voice<'a>(voices: &'a [VoiceSpec], preference: &VoicePreference) -> Option<&'a VoiceSpec> {
    voices
        .iter()
        .find(|v| preference.matches(v))
        .or_else(|| voices.iter().find(|v| preference.matches_language(v)))
}
