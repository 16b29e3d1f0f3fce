//! Word pronunciation
//!
//! Speaks English words and example sentences during practice. Slightly
//! slower than normal speech so learners catch the pronunciation.

use crate::speech::synth::{create_synth, Synth};
use crate::speech::voice::{select_voice, VoicePreference, AMERICAN_ENGLISH};
use crate::Result;
use log::{debug, warn};

/// Speaking rate relative to the platform's normal rate
pub const DEFAULT_RATE_SCALE: f32 = 0.8;

/// Fire-and-forget speech announcer
///
/// Each announcement re-resolves the preferred voice against the live
/// voice set; voices come and go as speech engines start and stop.
pub struct Announcer {
    synth: Box<dyn Synth>,
    preference: VoicePreference,
    rate_scale: f32,
}

impl Announcer {
    pub fn new(synth: Box<dyn Synth>, preference: VoicePreference, rate_scale: f32) -> Self {
        Self {
            synth,
            preference,
            rate_scale,
        }
    }

    /// Announcer with the platform synthesizer and the American English
    /// voice preference
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(
            create_synth()?,
            AMERICAN_ENGLISH.clone(),
            DEFAULT_RATE_SCALE,
        ))
    }

    /// Speak `text` and return immediately
    ///
    /// Voice and rate degradation is tolerated: if no preferred voice is
    /// available the platform default speaks, and a voice that vanished
    /// between listing and selection is skipped with a warning.
    pub fn announce(&mut self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Ok(());
        }

        match self.synth.voices() {
            Ok(voices) => match select_voice(&voices, &self.preference) {
                Some(voice) => {
                    debug!("Announcing with voice {}", voice.name);
                    if let Err(e) = self.synth.set_voice(&voice.id) {
                        warn!("Failed to select voice {}: {}", voice.name, e);
                    }
                }
                None => debug!(
                    "No {} voice available, using platform default",
                    self.preference.language
                ),
            },
            Err(e) => debug!("Could not list voices: {}", e),
        }

        if let Err(e) = self.synth.set_rate_scale(self.rate_scale) {
            warn!("Failed to set speaking rate: {}", e);
        }

        self.synth.speak(text)
    }

    /// Stop any speech in progress
    pub fn silence(&mut self) -> Result<()> {
        self.synth.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::voice::VoiceSpec;
    use std::sync::{Arc, Mutex};

    /// Records every synth call instead of producing audio
    #[derive(Default)]
    struct FakeSynth {
        voices: Vec<VoiceSpec>,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Synth for FakeSynth {
        fn voices(&self) -> Result<Vec<VoiceSpec>> {
            Ok(self.voices.clone())
        }

        fn set_voice(&mut self, id: &str) -> Result<()> {
            self.log.lock().unwrap().push(format!("voice:{}", id));
            Ok(())
        }

        fn set_rate_scale(&mut self, scale: f32) -> Result<()> {
            self.log.lock().unwrap().push(format!("rate:{}", scale));
            Ok(())
        }

        fn speak(&mut self, text: &str) -> Result<()> {
            self.log.lock().unwrap().push(format!("speak:{}", text));
            Ok(())
        }

        fn cancel(&mut self) -> Result<()> {
            self.log.lock().unwrap().push("cancel".to_string());
            Ok(())
        }
    }

    fn en_us(id: &str, name: &str) -> VoiceSpec {
        VoiceSpec {
            id: id.to_string(),
            name: name.to_string(),
            language: "en-US".to_string(),
        }
    }

    fn announcer_with(voices: Vec<VoiceSpec>) -> (Announcer, Arc<Mutex<Vec<String>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let synth = FakeSynth {
            voices,
            log: log.clone(),
        };
        (
            Announcer::new(Box::new(synth), AMERICAN_ENGLISH.clone(), DEFAULT_RATE_SCALE),
            log,
        )
    }

    #[test]
    fn test_announce_selects_voice_rate_then_speaks() {
        let (mut announcer, log) = announcer_with(vec![en_us("v1", "Samantha")]);
        announcer.announce("apple").unwrap();

        let calls = log.lock().unwrap().clone();
        assert_eq!(calls, vec!["voice:v1", "rate:0.8", "speak:apple"]);
    }

    #[test]
    fn test_announce_without_matching_voice_uses_default() {
        let (mut announcer, log) = announcer_with(vec![]);
        announcer.announce("apple").unwrap();

        let calls = log.lock().unwrap().clone();
        // No voice selection call, playback still happens
        assert_eq!(calls, vec!["rate:0.8", "speak:apple"]);
    }

    #[test]
    fn test_announce_empty_text_is_silent() {
        let (mut announcer, log) = announcer_with(vec![en_us("v1", "Alex")]);
        announcer.announce("   ").unwrap();
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_repeated_announcements_pick_same_voice() {
        let (mut announcer, log) = announcer_with(vec![
            en_us("v1", "Microsoft David"),
            en_us("v2", "Microsoft Zira"),
        ]);
        announcer.announce("apple").unwrap();
        announcer.announce("apple").unwrap();

        let calls = log.lock().unwrap().clone();
        let voice_calls: Vec<_> = calls.iter().filter(|c| c.starts_with("voice:")).collect();
        assert_eq!(voice_calls, vec!["voice:v1", "voice:v1"]);
    }

    #[test]
    fn test_silence_cancels() {
        let (mut announcer, log) = announcer_with(vec![]);
        announcer.silence().unwrap();
        assert_eq!(log.lock().unwrap().clone(), vec!["cancel"]);
    }
}
