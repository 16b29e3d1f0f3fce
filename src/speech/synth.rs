//! Speech synthesizer abstraction
//!
//! Wraps the platform TTS engine (Speech Dispatcher on Linux, AVFoundation
//! on macOS, SAPI on Windows, all via the `tts` crate) behind a small trait
//! so the announcer and the tests do not depend on a real audio stack.

use crate::speech::voice::VoiceSpec;
use crate::{Result, WorddrillError};
use log::{debug, warn};
use tts::Tts as TtsCrate;

/// Speech synthesizer trait
///
/// Playback is fire-and-forget: `speak` hands the text to the platform and
/// returns immediately, with no completion callback.
pub trait Synth: Send {
    /// Voices currently available, in platform order
    fn voices(&self) -> Result<Vec<VoiceSpec>>;

    /// Select a voice by platform id
    fn set_voice(&mut self, id: &str) -> Result<()>;

    /// Scale the speaking rate relative to the platform's normal rate
    /// (1.0 = normal, 0.8 = slightly slow)
    fn set_rate_scale(&mut self, scale: f32) -> Result<()>;

    /// Speak text without interrupting queued speech
    fn speak(&mut self, text: &str) -> Result<()>;

    /// Stop current speech
    fn cancel(&mut self) -> Result<()>;
}

/// Synthesizer backed by the `tts` crate
pub struct NativeSynth {
    tts: TtsCrate,
}

impl NativeSynth {
    pub fn new() -> Result<Self> {
        debug!("Initializing native TTS backend");
        let tts = TtsCrate::default()
            .map_err(|e| WorddrillError::Speech(format!("Failed to initialize TTS: {}", e)))?;
        Ok(Self { tts })
    }
}

impl Synth for NativeSynth {
    fn voices(&self) -> Result<Vec<VoiceSpec>> {
        let voices = self
            .tts
            .voices()
            .map_err(|e| WorddrillError::Speech(format!("Failed to list voices: {}", e)))?;

        Ok(voices
            .iter()
            .map(|v| VoiceSpec {
                id: v.id(),
                name: v.name(),
                language: v.language().to_string(),
            })
            .collect())
    }

    fn set_voice(&mut self, id: &str) -> Result<()> {
        let voices = self
            .tts
            .voices()
            .map_err(|e| WorddrillError::Speech(format!("Failed to list voices: {}", e)))?;

        match voices.iter().find(|v| v.id() == id) {
            Some(voice) => {
                debug!("Selecting voice {} ({})", voice.name(), voice.id());
                self.tts
                    .set_voice(voice)
                    .map_err(|e| WorddrillError::Speech(format!("Failed to set voice: {}", e)))
            }
            None => {
                warn!("Voice id {} no longer available", id);
                Ok(())
            }
        }
    }

    fn set_rate_scale(&mut self, scale: f32) -> Result<()> {
        if !self.tts.supported_features().rate {
            warn!("Rate control not supported on this platform");
            return Ok(());
        }

        let rate = (self.tts.normal_rate() * scale)
            .clamp(self.tts.min_rate(), self.tts.max_rate());
        debug!("Setting rate to {} ({}x normal)", rate, scale);
        self.tts
            .set_rate(rate)
            .map_err(|e| WorddrillError::Speech(format!("Failed to set rate: {}", e)))?;

        Ok(())
    }

    fn speak(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        debug!("Speaking: {}", text);
        self.tts
            .speak(text, false)
            .map(|_| ())
            .map_err(|e| WorddrillError::Speech(format!("Speak failed: {}", e)))
    }

    fn cancel(&mut self) -> Result<()> {
        debug!("Canceling speech");
        self.tts
            .stop()
            .map(|_| ())
            .map_err(|e| WorddrillError::Speech(format!("Cancel failed: {}", e)))
    }
}

/// Create the platform speech synthesizer
pub fn create_synth() -> Result<Box<dyn Synth>> {
    let synth = NativeSynth::new()?;
    debug!("Native TTS backend ready");
    Ok(Box::new(synth))
}
