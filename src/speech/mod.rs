//! Speech output for word pronunciation

pub mod announcer;
pub mod synth;
pub mod voice;

pub use announcer::{Announcer, DEFAULT_RATE_SCALE};
pub use synth::{create_synth, Synth};
pub use voice::{select_voice, VoicePreference, VoiceSpec, AMERICAN_ENGLISH};
