//! Configuration management

use crate::answer::Evaluator;
use crate::{Result, WorddrillError};
use ini::Ini;
use log::{debug, info};
use std::path::PathBuf;

/// Application configuration for the trainer
///
/// Persistent settings for speech output, answer matching, and deck
/// handling, stored as an INI file.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.worddrill.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from the default location or create it
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from an explicit path, creating defaults if the
    /// file does not exist
    pub fn load_from(path: PathBuf) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| WorddrillError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| WorddrillError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| WorddrillError::Config(format!("Failed to save config: {}", e)))
    }

    /// Default config file path (~/.worddrill.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".worddrill.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create default configuration
    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("speech"))
            .set("enabled", "true")
            .set("language", "en-US")
            .set("rate_scale", "0.8");

        ini.with_section(Some("answer"))
            .set("variant_delimiter", ";")
            .set("empty_placeholder", "(empty)");

        ini.with_section(Some("deck")).set("shuffle", "false");

        ini
    }

    /// Get a boolean value from config
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get a float value from config
    pub fn get_float(&self, section: &str, key: &str, default: f32) -> f32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    // Trainer-specific configuration getters

    /// Should words be pronounced during practice?
    pub fn speech_enabled(&self) -> bool {
        self.get_bool("speech", "enabled", true)
    }

    /// Language tag for voice selection
    pub fn speech_language(&self) -> String {
        self.get_string("speech", "language", "en-US")
    }

    /// Speaking rate relative to normal (0.8 = slightly slow)
    pub fn rate_scale(&self) -> f32 {
        self.get_float("speech", "rate_scale", 0.8)
    }

    /// Delimiter between accepted answer variants
    pub fn variant_delimiter(&self) -> char {
        self.get_string("answer", "variant_delimiter", ";")
            .chars()
            .next()
            .unwrap_or(';')
    }

    /// Text shown in place of an empty submitted answer
    pub fn empty_placeholder(&self) -> String {
        self.get_string("answer", "empty_placeholder", "(empty)")
    }

    /// Should decks be shuffled before practice?
    pub fn shuffle(&self) -> bool {
        self.get_bool("deck", "shuffle", false)
    }

    /// Build an answer evaluator from the configured settings
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.variant_delimiter(), &self.empty_placeholder())
    }
}
