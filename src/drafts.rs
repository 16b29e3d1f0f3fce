//! Draft answer storage
//!
//! Partially typed answers are saved under opaque string keys so they
//! survive leaving a card and coming back. Once an answer is submitted and
//! checked, its draft is cleared. `FileDraftStore` persists drafts as a
//! JSON map in the user's home directory.

use crate::{Result, WorddrillError};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value store for unsubmitted answers
pub trait DraftStore {
    /// Save or overwrite a draft
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// Look up a draft
    fn load(&self, key: &str) -> Option<String>;

    /// Delete a draft by key. Deleting an absent key is a no-op.
    fn clear(&mut self, key: &str) -> Result<()>;
}

/// On-disk serialization of the draft map
#[derive(Debug, Default, Serialize, Deserialize)]
struct DraftFile {
    drafts: HashMap<String, String>,
}

/// Draft store backed by a JSON file (~/.worddrill_drafts.json)
pub struct FileDraftStore {
    path: PathBuf,
    drafts: HashMap<String, String>,
}

impl FileDraftStore {
    /// Open the store at the default location
    pub fn open() -> Result<Self> {
        Self::open_at(default_path())
    }

    /// Open the store at an explicit path
    ///
    /// A missing file starts an empty store; a corrupt file is dropped with
    /// a warning rather than aborting the session.
    pub fn open_at(path: PathBuf) -> Result<Self> {
        debug!("Opening draft store at {:?}", path);

        let drafts = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<DraftFile>(&contents) {
                Ok(file) => file.drafts,
                Err(e) => {
                    warn!("Draft file {:?} is corrupt, starting empty: {}", path, e);
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Ok(Self { path, drafts })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of stored drafts
    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    fn write_out(&self) -> Result<()> {
        let file = DraftFile {
            drafts: self.drafts.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, json).map_err(|e| {
            WorddrillError::Drafts(format!("Failed to write {:?}: {}", self.path, e))
        })
    }
}

impl DraftStore for FileDraftStore {
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.drafts.insert(key.to_string(), value.to_string());
        self.write_out()
    }

    fn load(&self, key: &str) -> Option<String> {
        self.drafts.get(key).cloned()
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        if self.drafts.remove(key).is_some() {
            debug!("Cleared draft {}", key);
            self.write_out()?;
        }
        Ok(())
    }
}

/// In-memory store, used by tests and as a fallback when the home
/// directory cannot be resolved
#[derive(Default)]
pub struct MemoryDraftStore {
    drafts: HashMap<String, String>,
    /// Keys passed to `clear`, in call order (including absent keys)
    pub cleared: Vec<String>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.drafts.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Option<String> {
        self.drafts.get(key).cloned()
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.cleared.push(key.to_string());
        self.drafts.remove(key);
        Ok(())
    }
}

/// Default draft file path (~/.worddrill_drafts.json)
fn default_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".worddrill_drafts.json")
}
