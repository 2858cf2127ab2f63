//! Local player settings: display name and scoreboard credentials.
//!
//! Stored as a small JSON file. A missing or unreadable file behaves like
//! an empty one.

use crate::error::Result;
use crate::serialization::{read_json_file, write_json_file};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const MAX_PLAYER_NAME_CHARS: usize = 24;
pub const ANONYMOUS: &str = "Anonymous";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub player_name: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Settings {
    /// Trims every field and caps the player name length.
    #[must_use]
    pub fn cleaned(&self) -> Self {
        Self {
            player_name: self
                .player_name
                .trim()
                .chars()
                .take(MAX_PLAYER_NAME_CHARS)
                .collect(),
            supabase_url: self.supabase_url.trim().to_string(),
            supabase_anon_key: self.supabase_anon_key.trim().to_string(),
        }
    }

    /// The scoreboard is enabled only when both URL and key are present.
    pub fn is_configured(&self) -> bool {
        !self.supabase_url.trim().is_empty() && !self.supabase_anon_key.trim().is_empty()
    }

    pub fn display_name(&self) -> &str {
        let name = self.player_name.trim();
        if name.is_empty() {
            ANONYMOUS
        } else {
            name
        }
    }

    /// Loads settings, falling back to defaults on any problem.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match read_json_file::<Self, _>(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed settings");
                Self::default()
            }
        }
    }

    /// Cleans and writes the settings, returning what was stored.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<Self> {
        let cleaned = self.cleaned();
        write_json_file(path, &cleaned)?;
        Ok(cleaned)
    }

    /// Removes the settings file. A missing file is not an error.
    pub fn clear(path: impl AsRef<Path>) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
