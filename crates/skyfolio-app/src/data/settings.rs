//! Application settings
//!
//! API access preferences, stored as pretty JSON next to the favorites.

use crate::data::storage;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use skyfolio::config::api::{DEFAULT_COUNT, DEFAULT_ENDPOINT, DEMO_API_KEY};
use std::path::Path;

/// Settings file format version for migrations
const SETTINGS_VERSION: u32 = 1;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// APOD API key
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Records requested per batch
    #[serde(default = "default_count")]
    pub count: usize,

    /// APOD endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_api_key() -> String {
    DEMO_API_KEY.to_string()
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            api_key: default_api_key(),
            count: default_count(),
            endpoint: default_endpoint(),
        }
    }
}

impl Settings {
    /// Load settings from a specific path, defaults if the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(storage::load_from::<Settings>(path)?.unwrap_or_default())
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_to(path, self)
    }

    /// Whether the public demo key is in use
    pub fn uses_demo_key(&self) -> bool {
        self.api_key == DEMO_API_KEY
    }
}
