//! Local persistence configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_data_dir() -> String {
    ".waqf/data".into()
}

const fn default_trail_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding the JSONL trail.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Whether mutations are appended to the trail. Disabled stores are
    /// memory-only.
    #[serde(default = "default_trail_enabled")]
    pub trail_enabled: bool,

    /// Check replayed `Create` payloads against their schema on open.
    #[serde(default)]
    pub validate_on_replay: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            trail_enabled: default_trail_enabled(),
            validate_on_replay: false,
        }
    }
}

impl StoreConfig {
    /// Directory of the per-entity trail files.
    #[must_use]
    pub fn trail_dir(&self) -> PathBuf {
        PathBuf::from(&self.data_dir).join("trail")
    }
}
