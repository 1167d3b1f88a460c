use std::path::Path;

use anyhow::{Context as _, Result};
use serde::Deserialize;

pub const DEFAULT_DURATION_SECS: u32 = 300;

pub const SWIFT_RESERVED_WORDS: &[&str] = &[
    "self",
    "typealias",
    "guard",
    "protocol",
    "let",
    "optional",
    "mutating",
    "enum",
    "lazy",
    "fileprivate",
    "extension",
    "dynamic",
];

/// Settings for one session
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub duration_secs: u32,
    pub words: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            words: SWIFT_RESERVED_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("malformed game config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Apply command-line overrides on top of this config
    pub fn with_overrides(mut self, duration_secs: Option<u32>, words: Option<Vec<String>>) -> Self {
        if let Some(secs) = duration_secs {
            self.duration_secs = secs;
        }
        if let Some(words) = words {
            self.words = words;
        }
        self
    }
}
