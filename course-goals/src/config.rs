//! Application configuration
//!
//! Everything the binary needs to start: window title and size, plus the
//! seed goals the list opens with. Loaded from an optional `goals.json`
//! next to the executable; anything missing or malformed falls back to
//! the built-in defaults with a note on the log.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::goal::Goal;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub seed: Vec<SeedGoal>,
}

/// A goal record as it appears in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedGoal {
    pub id: String,
    pub text: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Course Goals".to_string(),
            width: 480,
            height: 640,
            seed: vec![
                SeedGoal {
                    id: "cg1".into(),
                    text: "Finish the Course".into(),
                },
                SeedGoal {
                    id: "cg2".into(),
                    text: "Learn all about the Course Main Topic".into(),
                },
                SeedGoal {
                    id: "cg3".into(),
                    text: "Help other students in the Course Q&A".into(),
                },
            ],
        }
    }
}

impl AppConfig {
    /// Read the config file at `path`, falling back to defaults if the
    /// file is absent or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "config loaded");
                    config
                }
                Err(err) => {
                    tracing::warn!(%err, path = %path.display(), "config did not parse, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
        }
    }

    /// The seed entries as real goal records.
    pub fn seed_goals(&self) -> Vec<Goal> {
        self.seed
            .iter()
            .map(|entry| Goal::with_id(entry.id.as_str(), entry.text.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_the_three_seed_goals() {
        let config = AppConfig::default();
        assert_eq!(config.title, "Course Goals");
        let goals = config.seed_goals();
        assert_eq!(goals.len(), 3);
        assert_eq!(goals[0].id.as_str(), "cg1");
        assert_eq!(goals[2].text, "Help other students in the Course Q&A");
    }

    #[test]
    fn test_parse_config() {
        let raw = r#"{
            "title": "My Goals",
            "width": 320,
            "height": 480,
            "seed": [{"id": "g1", "text": "Water the plants"}]
        }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.title, "My Goals");
        assert_eq!((config.width, config.height), (320, 480));
        assert_eq!(config.seed_goals()[0].text, "Water the plants");
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"title": "Just a title"}"#).unwrap();
        assert_eq!(config.title, "Just a title");
        assert_eq!(config.width, 480);
        assert_eq!(config.seed.len(), 3);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = AppConfig::load("definitely/not/here.json");
        assert_eq!(config.title, AppConfig::default().title);
    }
}
