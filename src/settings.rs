//! User settings stored as settings.json in the app data directory

use crate::constants::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
use crate::types::ResultCount;
use crate::utils::default_export_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Backend
    pub backend_url: String,

    // Last search
    pub last_query: String,
    pub result_count: ResultCount,

    // Paths
    pub export_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            last_query: String::new(),
            result_count: ResultCount::default(),
            export_dir: None,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Backend URL with the environment override applied
    pub fn effective_backend_url(&self) -> String {
        resolve_backend_url(std::env::var(BACKEND_URL_ENV).ok(), &self.backend_url)
    }

    pub fn export_dir_or_default(&self) -> PathBuf {
        self.export_dir
            .as_ref()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_export_dir)
    }
}

fn resolve_backend_url(env_override: Option<String>, stored: &str) -> String {
    env_override
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| {
            if stored.trim().is_empty() {
                DEFAULT_BACKEND_URL.to_string()
            } else {
                stored.trim().to_string()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sov-settings-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        let settings = Settings::load(&dir);
        assert_eq!(settings.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(settings.result_count, ResultCount::Twenty);
        assert!(settings.last_query.is_empty());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = scratch_dir("corrupt");
        std::fs::write(dir.join("settings.json"), "{ not json").unwrap();
        let settings = Settings::load(&dir);
        assert_eq!(settings.backend_url, DEFAULT_BACKEND_URL);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn saved_search_is_restored() {
        let dir = scratch_dir("saved");
        let settings = Settings {
            backend_url: "http://10.0.0.5:9000".into(),
            last_query: "atomberg fans".into(),
            result_count: ResultCount::Fifty,
            ..Settings::default()
        };
        settings.save(&dir);

        let loaded = Settings::load(&dir);
        assert_eq!(loaded.backend_url, "http://10.0.0.5:9000");
        assert_eq!(loaded.last_query, "atomberg fans");
        assert_eq!(loaded.result_count, ResultCount::Fifty);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = scratch_dir("partial");
        std::fs::write(dir.join("settings.json"), r#"{"result_count": 10}"#).unwrap();
        let settings = Settings::load(&dir);
        assert_eq!(settings.result_count, ResultCount::Ten);
        assert_eq!(settings.backend_url, DEFAULT_BACKEND_URL);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn env_override_wins_over_stored_url() {
        assert_eq!(
            resolve_backend_url(Some("http://remote:8000".into()), "http://localhost:8000"),
            "http://remote:8000"
        );
        assert_eq!(resolve_backend_url(Some("  ".into()), "http://a:1"), "http://a:1");
        assert_eq!(resolve_backend_url(None, ""), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn blank_export_dir_uses_default() {
        let settings = Settings {
            export_dir: Some("  ".into()),
            ..Settings::default()
        };
        assert_eq!(settings.export_dir_or_default(), default_export_dir());
    }
}
