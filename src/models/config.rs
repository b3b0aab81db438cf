//! Configuration model.
//!
//! The config file is JSON with camelCase keys, looked up as `conf.json`
//! in the working directory first and then under the user config
//! directory. CLI flags override file values; the OMDb key may also come
//! from the `OMDB_API_KEY` environment variable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Root directory to scan for video files.
    pub source_dir: PathBuf,
    /// Root directory to place organized files under.
    pub dest_dir: PathBuf,
    /// OMDb API key.
    #[serde(rename = "omdbAPIKey")]
    pub omdb_api_key: Option<String>,
    /// Dry-run mode: log planned moves without touching the filesystem.
    pub test_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            dest_dir: PathBuf::from("organized"),
            omdb_api_key: std::env::var("OMDB_API_KEY").ok(),
            test_mode: false,
        }
    }
}

/// Get the user-level configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("film_organizer")
}

/// Load configuration, trying an explicit path first, then `conf.json` in
/// the working directory, then the user config directory. Falls back to
/// defaults when no file parses.
pub fn load_config(path: Option<&Path>) -> Config {
    let candidates: Vec<PathBuf> = match path {
        Some(p) => vec![p.to_path_buf()],
        None => vec![
            PathBuf::from("conf.json"),
            dirs_config_path().join("conf.json"),
        ],
    };

    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        if let Ok(content) = std::fs::read_to_string(&candidate) {
            match serde_json::from_str::<Config>(&content) {
                Ok(mut config) => {
                    if config.omdb_api_key.is_none() {
                        config.omdb_api_key = std::env::var("OMDB_API_KEY").ok();
                    }
                    tracing::debug!("Loaded config from {:?}", candidate);
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Ignoring unparseable config {:?}: {}", candidate, e);
                }
            }
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_camel_case_keys() {
        let json = r#"{
            "sourceDir": "/videos",
            "destDir": "/sorted",
            "omdbAPIKey": "abc123",
            "testMode": true
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.source_dir, PathBuf::from("/videos"));
        assert_eq!(config.dest_dir, PathBuf::from("/sorted"));
        assert_eq!(config.omdb_api_key.as_deref(), Some("abc123"));
        assert!(config.test_mode);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let json = r#"{ "sourceDir": "/videos" }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.source_dir, PathBuf::from("/videos"));
        assert!(!config.test_mode);
    }
}
