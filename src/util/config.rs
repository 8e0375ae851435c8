//! Startup configuration: the access password and the initial language.
//! Loaded once from the platform config directory; everything else in the
//! session is in-memory only.

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "ProfitabilityCalculator";
const APP_NAME: &str = "ProfitabilityCalculator";

/// Local fallback when no password is configured.
const DEFAULT_PASSWORD: &str = "1234";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl AppConfig {
    pub fn access_password(&self) -> &str {
        self.password.as_deref().unwrap_or(DEFAULT_PASSWORD)
    }

    /// Resolves the startup language. An unrecognised code can only come
    /// from a hand-edited config file, so it aborts before the window opens
    /// instead of being handled at runtime.
    pub fn startup_language(&self) -> Language {
        match self.language.as_deref() {
            None => Language::default(),
            Some(code) => Language::parse(code).unwrap_or_else(|| {
                panic!("unsupported language '{code}' in config.json; expected 'en' or 'es'")
            }),
        }
    }
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// The process-wide configuration, read once on first use.
pub fn config() -> &'static AppConfig {
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(load_config)
}

fn load_config() -> AppConfig {
    let Some(path) = config_file() else {
        return AppConfig::default();
    };
    let Ok(data) = fs::read_to_string(path) else {
        return AppConfig::default();
    };
    serde_json::from_str(&data).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_fall_back() {
        let config = AppConfig::default();
        assert_eq!(config.access_password(), "1234");
        assert_eq!(config.startup_language(), Language::English);
    }

    #[test]
    fn configured_values_win() {
        let config: AppConfig =
            serde_json::from_str(r#"{"password": "hunter2", "language": "es"}"#).unwrap();
        assert_eq!(config.access_password(), "hunter2");
        assert_eq!(config.startup_language(), Language::Spanish);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: AppConfig =
            serde_json::from_str(r#"{"password": "pw", "theme": "dark"}"#).unwrap();
        assert_eq!(config.access_password(), "pw");
    }

    #[test]
    #[should_panic(expected = "unsupported language")]
    fn bad_language_code_is_fatal() {
        let config: AppConfig = serde_json::from_str(r#"{"language": "klingon"}"#).unwrap();
        config.startup_language();
    }
}
