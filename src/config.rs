//! User configuration.
//!
//! Read from `~/.artofmemory.toml` by default:
//!
//! ```toml
//! dictionary = "/usr/share/cmudict/cmudict.dict"
//! voice = "Tessa"
//!
//! [pao]
//! 15 = "Albert Einstein, writing, blackboard"
//! 16 = "Molly Ringwald, blowing candles, cake"
//! ```
//!
//! ## Environment Variables
//!
//! - `ARTOFMEMORY_DICT` - pronouncing dictionary path
//! - `ARTOFMEMORY_VOICE` - text-to-speech voice
//!
//! These can also be set in a `.env` file next to the config file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{MajorError, MajorResult};
use crate::pronounce::{shared_sample, CmuDict};
use crate::quiz::missing::DEFAULT_VOICE;

/// Default config location, relative to the home directory
pub const CONFIG_FILE_NAME: &str = ".artofmemory.toml";

/// Environment variable names
pub const ENV_DICT: &str = "ARTOFMEMORY_DICT";
pub const ENV_VOICE: &str = "ARTOFMEMORY_VOICE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Full CMU-format pronouncing dictionary; the bundled sample is used when unset
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
    /// Voice for spoken quizzes
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Person-Action-Object inventory, number -> "person, action, object"
    #[serde(default)]
    pub pao: BTreeMap<String, String>,
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            voice: default_voice(),
            pao: BTreeMap::new(),
        }
    }
}

impl Config {
    /// `~/.artofmemory.toml`
    pub fn default_path() -> PathBuf {
        home_dir().join(CONFIG_FILE_NAME)
    }

    pub fn parse(text: &str) -> MajorResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// A `.env` file in the same directory is loaded first, then environment
    /// overrides are applied.
    pub fn load(path: &Path) -> MajorResult<Self> {
        if let Some(dir) = path.parent() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
            }
        }

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config = Self::parse(&content)?;
            tracing::debug!("Loaded configuration from {}", path.display());
            config
        } else {
            tracing::debug!("No configuration at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from `lookup` (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dict) = lookup(ENV_DICT) {
            if !dict.is_empty() {
                self.dictionary = Some(expand_home(&dict));
            }
        }

        if let Some(voice) = lookup(ENV_VOICE) {
            if !voice.is_empty() {
                self.voice = voice;
            }
        }
    }

    /// PAO entries, or an error explaining how to add them.
    pub fn pao_entries(&self) -> MajorResult<&BTreeMap<String, String>> {
        if self.pao.is_empty() {
            return Err(MajorError::Config(
                "no [pao] section; add `[pao]` entries like `15 = \"person, action, object\"`"
                    .to_string(),
            ));
        }
        Ok(&self.pao)
    }

    /// Load the configured dictionary, or the bundled sample.
    pub fn pronunciations(&self) -> MajorResult<Arc<CmuDict>> {
        match &self.dictionary {
            Some(path) => Ok(Arc::new(CmuDict::from_file(&expand_home_path(path))?)),
            None => Ok(shared_sample()),
        }
    }
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None if path == "~" => home_dir(),
        None => PathBuf::from(path),
    }
}

fn expand_home_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => expand_home(s),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.pao.insert("15".to_string(), "Albert Einstein, writing, blackboard".to_string());
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("voice = \"Tessa\""));
        assert!(toml_str.contains("[pao]"));

        let back = Config::parse(&toml_str).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_parse_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.pao_entries().is_err());
    }

    #[test]
    fn test_parse_pao_section() {
        let config = Config::parse(
            r#"
voice = "Daniel"

[pao]
15 = "Albert Einstein, writing, blackboard"
23 = "Michael Jordan, shooting, basketball"
"#,
        )
        .unwrap();
        assert_eq!(config.voice, "Daniel");
        let pao = config.pao_entries().unwrap();
        assert_eq!(pao.len(), 2);
        assert_eq!(pao["23"], "Michael Jordan, shooting, basketball");
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("voice = ").unwrap_err();
        assert!(matches!(err, MajorError::ConfigParse(_)));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [(ENV_DICT, "/tmp/cmudict.dict"), (ENV_VOICE, "Alex")]
            .into_iter()
            .collect();
        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.dictionary, Some(PathBuf::from("/tmp/cmudict.dict")));
        assert_eq!(config.voice, "Alex");
    }

    #[test]
    fn test_empty_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|_| Some(String::new()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/etc/x"), PathBuf::from("/etc/x"));
        assert_eq!(expand_home("~/x.toml"), home_dir().join("x.toml"));
        assert_eq!(expand_home("~"), home_dir());
    }

    #[test]
    fn test_sample_pronunciations_by_default() {
        let dict = Config::default().pronunciations().unwrap();
        assert!(dict.contains("office"));
        let again = Config::default().pronunciations().unwrap();
        assert!(Arc::ptr_eq(&dict, &again));
    }
}
