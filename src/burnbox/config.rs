use crate::error::{BurnError, Result};
use crate::guard::Consistency;
use crate::id::{RandomIds, DEFAULT_ID_LENGTH, MAX_ID_LENGTH, MIN_ID_LENGTH};
use crate::lifecycle::{Settings, DEFAULT_ID_ATTEMPTS, DEFAULT_MAX_CONTENT_BYTES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`BurnConfig::get`] and [`BurnConfig::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &["id-length", "id-attempts", "max-content-bytes", "consistency"];

/// Configuration for burnbox, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BurnConfig {
    /// Length of generated identifiers
    #[serde(default = "default_id_length")]
    pub id_length: usize,

    /// Identifiers drawn on create before giving up on collisions
    #[serde(default = "default_id_attempts")]
    pub id_attempts: u32,

    #[serde(default = "default_max_content_bytes")]
    pub max_content_bytes: usize,

    #[serde(default)]
    pub consistency: Consistency,
}

fn default_id_length() -> usize {
    DEFAULT_ID_LENGTH
}

fn default_id_attempts() -> u32 {
    DEFAULT_ID_ATTEMPTS
}

fn default_max_content_bytes() -> usize {
    DEFAULT_MAX_CONTENT_BYTES
}

impl Default for BurnConfig {
    fn default() -> Self {
        Self {
            id_length: DEFAULT_ID_LENGTH,
            id_attempts: DEFAULT_ID_ATTEMPTS,
            max_content_bytes: DEFAULT_MAX_CONTENT_BYTES,
            consistency: Consistency::default(),
        }
    }
}

impl BurnConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BurnError::Io)?;
        let config: BurnConfig =
            serde_json::from_str(&content).map_err(BurnError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory. The file is replaced atomically.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BurnError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(BurnError::Serialization)?;
        let tmp_path = config_dir.join(format!(".config-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_path, content).map_err(BurnError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, config_dir.join(CONFIG_FILENAME)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(BurnError::Io(e));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "id-length" => Some(self.id_length.to_string()),
            "id-attempts" => Some(self.id_attempts.to_string()),
            "max-content-bytes" => Some(self.max_content_bytes.to_string()),
            "consistency" => Some(self.consistency.to_string()),
            _ => None,
        }
    }

    /// Set a key from its string form. The config is left untouched on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.clone();
        match key {
            "id-length" => next.id_length = parse_number(key, value)?,
            "id-attempts" => next.id_attempts = parse_number(key, value)?,
            "max-content-bytes" => next.max_content_bytes = parse_number(key, value)?,
            "consistency" => next.consistency = value.parse()?,
            other => {
                return Err(BurnError::Validation(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    pub fn settings(&self) -> Settings {
        Settings {
            id_attempts: self.id_attempts,
            max_content_bytes: self.max_content_bytes,
            consistency: self.consistency,
        }
    }

    pub fn id_generator(&self) -> Result<RandomIds> {
        RandomIds::new(self.id_length)
    }

    fn validate(&self) -> Result<()> {
        if !(MIN_ID_LENGTH..=MAX_ID_LENGTH).contains(&self.id_length) {
            return Err(BurnError::Validation(format!(
                "id-length must be between {} and {}",
                MIN_ID_LENGTH, MAX_ID_LENGTH
            )));
        }
        if self.id_attempts == 0 {
            return Err(BurnError::Validation(
                "id-attempts must be at least 1".to_string(),
            ));
        }
        if self.max_content_bytes == 0 {
            return Err(BurnError::Validation(
                "max-content-bytes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| BurnError::Validation(format!("{} must be a number, got '{}'", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdGenerator;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BurnConfig::default();
        assert_eq!(config.id_length, 12);
        assert_eq!(config.id_attempts, 5);
        assert_eq!(config.consistency, Consistency::Serialized);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = BurnConfig::load(temp_dir.path().join("missing")).unwrap();
        assert_eq!(config, BurnConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = BurnConfig::default();
        config.set("id-length", "16").unwrap();
        config.set("consistency", "relaxed").unwrap();
        config.save(temp_dir.path()).unwrap();

        let loaded = BurnConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.id_length, 16);
        assert_eq!(loaded.consistency, Consistency::Relaxed);
        assert_eq!(loaded.id_generator().unwrap().generate().as_str().len(), 16);
    }

    #[test]
    fn test_save_replaces_file_without_leftovers() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ truncated").unwrap();

        BurnConfig::default().save(temp_dir.path()).unwrap();

        let names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![CONFIG_FILENAME.to_string()]);
        assert_eq!(BurnConfig::load(temp_dir.path()).unwrap(), BurnConfig::default());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"id_attempts": 2}"#).unwrap();

        let loaded = BurnConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.id_attempts, 2);
        assert_eq!(loaded.id_length, DEFAULT_ID_LENGTH);
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"id_length": 4}"#).unwrap();
        assert!(matches!(
            BurnConfig::load(temp_dir.path()),
            Err(BurnError::Validation(_))
        ));
    }

    #[test]
    fn test_set_rejects_bad_values_without_changing() {
        let mut config = BurnConfig::default();
        assert!(config.set("id-length", "9").is_err());
        assert!(config.set("id-attempts", "0").is_err());
        assert!(config.set("max-content-bytes", "lots").is_err());
        assert!(config.set("consistency", "eventual").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, BurnConfig::default());
    }

    #[test]
    fn test_entries_follow_key_order() {
        let keys: Vec<&str> = BurnConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, CONFIG_KEYS);
    }

    #[test]
    fn test_settings_mirror_config() {
        let mut config = BurnConfig::default();
        config.set("max-content-bytes", "1024").unwrap();
        let settings = config.settings();
        assert_eq!(settings.max_content_bytes, 1024);
        assert_eq!(settings.id_attempts, DEFAULT_ID_ATTEMPTS);
    }
}
