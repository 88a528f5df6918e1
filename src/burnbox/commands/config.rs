use crate::commands::{BurnPaths, CmdMessage, CmdResult};
use crate::config::BurnConfig;
use crate::error::{BurnError, Result};
use tracing::warn;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &BurnPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = BurnConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = BurnConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut result = CmdResult::default();
            // An unreadable file is replaced rather than blocking the repair.
            let mut config = match BurnConfig::load(dir) {
                Ok(config) => config,
                Err(e @ (BurnError::Validation(_) | BurnError::Serialization(_))) => {
                    warn!(error = %e, "replacing invalid config file");
                    result.add_message(CmdMessage::warning(format!(
                        "Existing config was invalid ({}), starting from defaults",
                        e
                    )));
                    BurnConfig::default()
                }
                Err(e) => return Err(e),
            };
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result.with_config(config))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_persists_and_show_key_reads_back() {
        let tmp = TempDir::new().unwrap();
        let paths = BurnPaths::new(tmp.path());

        let set = run(&paths, ConfigAction::Set("id-attempts".into(), "9".into())).unwrap();
        assert_eq!(set.messages[0].level, MessageLevel::Success);
        assert_eq!(set.config.unwrap().id_attempts, 9);

        let shown = run(&paths, ConfigAction::ShowKey("id-attempts".into())).unwrap();
        assert_eq!(shown.messages[0].content, "9");
    }

    #[test]
    fn invalid_set_is_reported_not_saved() {
        let tmp = TempDir::new().unwrap();
        let paths = BurnPaths::new(tmp.path());

        let result = run(&paths, ConfigAction::Set("id-length".into(), "3".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!tmp.path().join("config.json").exists());
    }

    #[test]
    fn set_repairs_an_invalid_config_file() {
        let tmp = TempDir::new().unwrap();
        let paths = BurnPaths::new(tmp.path());
        std::fs::write(tmp.path().join("config.json"), r#"{"id_length": 4}"#).unwrap();

        let result = run(&paths, ConfigAction::Set("id-length".into(), "12".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(result.messages[1].level, MessageLevel::Success);

        let loaded = BurnConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded, BurnConfig::default());
    }

    #[test]
    fn set_replaces_unparseable_config_file() {
        let tmp = TempDir::new().unwrap();
        let paths = BurnPaths::new(tmp.path());
        std::fs::write(tmp.path().join("config.json"), "{ truncated").unwrap();

        run(&paths, ConfigAction::Set("id-attempts".into(), "7".into())).unwrap();
        assert_eq!(BurnConfig::load(tmp.path()).unwrap().id_attempts, 7);
    }

    #[test]
    fn unknown_key_is_an_error_message() {
        let tmp = TempDir::new().unwrap();
        let paths = BurnPaths::new(tmp.path());
        let result = run(&paths, ConfigAction::ShowKey("nope".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
    }
}
