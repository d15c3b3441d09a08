use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::tictactoe::SessionSettings;

use crate::pacing::PacingConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_console.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub session: SessionSettings,
    pub pacing: PacingConfig,
    pub ask_name: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.pacing.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session: SessionSettings::default(),
            pacing: PacingConfig::default(),
            ask_name: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigError, ConfigSerializer};
    use tictactoe_engine::tictactoe::FirstPlayerMode;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_console_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_saved_by_manager_is_loaded_from_file() {
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));
        let config = Config {
            session: SessionSettings {
                first_player: FirstPlayerMode::Human,
                seed: Some(12),
            },
            pacing: PacingConfig::disabled(),
            ask_name: false,
        };

        manager.set_config(&config).unwrap();

        let content_provider = FileContentConfigProvider::new(file_path.clone());
        let content = content_provider.get_config_content().unwrap().unwrap();
        assert!(content.contains("first_player: human"));

        let fresh_manager = get_config_manager(Some(&file_path));
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let serializer = YamlConfigSerializer::new();

        let config: Config = serializer.deserialize("ask_name: false\n").unwrap();

        assert!(!config.ask_name);
        assert_eq!(config.pacing, PacingConfig::default());
        assert_eq!(config.session, SessionSettings::default());
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager(Some("this_file_does_not_exist.yaml"));

        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_pacing_is_refused() {
        let manager = get_config_manager(Some(&get_temp_file_path()));
        let config = Config {
            pacing: PacingConfig {
                thinking_delays_ms: vec![60_000],
            },
            ..Config::default()
        };

        assert!(matches!(
            manager.set_config(&config),
            Err(ConfigError::Invalid(_))
        ));
    }
}
