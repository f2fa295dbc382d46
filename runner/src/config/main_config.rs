use std::path::{Path, PathBuf};

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::GameSettings;
use serde::{Deserialize, Serialize};

use super::{InputConfig, RenderConfig};

const CONFIG_FILE_NAME: &str = "gesture_snake.yaml";

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<&Path>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(get_default_config_path);
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub game: GameSettings,
    pub render: RenderConfig,
    pub input: InputConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.render.validate()?;
        self.input.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RenderMode;
    use common::config::{ConfigContentProvider, ConfigError, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_gesture_snake_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized: Config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized);

        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_manager_returns_default_for_missing_file() {
        let manager = get_config_manager(Some(&get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_manager_reads_partial_file() {
        let file_path = get_temp_file_path();
        std::fs::write(
            &file_path,
            "game:\n  speed_ms: 150\n  snake_color: \"#1E90FF\"\nrender:\n  mode: log\n",
        )
        .unwrap();

        let config = get_config_manager(Some(&file_path)).get_config().unwrap();
        assert_eq!(config.game.speed_ms, 150);
        assert_eq!(config.game.snake_color, "#1E90FF");
        assert_eq!(config.game.space_size, 25);
        assert_eq!(config.render.mode, RenderMode::Log);
        assert_eq!(config.input, InputConfig::default());

        std::fs::remove_file(file_path).unwrap();
    }

    #[test]
    fn test_manager_rejects_invalid_file() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "game:\n  speed_ms: 1\n").unwrap();

        let result = get_config_manager(Some(&file_path)).get_config();
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        std::fs::remove_file(file_path).unwrap();
    }
}
