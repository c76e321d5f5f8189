use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{ConfigSource, FileConfigSource, Validate};

/// Loads a config from a [`ConfigSource`], validates it, and caches the
/// result. A missing source yields defaults.
pub struct ConfigManager<TSource, TConfig>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    source: TSource,
    cached: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileConfigSource, TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileConfigSource::new(file_path.to_string()))
    }
}

impl<TSource, TConfig> ConfigManager<TSource, TConfig>
where
    TSource: ConfigSource,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(source: TSource) -> Self {
        Self {
            source,
            cached: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut cached = self.cached.lock().unwrap();
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        match self.source.read()? {
            Some(content) => {
                let config: TConfig = serde_yaml_ng::from_str(&content)
                    .map_err(|e| format!("Failed to deserialize config: {}", e))?;
                config
                    .validate()
                    .map_err(|e| format!("Config validation error: {}", e))?;
                *cached = Some(config.clone());
                Ok(config)
            }
            None => Ok(TConfig::default()),
        }
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        self.source.write(&content)?;

        *self.cached.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSettings;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_engine_settings_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_settings_round_trip_through_yaml_file() {
        let manager: ConfigManager<FileConfigSource, GameSettings> =
            ConfigManager::from_yaml_file(&get_temp_file_path());

        let settings = GameSettings {
            board_width: 400,
            board_height: 300,
            base_tick_interval_ms: 150,
            ..GameSettings::default()
        };
        manager.set_config(&settings).unwrap();
        assert_eq!(manager.get_config().unwrap(), settings);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let manager: ConfigManager<FileConfigSource, GameSettings> =
            ConfigManager::from_yaml_file(&get_temp_file_path());
        assert_eq!(manager.get_config().unwrap(), GameSettings::default());
    }

    #[test]
    fn test_invalid_settings_are_rejected_on_load() {
        let path = get_temp_file_path();
        let source = FileConfigSource::new(path.clone());
        let broken = GameSettings {
            unit_size: 0,
            ..GameSettings::default()
        };
        source
            .write(&serde_yaml_ng::to_string(&broken).unwrap())
            .unwrap();

        let manager: ConfigManager<FileConfigSource, GameSettings> =
            ConfigManager::from_yaml_file(&path);
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("validation"));
    }

    #[test]
    fn test_set_config_rejects_invalid_settings() {
        let manager: ConfigManager<FileConfigSource, GameSettings> =
            ConfigManager::from_yaml_file(&get_temp_file_path());
        let broken = GameSettings {
            base_tick_interval_ms: 0,
            ..GameSettings::default()
        };
        assert!(manager.set_config(&broken).is_err());
    }

    #[test]
    fn test_garbage_content_is_an_error() {
        let path = get_temp_file_path();
        FileConfigSource::new(path.clone())
            .write("not: [valid, snake, settings")
            .unwrap();

        let manager: ConfigManager<FileConfigSource, GameSettings> =
            ConfigManager::from_yaml_file(&path);
        assert!(manager.get_config().is_err());
    }
}
