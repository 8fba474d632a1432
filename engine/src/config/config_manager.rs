use serde::{Deserialize, Serialize};
use std::sync::{Mutex, PoisonError};

use super::{
    ConfigContentProvider, ConfigError, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Mutex::new(None),
            config_content_provider,
            config_serializer,
        }
    }

    /// Returns the cached config, loading it on first use. A missing file
    /// yields `TConfig::default()` and is not cached.
    pub fn get_config(&self) -> Result<TConfig, ConfigError> {
        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let Some(config_data) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&config_data)?;
        config.validate().map_err(ConfigError::Validation)?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;

        let serialized_config = self.config_serializer.serialize(config)?;
        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryContentProvider {
        content: RefCell<Option<String>>,
        reads: Cell<usize>,
    }

    impl ConfigContentProvider for &MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        games: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self { games: 3 }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.games == 0 {
                return Err("games must be positive".to_string());
            }
            Ok(())
        }
    }

    #[test]
    fn test_missing_content_returns_default() {
        let provider = MemoryContentProvider::default();
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let provider = MemoryContentProvider::default();
        *provider.content.borrow_mut() = Some("games: 7\n".to_string());
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        assert_eq!(manager.get_config().unwrap(), SampleConfig { games: 7 });
        assert_eq!(manager.get_config().unwrap(), SampleConfig { games: 7 });
        assert_eq!(provider.reads.get(), 1);
    }

    #[test]
    fn test_invalid_stored_config_is_rejected() {
        let provider = MemoryContentProvider::default();
        *provider.content.borrow_mut() = Some("games: 0\n".to_string());
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        assert!(matches!(manager.get_config(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let provider = MemoryContentProvider::default();
        *provider.content.borrow_mut() = Some("games: [not, a, number]\n".to_string());
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        assert!(matches!(manager.get_config(), Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_set_config_validates_before_writing() {
        let provider = MemoryContentProvider::default();
        let manager: ConfigManager<_, SampleConfig, _> =
            ConfigManager::new(&provider, YamlConfigSerializer::new());

        assert!(manager.set_config(&SampleConfig { games: 0 }).is_err());
        assert!(provider.content.borrow().is_none());

        manager.set_config(&SampleConfig { games: 5 }).unwrap();
        assert!(provider.content.borrow().is_some());
        assert_eq!(manager.get_config().unwrap(), SampleConfig { games: 5 });
    }

    #[test]
    fn test_file_provider_missing_file_is_none() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("noughts_missing_config_{}.yaml", random_number));
        let provider = FileContentConfigProvider::new(path);
        assert!(provider.get_config_content().unwrap().is_none());
    }
}
