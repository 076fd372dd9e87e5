use serde::{Deserialize, Serialize};
use snake_controller::ControllerConfig;

use crate::board::{cell_count, MAX_BOARD_CELLS};
use snake_controller::config::{
    ConfigManager, ConfigSerializer, FileContentConfigProvider, StaticContentConfigProvider,
    Validate, YamlConfigSerializer,
};

pub const DEFAULT_INITIAL_STATE: &str = "W 20 15 F 14 7 S R 3 4 7 3 7 2 7";

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct RunnerConfig {
    /// Controller initialization string.
    pub initial_state: String,
    pub tick_interval_ms: u64,
    pub max_ticks: u64,
    /// Chance per tick of a random direction change request.
    #[serde(default)]
    pub turn_probability: f64,
    /// Chance per tick of an unsolicited food announcement.
    #[serde(default)]
    pub announce_probability: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            initial_state: DEFAULT_INITIAL_STATE.to_string(),
            tick_interval_ms: 100,
            max_ticks: 500,
            turn_probability: 0.15,
            announce_probability: 0.01,
            seed: None,
        }
    }
}

impl Validate for RunnerConfig {
    fn validate(&self) -> Result<(), String> {
        if !(1..=5000).contains(&self.tick_interval_ms) {
            return Err("Tick interval must be between 1ms and 5000ms".to_string());
        }
        if !(1..=1_000_000).contains(&self.max_ticks) {
            return Err("Max ticks must be between 1 and 1000000".to_string());
        }
        if !(0.0..=1.0).contains(&self.turn_probability) {
            return Err("Turn probability must be between 0.0 and 1.0".to_string());
        }
        if !(0.0..=1.0).contains(&self.announce_probability) {
            return Err("Announce probability must be between 0.0 and 1.0".to_string());
        }
        let initial = ControllerConfig::parse(&self.initial_state).map_err(|e| e.to_string())?;
        if cell_count(initial.map_dimension).is_none() {
            return Err(format!("Map must have at most {} cells", MAX_BOARD_CELLS));
        }
        Ok(())
    }
}

/// Loads the config from `path`, or the defaults when no path is given or the file is absent.
pub fn load_config(path: Option<&str>) -> Result<RunnerConfig, String> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path).get_config(),
        None => ConfigManager::new(StaticContentConfigProvider::default(), YamlConfigSerializer::new())
            .get_config(),
    }
}

pub fn save_config(path: &str, config: &RunnerConfig) -> Result<(), String> {
    let manager: ConfigManager<FileContentConfigProvider, RunnerConfig> =
        ConfigManager::from_yaml_file(path);
    manager.set_config(config)
}

pub fn to_yaml(config: &RunnerConfig) -> Result<String, String> {
    YamlConfigSerializer::new().serialize(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_runner_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(RunnerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized() {
        let config = RunnerConfig::default();
        let yaml = to_yaml(&config).unwrap();
        let parsed: RunnerConfig = YamlConfigSerializer::new().deserialize(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_bad_initial_state_is_invalid() {
        let config = RunnerConfig {
            initial_state: "W 5 5 F 1 1 S Z 1 0 0".to_string(),
            ..RunnerConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.contains("invalid direction"));
    }

    #[test]
    fn test_oversized_map_is_invalid() {
        let config = RunnerConfig {
            initial_state: "W 50000 50000 F 1 1 S R 1 0 0".to_string(),
            ..RunnerConfig::default()
        };
        let error = config.validate().unwrap_err();
        assert!(error.contains("at most"));
    }

    #[test]
    fn test_out_of_range_values_are_invalid() {
        let config = RunnerConfig {
            tick_interval_ms: 0,
            ..RunnerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RunnerConfig {
            turn_probability: 1.5,
            ..RunnerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_yields_default() {
        let path = get_temp_file_path();
        assert_eq!(load_config(Some(&path)).unwrap(), RunnerConfig::default());
        assert_eq!(load_config(None).unwrap(), RunnerConfig::default());
    }

    #[test]
    fn test_saved_config_is_loaded() {
        let path = get_temp_file_path();
        let config = RunnerConfig {
            initial_state: "W 8 8 F 1 1 S D 2 4 4 4 3".to_string(),
            max_ticks: 42,
            seed: Some(9),
            ..RunnerConfig::default()
        };
        save_config(&path, &config).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), config);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_optional_fields_default_when_missing() {
        let yaml = "initial_state: W 5 5 F 1 1 S R 1 0 0\ntick_interval_ms: 10\nmax_ticks: 3\n";
        let config: RunnerConfig = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert_eq!(config.turn_probability, 0.0);
        assert_eq!(config.seed, None);
    }
}
