/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*             Constants               */
/***************************************/
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
const DEFAULT_N_ELEVATORS: u32 = 3;
const DEFAULT_CAPACITY: u32 = 10;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SystemConfig {
    pub n_elevators: u32,
    pub capacity: u32,
}

impl Default for SystemConfig {
    fn default() -> SystemConfig {
        SystemConfig {
            n_elevators: DEFAULT_N_ELEVATORS,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("elevator capacity must be at least 1, got {0}")]
    InvalidCapacity(u32),
}

impl SystemConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/// Loads the configuration at `path`, falling back to the defaults when the
/// file does not exist.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let config_str = match fs::read_to_string(path) {
        Ok(config_str) => config_str,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!(
                "No configuration file at {}, using defaults",
                path.display()
            );
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.system.validate()?;
    Ok(config)
}

/***************************************/
/*             Unit tests              */
/***************************************/
