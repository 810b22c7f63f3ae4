pub mod console;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = ".blackjack.yml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table: ConfigTable,
    pub console: ConfigConsole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigTable {
    pub starting_money: u64,
    pub dealer_stands_on: u32,
}

impl Default for ConfigTable {
    fn default() -> Self {
        let rules = blackjack::TableRules::default();
        ConfigTable {
            starting_money: rules.starting_money,
            dealer_stands_on: rules.dealer_stands_on,
        }
    }
}

impl TryInto<blackjack::TableRules> for ConfigTable {
    type Error = ConfigError;

    fn try_into(self) -> Result<blackjack::TableRules, Self::Error> {
        if self.starting_money == 0 {
            return Err(ConfigError::Invalid(String::from(
                "starting_money must be positive",
            )));
        }
        if self.dealer_stands_on == 0 || self.dealer_stands_on > 21 {
            return Err(ConfigError::Invalid(format!(
                "dealer_stands_on must be in [1, 21], got {}",
                self.dealer_stands_on
            )));
        }

        Ok(blackjack::TableRules {
            starting_money: self.starting_money,
            dealer_stands_on: self.dealer_stands_on,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigConsole {
    /// Clear the terminal before drawing the table.
    pub clear_screen: bool,
    /// Width the headers and banners are centered in.
    pub width: usize,
}

impl Default for ConfigConsole {
    fn default() -> Self {
        ConfigConsole {
            clear_screen: true,
            width: 80,
        }
    }
}

pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Reads the content of a given config file and parses it to a Config.
pub fn parse_config_from_file(filename: &Path) -> Result<Config, ConfigError> {
    let file_content = fs::read_to_string(filename).map_err(|source| ConfigError::Read {
        path: filename.to_path_buf(),
        source,
    })?;
    parse_config(&file_content)
}

/// Loads the given config file. Without one, falls back to `~/.blackjack.yml`
/// and then to the built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = path {
        return parse_config_from_file(path);
    }
    match home::home_dir().map(|home_dir| home_dir.join(DEFAULT_CONFIG_FILE)) {
        Some(config_file_path) if config_file_path.is_file() => {
            parse_config_from_file(&config_file_path)
        }
        _ => Ok(Config::default()),
    }
}
