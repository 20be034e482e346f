//! Application configuration.
//!
//! Settings live in a JSON file in the platform data directory and are
//! loaded with sensible defaults when the file is absent, so the server
//! runs out of the box. The `init` command drives the interactive wizard
//! implemented here.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Bind address of the web interface.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Interactive prompt for the server settings, pre-filled with the
    /// current values.
    pub fn init(current: &Option<ServerConfig>) -> Result<Self> {
        let defaults = current.clone().unwrap_or_default();
        let host: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerHost.to_string())
            .default(defaults.host)
            .interact_text()?;
        let port: u16 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptServerPort.to_string())
            .default(defaults.port)
            .interact_text()?;
        Ok(ServerConfig { host, port })
    }
}

/// Root configuration object.
///
/// Every module is optional; a missing entry means "use the defaults",
/// which keeps hand-edited files minimal.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when no file
    /// exists. A present but malformed file is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, overwriting any
    /// existing file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard on top of the current
    /// settings and returns the updated configuration.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        config.server = Some(ServerConfig::init(&config.server)?);
        Ok(config)
    }

    /// Removes the configuration file. Missing files are not an error.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Effective server settings: the configured values or the defaults.
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
}
