#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_directory, validate_non_empty_string, validate_path, validate_port, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_ROOT: &str = "./data";
pub const DEFAULT_STATES_DIR: &str = "States";
pub const DEFAULT_PARKS_DIR: &str = "Parks";

/// Resolved settings for `parks-server`, after the TOML file and flags are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_root: PathBuf,
    pub states_dir: String,
    pub parks_dir: String,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_root: PathBuf::from(DEFAULT_DATA_ROOT),
            states_dir: DEFAULT_STATES_DIR.to_string(),
            parks_dir: DEFAULT_PARKS_DIR.to_string(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl ServerConfig {
    /// Defaults overlaid with whatever the file sets.
    pub fn from_toml(file: &TomlConfig) -> Self {
        let mut config = Self::default();

        if let Some(server) = &file.server {
            if let Some(host) = &server.host {
                config.host = host.clone();
            }
            if let Some(port) = server.port {
                config.port = port;
            }
        }

        if let Some(data) = &file.data {
            if let Some(root) = &data.root {
                config.data_root = PathBuf::from(root);
            }
            if let Some(states_dir) = &data.states_dir {
                config.states_dir = states_dir.clone();
            }
            if let Some(parks_dir) = &data.parks_dir {
                config.parks_dir = parks_dir.clone();
            }
        }

        if let Some(logging) = &file.logging {
            config.verbose = logging.verbose.unwrap_or(false);
            config.json_logs = logging.json.unwrap_or(false);
        }

        config
    }
}

impl ConfigProvider for ServerConfig {
    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn states_dir(&self) -> PathBuf {
        self.data_root.join(&self.states_dir)
    }

    fn parks_dir(&self) -> PathBuf {
        self.data_root.join(&self.parks_dir)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_port("server.port", self.port)?;
        validate_path("data.root", &self.data_root.to_string_lossy())?;
        validate_path("data.states_dir", &self.states_dir)?;
        validate_path("data.parks_dir", &self.parks_dir)?;
        validate_directory("data.states_dir", &self.states_dir())?;
        validate_directory("data.parks_dir", &self.parks_dir())?;
        Ok(())
    }
}
