use crate::utils::error::{ParkError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_port, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk server configuration. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub data: Option<DataSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSection {
    pub root: Option<String>,
    pub states_dir: Option<String>,
    pub parks_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ParkError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ParkError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; an unset variable is an error.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ParkError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        if let Some(missing) = re
            .captures_iter(content)
            .map(|caps| caps[1].to_string())
            .find(|name| std::env::var(name).is_err())
        {
            return Err(ParkError::MissingConfigError { field: missing });
        }

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        Ok(result.into_owned())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(server) = &self.server {
            if let Some(host) = &server.host {
                validate_non_empty_string("server.host", host)?;
            }
            if let Some(port) = server.port {
                validate_port("server.port", port)?;
            }
        }

        if let Some(data) = &self.data {
            for (field, value) in [
                ("data.root", &data.root),
                ("data.states_dir", &data.states_dir),
                ("data.parks_dir", &data.parks_dir),
            ] {
                if let Some(value) = value {
                    validate_path(field, value)?;
                }
            }
        }

        Ok(())
    }
}
