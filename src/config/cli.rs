use crate::config::{ServerConfig, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "parks-server")]
#[command(about = "Serves national park lists and records from flat files")]
pub struct ServerArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding the States/ and Parks/ folders
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log as JSON lines")]
    pub json_logs: bool,
}

impl ServerArgs {
    /// Merges the optional config file with the flags; flags win.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                ServerConfig::from_toml(&file)
            }
            None => ServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(data_dir) = &self.data_dir {
            config.data_root = data_dir.clone();
        }
        config.verbose |= self.verbose;
        config.json_logs |= self.json_logs;

        Ok(config)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "park-browser")]
#[command(about = "Browse or search US national parks from the terminal")]
pub struct ClientArgs {
    /// Lookup service URL
    #[arg(long, default_value = "http://127.0.0.1:8080/")]
    pub endpoint: String,

    /// Read flat files directly instead of calling the service
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: BrowseCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum BrowseCommand {
    /// List a state's parks, optionally opening one of them
    State {
        code: String,
        #[arg(long)]
        park: Option<String>,
    },
    /// Look a park up by name
    Search { name: String },
}

impl Validate for ClientArgs {
    fn validate(&self) -> Result<()> {
        match &self.data_dir {
            Some(dir) => validate_path("data_dir", &dir.to_string_lossy()),
            None => validate_url("endpoint", &self.endpoint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"0.0.0.0\"\nport = 9000\n[logging]\njson = true\n")
            .unwrap();

        let args = ServerArgs::parse_from([
            "parks-server",
            "--config",
            temp_file.path().to_str().unwrap(),
            "--port",
            "9100",
            "--data-dir",
            "/srv/parks",
        ]);
        let config = args.resolve().unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9100);
        assert_eq!(config.data_root, PathBuf::from("/srv/parks"));
        assert!(config.json_logs);
        assert!(!config.verbose);
    }

    #[test]
    fn test_no_file_uses_defaults() {
        let config = ServerArgs::parse_from(["parks-server", "-v"]).resolve().unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.verbose);
    }

    #[test]
    fn test_client_subcommands() {
        let args = ClientArgs::parse_from(["park-browser", "state", "WA", "--park", "Olympic"]);
        match &args.command {
            BrowseCommand::State { code, park } => {
                assert_eq!(code, "WA");
                assert_eq!(park.as_deref(), Some("Olympic"));
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(args.validate().is_ok());

        let bad = ClientArgs::parse_from([
            "park-browser",
            "--endpoint",
            "not a url",
            "search",
            "olympic",
        ]);
        assert!(bad.validate().is_err());
    }
}
