use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("National Park not found.")]
    ParkNotFound { name: String },

    #[error("State not found.")]
    StateNotFound { code: String },

    #[error("Malformed park record '{name}': {reason}")]
    MalformedRecord { name: String, reason: String },

    #[error("{message}")]
    InvalidQuery { message: String },

    /// Non-success status returned by the lookup service; `body` is the raw text.
    #[error("{body}")]
    ServiceError { status: u16, body: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    NotFound,
    Request,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ParkError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::ServiceError { .. } => ErrorCategory::Network,
            Self::IoError(_) | Self::SerializationError(_) | Self::MalformedRecord { .. } => {
                ErrorCategory::Storage
            }
            Self::ParkNotFound { .. } | Self::StateNotFound { .. } => ErrorCategory::NotFound,
            Self::InvalidQuery { .. } => ErrorCategory::Request,
            Self::UrlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound | ErrorCategory::Request => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpError(e) if e.is_connect() => {
                "Could not reach the park lookup service".to_string()
            }
            Self::HttpError(_) => "The park lookup request failed".to_string(),
            Self::ServiceError { body, .. } => body.clone(),
            Self::IoError(e) => format!("I/O failure: {}", e),
            Self::SerializationError(_) => "Park data could not be decoded".to_string(),
            Self::MalformedRecord { name, .. } => format!("The record for '{}' is damaged", name),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that parks-server is running and the endpoint is correct",
            ErrorCategory::Storage => "Check the States/ and Parks/ data files",
            ErrorCategory::NotFound => "Check the spelling of the park name or state code",
            ErrorCategory::Request => "Pass exactly one of ?state= or ?park=",
            ErrorCategory::Configuration => "Check command line flags and the TOML config file",
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkError>;
