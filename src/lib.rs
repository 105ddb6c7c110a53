pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{ClientArgs, ServerArgs};

pub use adapters::http::HttpParkClient;
pub use adapters::storage::{FsParkStore, MemoryParkStore};
pub use config::ServerConfig;
pub use core::browser::{Mode, ParkBrowser, Screen, UiEvent};
pub use core::lookup::{LookupQuery, LookupResponse, LookupService};
pub use domain::model::{format_park_name, ParkRecord, StateCode};
pub use utils::error::{ParkError, Result};
