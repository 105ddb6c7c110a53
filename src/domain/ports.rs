use crate::domain::model::{ParkName, ParkRecord, StateCode};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Read-only key lookup over the park data. `Ok(None)` means the key is absent.
pub trait ParkStore: Send + Sync {
    fn state_parks(
        &self,
        code: &StateCode,
    ) -> impl std::future::Future<Output = Result<Option<Vec<String>>>> + Send;

    fn park_record(
        &self,
        name: &ParkName,
    ) -> impl std::future::Future<Output = Result<Option<ParkRecord>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> String;
    fn states_dir(&self) -> PathBuf;
    fn parks_dir(&self) -> PathBuf;
}

/// Where the browser gets its data: the HTTP service, or the lookup logic in-process.
#[async_trait]
pub trait ParkSource: Send + Sync {
    /// Park names for a state, in file order. Empty for unknown or parkless states.
    async fn list_parks(&self, state: &StateCode) -> Result<Vec<String>>;

    /// Record for a free-text park name; the source applies name formatting.
    async fn park_info(&self, name: &str) -> Result<ParkRecord>;
}
