use crate::domain::model::{format_park_name, ParkRecord, StateCode};
use crate::domain::ports::{ParkSource, ParkStore};
use crate::utils::error::{ParkError, Result};
use async_trait::async_trait;
use serde::Deserialize;

/// Output format for a state's park list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

/// Raw query string of a lookup request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupQuery {
    pub state: Option<String>,
    pub park: Option<String>,
    #[serde(default)]
    pub format: ListFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    StateParks { code: StateCode, format: ListFormat },
    ParkInfo { name: String },
}

impl LookupQuery {
    pub fn state(code: &str) -> Self {
        Self {
            state: Some(code.to_string()),
            ..Self::default()
        }
    }

    pub fn park(name: &str) -> Self {
        Self {
            park: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn into_request(self) -> Result<LookupRequest> {
        match (self.state, self.park) {
            (Some(code), None) => Ok(LookupRequest::StateParks {
                code: StateCode::new(code),
                format: self.format,
            }),
            (None, Some(name)) => Ok(LookupRequest::ParkInfo { name }),
            (Some(_), Some(_)) => Err(ParkError::InvalidQuery {
                message: "Provide either state or park, not both.".to_string(),
            }),
            (None, None) => Err(ParkError::InvalidQuery {
                message: "Missing required parameter: state or park.".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResponse {
    /// Names joined by `\n`, no trailing newline. Empty for unknown states.
    ParkListText(String),
    ParkListJson(Vec<String>),
    Park(ParkRecord),
}

/// Stateless request logic over a [`ParkStore`].
pub struct LookupService<S: ParkStore> {
    store: S,
}

impl<S: ParkStore> LookupService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: LookupQuery) -> Result<LookupResponse> {
        match query.into_request()? {
            LookupRequest::StateParks { code, format } => {
                let parks = self.state_parks(&code).await?;
                tracing::debug!(
                    "State lookup {} -> {}",
                    code,
                    parks.as_ref().map_or(-1, |p| p.len() as i64)
                );
                match format {
                    ListFormat::Text => Ok(LookupResponse::ParkListText(
                        parks.unwrap_or_default().join("\n"),
                    )),
                    ListFormat::Json => parks
                        .map(LookupResponse::ParkListJson)
                        .ok_or(ParkError::StateNotFound {
                            code: code.to_string(),
                        }),
                }
            }
            LookupRequest::ParkInfo { name } => self.park_record(&name).await.map(LookupResponse::Park),
        }
    }

    /// `None` when the state has no entry at all.
    pub async fn state_parks(&self, code: &StateCode) -> Result<Option<Vec<String>>> {
        self.store.state_parks(code).await
    }

    pub async fn park_record(&self, raw_name: &str) -> Result<ParkRecord> {
        let name = format_park_name(raw_name);
        tracing::debug!("Park lookup {:?} formatted as {:?}", raw_name, name.as_str());
        self.store
            .park_record(&name)
            .await?
            .ok_or_else(|| ParkError::ParkNotFound {
                name: name.into_string(),
            })
    }
}

#[async_trait]
impl<S: ParkStore> ParkSource for LookupService<S> {
    async fn list_parks(&self, state: &StateCode) -> Result<Vec<String>> {
        Ok(self.state_parks(state).await?.unwrap_or_default())
    }

    async fn park_info(&self, name: &str) -> Result<ParkRecord> {
        self.park_record(name).await
    }
}
