use crate::domain::model::{parse_park_lines, ParkName, ParkRecord, StateCode};
use crate::domain::ports::{ConfigProvider, ParkStore};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Flat-file store: one file per state code, one file per formatted park name.
#[derive(Debug, Clone)]
pub struct FsParkStore {
    states_dir: PathBuf,
    parks_dir: PathBuf,
}

impl FsParkStore {
    pub fn new(states_dir: impl Into<PathBuf>, parks_dir: impl Into<PathBuf>) -> Self {
        Self {
            states_dir: states_dir.into(),
            parks_dir: parks_dir.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.states_dir(), config.parks_dir())
    }

    async fn read_entry(dir: &Path, key: &str) -> Result<Option<String>> {
        if !is_plain_file_name(key) {
            tracing::debug!("Rejected storage key {:?}", key);
            return Ok(None);
        }

        let path = dir.join(key);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            // a directory named like the key is not an entry
            Err(e) if path.is_dir() => {
                tracing::debug!("{} is a directory: {}", path.display(), e);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        if !Self::has_exact_entry(dir, key).await? {
            tracing::debug!("{:?} only matches {} case-insensitively", key, dir.display());
            return Ok(None);
        }
        Ok(Some(contents))
    }

    /// Case-insensitive filesystems open `wa` as `WA`; keys must match a
    /// directory entry byte for byte.
    async fn has_exact_entry(dir: &Path, key: &str) -> Result<bool> {
        let mut entries = tokio::fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_name().as_os_str() == OsStr::new(key) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Keys are bare file names: no separators, no NUL, not `.` or `..`.
fn is_plain_file_name(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains(['/', '\\', '\0'])
}

impl ParkStore for FsParkStore {
    async fn state_parks(&self, code: &StateCode) -> Result<Option<Vec<String>>> {
        let contents = Self::read_entry(&self.states_dir, code.as_str()).await?;
        Ok(contents.map(|text| parse_park_lines(&text)))
    }

    async fn park_record(&self, name: &ParkName) -> Result<Option<ParkRecord>> {
        match Self::read_entry(&self.parks_dir, name.as_str()).await? {
            Some(contents) => ParkRecord::from_file_contents(name, &contents).map(Some),
            None => Ok(None),
        }
    }
}

/// In-memory store, keyed the same way as the flat files.
#[derive(Debug, Clone, Default)]
pub struct MemoryParkStore {
    states: HashMap<String, Vec<String>>,
    parks: HashMap<String, ParkRecord>,
}

impl MemoryParkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, code: &str, parks: &[&str]) -> Self {
        self.states.insert(
            code.to_string(),
            parks.iter().map(|p| p.to_string()).collect(),
        );
        self
    }

    /// Adds a park keyed by its formatted name.
    pub fn with_park(mut self, name: &str, image: &str, year: &str) -> Self {
        let name = crate::domain::model::format_park_name(name).into_string();
        self.parks.insert(
            name.clone(),
            ParkRecord {
                image: image.to_string(),
                year: year.to_string(),
                name,
            },
        );
        self
    }
}

impl ParkStore for MemoryParkStore {
    async fn state_parks(&self, code: &StateCode) -> Result<Option<Vec<String>>> {
        Ok(self.states.get(code.as_str()).cloned())
    }

    async fn park_record(&self, name: &ParkName) -> Result<Option<ParkRecord>> {
        Ok(self.parks.get(name.as_str()).cloned())
    }
}
