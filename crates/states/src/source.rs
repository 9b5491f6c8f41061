use std::path::PathBuf;
use std::sync::Arc;

use crate::directory::StateInfo;
use crate::error::StateSearchError;

/// Where the state record list comes from.
pub trait StateInfoSource: Send + Sync {
    fn load(&self) -> Result<Vec<StateInfo>, StateSearchError>;
}

impl<S> StateInfoSource for Arc<S>
where
    S: StateInfoSource + ?Sized,
{
    fn load(&self) -> Result<Vec<StateInfo>, StateSearchError> {
        (**self).load()
    }
}

/// Reads a JSON array of records from a local file.
#[derive(Debug, Clone)]
pub struct JsonFileStateSource {
    path: PathBuf,
}

impl JsonFileStateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateInfoSource for JsonFileStateSource {
    fn load(&self) -> Result<Vec<StateInfo>, StateSearchError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let records: Vec<StateInfo> = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded state information");
        Ok(records)
    }
}

/// Fixed in-memory records for tests/dev.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateSource {
    records: Vec<StateInfo>,
}

impl InMemoryStateSource {
    pub fn new(records: Vec<StateInfo>) -> Self {
        Self { records }
    }

    /// Decode records from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, StateSearchError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

impl StateInfoSource for InMemoryStateSource {
    fn load(&self) -> Result<Vec<StateInfo>, StateSearchError> {
        Ok(self.records.clone())
    }
}
