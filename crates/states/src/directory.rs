use serde::{Deserialize, Serialize};

use crate::error::StateSearchError;
use crate::source::StateInfoSource;

/// Abbreviation and capital for one state or territory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateInfo {
    pub state: Option<String>,
    pub abbreviation: Option<String>,
    pub capital: Option<String>,
}

impl StateInfo {
    pub fn new(
        state: impl Into<String>,
        abbreviation: impl Into<String>,
        capital: impl Into<String>,
    ) -> Self {
        Self {
            state: Some(state.into()),
            abbreviation: Some(abbreviation.into()),
            capital: Some(capital.into()),
        }
    }

    /// Case-insensitive substring match on the state name. Records without a
    /// name never match.
    fn matches(&self, needle_upper: &str) -> bool {
        self.state
            .as_deref()
            .is_some_and(|name| name.to_uppercase().contains(needle_upper))
    }
}

/// Read-only, in-memory list of state records.
#[derive(Debug, Clone, Default)]
pub struct StateDirectory {
    records: Vec<StateInfo>,
}

impl StateDirectory {
    pub fn new(records: Vec<StateInfo>) -> Self {
        Self { records }
    }

    pub fn load<S: StateInfoSource + ?Sized>(source: &S) -> Result<Self, StateSearchError> {
        Ok(Self::new(source.load()?))
    }

    pub fn records(&self) -> &[StateInfo] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every record whose state name contains `name`, ignoring case, in list
    /// order. An empty `name` matches every named record.
    pub fn search_by_name(&self, name: &str) -> Result<Vec<StateInfo>, StateSearchError> {
        let needle = name.to_uppercase();
        let matches: Vec<StateInfo> = self
            .records
            .iter()
            .filter(|info| info.matches(&needle))
            .cloned()
            .collect();

        if matches.is_empty() {
            tracing::debug!(query = name, "no state matched");
            return Err(StateSearchError::NoMatch(name.to_string()));
        }
        Ok(matches)
    }

    /// Upper-cased abbreviation of the first record whose state name contains
    /// `name`, ignoring case.
    pub fn abbreviation_for(&self, name: &str) -> Result<String, StateSearchError> {
        let needle = name.to_uppercase();
        let info = self
            .records
            .iter()
            .find(|info| info.matches(&needle))
            .ok_or_else(|| StateSearchError::NoMatch(name.to_string()))?;

        info.abbreviation
            .as_deref()
            .map(str::to_uppercase)
            .ok_or_else(|| {
                StateSearchError::MissingAbbreviation(info.state.clone().unwrap_or_default())
            })
    }
}
