use anyhow::Context;

use ordergate_states::{JsonFileStateSource, StateDirectory};

use crate::config::ApiConfig;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone, Default)]
pub struct AppServices {
    pub states: StateDirectory,
}

impl AppServices {
    pub fn new(states: StateDirectory) -> Self {
        Self { states }
    }
}

/// Build services from configuration. State records are loaded once here.
pub fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    let states = match &config.state_info_path {
        Some(path) => {
            let source = JsonFileStateSource::new(path);
            let directory = StateDirectory::load(&source)
                .with_context(|| format!("loading state information from {}", path.display()))?;
            if directory.is_empty() {
                tracing::warn!(path = %path.display(), "state information file holds no records");
            } else {
                tracing::info!(count = directory.records().len(), "state directory loaded");
            }
            directory
        }
        None => StateDirectory::default(),
    };

    Ok(AppServices::new(states))
}
