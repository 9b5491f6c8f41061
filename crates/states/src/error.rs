use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateSearchError {
    #[error("No State information was found matching input of {0}")]
    NoMatch(String),

    /// A record matched but carries no abbreviation.
    #[error("state '{0}' has no abbreviation")]
    MissingAbbreviation(String),

    #[error("failed to read state information: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode state information: {0}")]
    Decode(#[from] serde_json::Error),
}
