use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving the API configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// None of the base URL variables held a non-blank value
    #[error(
        "Missing backend URL: checked {} but none were set. \
         Set {} (or one of its fallbacks) in .env/.env.local",
        .checked.join(", "),
        .checked.first().copied().unwrap_or("the base URL variable")
    )]
    MissingConfiguration { checked: Vec<&'static str> },

    /// An env file exists but could not be parsed
    #[error("Failed to load environment file {}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// Endpoint lookup by a name that is not in the table
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),
}

impl ConfigError {
    /// Variable names that were checked, for `MissingConfiguration`
    pub fn checked_variables(&self) -> &[&'static str] {
        match self {
            ConfigError::MissingConfiguration { checked } => checked,
            _ => &[],
        }
    }
}
