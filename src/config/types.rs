use std::collections::BTreeSet;

use thiserror::Error;

/// Errors raised while resolving step parameters from a [`Configuration`](super::Configuration).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required parameters had neither a configuration value nor a default.
    #[error(
        "missing required configuration parameters: {}",
        .0.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    )]
    MissingParameters(BTreeSet<String>),

    /// A bound value could not be read as the declared field type.
    #[error("invalid value for configuration parameter '{name}'")]
    InvalidParameter {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configurations are built from JSON objects only.
    #[error("configuration must be an object, got {0}")]
    NotAnObject(&'static str),
}

impl ConfigError {
    /// Names of the missing parameters, empty for other kinds.
    pub fn missing(&self) -> Vec<&str> {
        match self {
            ConfigError::MissingParameters(names) => names.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}
