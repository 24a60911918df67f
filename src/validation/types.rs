use thiserror::Error;

/// Errors raised while validating data against a rule-set.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The engine could not evaluate the rule-set.
    #[error("failed data expectations: {message}")]
    Failed {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The engine does not know a rule it was asked to evaluate.
    #[error("unknown rule '{0}'")]
    UnknownRule(String),
}

impl ValidationError {
    pub fn failed(message: impl Into<String>) -> Self {
        ValidationError::Failed {
            message: message.into(),
            source: None,
        }
    }
}
