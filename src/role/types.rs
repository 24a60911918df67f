use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by a [`Processor`](super::Processor).
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("processor configuration error: {0}")]
    Configuration(String),

    #[error("processor failed: {0}")]
    Failed(String),

    /// The underlying backend failed; the cause is kept as the source.
    #[error("processor backend failed")]
    Backend(#[source] BoxError),
}

/// Errors raised by a [`Source`](super::Source).
#[derive(Debug, Error)]
pub enum SourceError {
    /// Nothing exists behind the requested identity.
    #[error("no source found: {0}")]
    NoSourceFound(String),

    #[error("source configuration error: {0}")]
    Configuration(String),

    #[error("source failed: {0}")]
    Failed(String),

    #[error("source backend failed")]
    Backend(#[source] BoxError),
}

/// Errors raised by a [`Sink`](super::Sink).
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink configuration error: {0}")]
    Configuration(String),

    #[error("sink failed: {0}")]
    Failed(String),

    #[error("sink backend failed")]
    Backend(#[source] BoxError),
}

/// Errors raised by a [`Store`](super::Store).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store has no entry under the requested key.
    #[error("no store entry found for key '{0}'")]
    NoStoreEntryFound(String),

    #[error("store configuration error: {0}")]
    Configuration(String),

    #[error("store failed: {0}")]
    Failed(String),

    #[error("store backend failed")]
    Backend(#[source] BoxError),
}

impl SourceError {
    /// Whether this is the not-found kind rather than a generic failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NoSourceFound(_))
    }
}

impl StoreError {
    /// Whether this is the not-found kind rather than a generic failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NoStoreEntryFound(_))
    }
}
