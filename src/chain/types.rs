use thiserror::Error;

use crate::role::{ProcessorError, SinkError, SourceError, StoreError};

/// Mutable key-value mapping threaded through one chain execution.
///
/// The context belongs to the caller; handlers only borrow it for the
/// duration of [`Chain::execute`](super::Chain::execute).
pub type Context = serde_json::Map<String, serde_json::Value>;

/// Structural violations detected while assembling a chain.
#[derive(Debug, Error)]
pub enum ChainError {
    /// A chain needs at least one handler.
    #[error("chain has no handlers")]
    Empty,
}

/// Error returned by a handler and propagated unchanged by the chain.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Processor(#[from] ProcessorError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    /// A role's output could not be written into the context.
    #[error("failed to serialize handler output")]
    Serialization(#[from] serde_json::Error),
}
