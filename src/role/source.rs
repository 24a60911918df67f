use async_trait::async_trait;
use serde::Serialize;

use super::types::SourceError;
use crate::chain::{Context, Handler, PipelineError};
use crate::config::Configuration;

/// Read-only access to data held somewhere else.
///
/// `get` fails with [`SourceError::NoSourceFound`] when the context points
/// at something that does not exist.
#[async_trait]
pub trait Source: Send + Sync {
    /// What `get` retrieves.
    type Data: Send;
    /// What `list` enumerates.
    type Entry: Send;

    async fn get(&self, context: &Context) -> Result<Self::Data, SourceError>;

    async fn list(&self, context: &Context) -> Result<Vec<Self::Entry>, SourceError>;

    fn config(&self) -> Option<&Configuration> {
        None
    }
}

/// Chain link that runs [`Source::get`] and stores the result in the
/// context under `output_key` for the links that follow.
pub struct SourceChain<S> {
    source: S,
    output_key: String,
}

impl<S> SourceChain<S>
where
    S: Source,
{
    pub fn new(source: S, output_key: impl Into<String>) -> Self {
        SourceChain {
            source,
            output_key: output_key.into(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn output_key(&self) -> &str {
        &self.output_key
    }
}

#[async_trait]
impl<S> Handler<Context> for SourceChain<S>
where
    S: Source,
    S::Data: Serialize,
{
    async fn handle(&self, context: &mut Context) -> Result<(), PipelineError> {
        let data = self.source.get(context).await?;
        let value = serde_json::to_value(&data)?;
        context.insert(self.output_key.clone(), value);
        Ok(())
    }

    fn name(&self) -> &str {
        std::any::type_name::<S>()
    }
}
