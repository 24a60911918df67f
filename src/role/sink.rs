use async_trait::async_trait;

use super::types::SinkError;
use crate::chain::{Context, Handler, PipelineError};
use crate::config::Configuration;

/// Write-only persistence: data goes in through `put` and is removed with
/// `delete`, but is never read back.
#[async_trait]
pub trait Sink: Send + Sync {
    /// Acknowledgement returned by `put`.
    type Receipt: Send;

    async fn put(&self, context: &Context) -> Result<Self::Receipt, SinkError>;

    async fn delete(&self, context: &Context) -> Result<(), SinkError>;

    fn config(&self) -> Option<&Configuration> {
        None
    }
}

/// Chain link that runs [`Sink::put`]; the receipt is dropped.
pub struct SinkChain<K> {
    sink: K,
}

impl<K> SinkChain<K>
where
    K: Sink,
{
    pub fn new(sink: K) -> Self {
        SinkChain { sink }
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }
}

#[async_trait]
impl<K> Handler<Context> for SinkChain<K>
where
    K: Sink,
{
    async fn handle(&self, context: &mut Context) -> Result<(), PipelineError> {
        self.sink.put(context).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        std::any::type_name::<K>()
    }
}
