use async_trait::async_trait;

use super::types::ProcessorError;
use crate::chain::{Context, Handler, PipelineError};
use crate::config::Configuration;

/// Transforms data found in, and written back to, the context.
#[async_trait]
pub trait Processor: Send + Sync {
    type Output: Send;

    async fn process(&self, context: &mut Context) -> Result<Self::Output, ProcessorError>;

    /// Settings the processor was constructed with, if any.
    fn config(&self) -> Option<&Configuration> {
        None
    }
}

/// Chain link that runs a [`Processor`].
///
/// The processor's return value is dropped; processors hand results to
/// later links through the context.
pub struct ProcessorChain<P> {
    processor: P,
}

impl<P> ProcessorChain<P>
where
    P: Processor,
{
    pub fn new(processor: P) -> Self {
        ProcessorChain { processor }
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn into_inner(self) -> P {
        self.processor
    }
}

#[async_trait]
impl<P> Handler<Context> for ProcessorChain<P>
where
    P: Processor,
{
    async fn handle(&self, context: &mut Context) -> Result<(), PipelineError> {
        self.processor.process(context).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        std::any::type_name::<P>()
    }
}
