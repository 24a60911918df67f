use async_trait::async_trait;

use super::types::{Context, PipelineError};

/// A single link of a [`Chain`](super::Chain).
///
/// A handler performs its own action against the shared context and
/// returns. Moving on to the next link is the chain's job, so a handler
/// never needs to know what follows it.
#[async_trait]
pub trait Handler<C = Context>: Send + Sync
where
    C: Send,
{
    /// Runs this handler's action.
    async fn handle(&self, context: &mut C) -> Result<(), PipelineError>;

    /// Name used when logging the chain's progress.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

#[async_trait]
impl<C, F> Handler<C> for F
where
    C: Send,
    F: Fn(&mut C) -> Result<(), PipelineError> + Send + Sync,
{
    async fn handle(&self, context: &mut C) -> Result<(), PipelineError> {
        self(context)
    }
}
