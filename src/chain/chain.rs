use async_trait::async_trait;
use tracing::{debug, warn};

use super::handler::Handler;
use super::types::{ChainError, Context, PipelineError};

/// An ordered sequence of handlers run one after another against a shared
/// context.
///
/// The chain owns its handlers, so a handler can only be linked once and a
/// chain can never loop back onto itself.
///
/// # Example
///
/// ```rust,ignore
/// let mut chain = Chain::new(StartCount);
/// chain.link(AddOne).link(ShowCount);
///
/// let mut context = Context::new();
/// chain.execute(&mut context).await?;
/// ```
pub struct Chain<C = Context> {
    handlers: Vec<Box<dyn Handler<C>>>,
}

impl<C> Chain<C>
where
    C: Send,
{
    /// Creates a chain whose first link is `head`.
    pub fn new<H>(head: H) -> Self
    where
        H: Handler<C> + 'static,
    {
        Chain {
            handlers: vec![Box::new(head)],
        }
    }

    /// Appends `handler` as the new tail and returns the chain so further
    /// links can follow.
    pub fn link<H>(&mut self, handler: H) -> &mut Self
    where
        H: Handler<C> + 'static,
    {
        self.handlers.push(Box::new(handler));
        self
    }

    /// By-value form of [`link`](Self::link) for building a chain in one
    /// expression.
    pub fn then<H>(mut self, handler: H) -> Self
    where
        H: Handler<C> + 'static,
    {
        self.link(handler);
        self
    }

    /// Moves every handler of `other` behind the current tail, keeping
    /// their order.
    pub fn append(&mut self, other: Chain<C>) -> &mut Self {
        self.handlers.extend(other.handlers);
        self
    }

    /// Number of links in the chain.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Always `false`; a chain is built from at least one handler.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names in execution order.
    pub fn names(&self) -> Vec<&str> {
        self.handlers.iter().map(|handler| handler.name()).collect()
    }

    /// Runs every handler in link order against `context`.
    ///
    /// Stops at the first handler that fails and returns its error as is;
    /// the handlers after it are not run. Whatever the failed run already
    /// wrote into the context stays there.
    pub async fn execute(&self, context: &mut C) -> Result<(), PipelineError> {
        let total = self.handlers.len();
        for (position, handler) in self.handlers.iter().enumerate() {
            debug!(handler = handler.name(), position, total, "executing handler");
            if let Err(e) = handler.handle(context).await {
                warn!(handler = handler.name(), position, error = %e, "chain aborted");
                return Err(e);
            }
        }
        Ok(())
    }
}

impl<C> TryFrom<Vec<Box<dyn Handler<C>>>> for Chain<C>
where
    C: Send,
{
    type Error = ChainError;

    fn try_from(handlers: Vec<Box<dyn Handler<C>>>) -> Result<Self, Self::Error> {
        if handlers.is_empty() {
            return Err(ChainError::Empty);
        }
        Ok(Chain { handlers })
    }
}

#[async_trait]
impl<C> Handler<C> for Chain<C>
where
    C: Send,
{
    async fn handle(&self, context: &mut C) -> Result<(), PipelineError> {
        self.execute(context).await
    }

    fn name(&self) -> &str {
        "chain"
    }
}
