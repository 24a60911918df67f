pub mod chain;
pub mod handler;
pub mod types;

pub use chain::Chain;
pub use handler::Handler;
pub use types::{ChainError, Context, PipelineError};
