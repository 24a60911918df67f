pub mod types;
pub mod workflow;

pub use types::{EtlError, Phase, Step};
pub use workflow::{Etl, Workflow};
