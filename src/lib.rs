//! # dataops-rust
//!
//! Building blocks for data-processing pipelines.
//!
//! ## Features
//!
//! - **Role contracts** for processors, sources, sinks and stores
//! - **Handler chains** that run links in order against a shared context
//! - **ETL workflows** with typed configuration injection
//! - **Validation adapter** for plugging in an external data-quality engine
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dataops_rust::chain::{Chain, Context};
//! use dataops_rust::role::{ProcessorChain, SinkChain, SourceChain};
//!
//! let chain = Chain::new(SourceChain::new(orders, "orders"))
//!     .then(ProcessorChain::new(Deduplicate))
//!     .then(SinkChain::new(warehouse));
//!
//! let mut context = Context::new();
//! chain.execute(&mut context).await?;
//! ```
//!
//! ## Modules
//!
//! - [`chain`] - Handler chains and the shared context
//! - [`role`] - Processor, Source, Sink and Store contracts
//! - [`config`] - Configuration mappings and parameter binding
//! - [`etl`] - Extract-transform-load workflow
//! - [`validation`] - Data-quality engine adapter

pub mod chain;
pub mod config;
pub mod etl;
pub mod role;
pub mod validation;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
