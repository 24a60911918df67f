//! Capability contracts for the four pipeline roles.
//!
//! | Role | Operations | Chain link |
//! |---|---|---|
//! | [`Processor`] | `process` | [`ProcessorChain`] |
//! | [`Source`] | `get`, `list` | [`SourceChain`] (runs `get`) |
//! | [`Sink`] | `put`, `delete` | [`SinkChain`] (runs `put`) |
//! | [`Store`] | `get`, `save`, `update`, `delete` | none |
//!
//! A type takes on a role by implementing its trait; there is no base type
//! to extend. The compiler performs the capability check, so a type that
//! leaves out a single operation is rejected:
//!
//! ```compile_fail
//! use async_trait::async_trait;
//! use dataops_rust::chain::Context;
//! use dataops_rust::role::{Sink, SinkError};
//!
//! struct PutOnly;
//!
//! #[async_trait]
//! impl Sink for PutOnly {
//!     type Receipt = ();
//!
//!     async fn put(&self, _context: &Context) -> Result<(), SinkError> {
//!         Ok(())
//!     }
//! }
//! ```
//!
//! and so is handing a type to a role it never implemented:
//!
//! ```compile_fail
//! use dataops_rust::role::{Source, SourceChain};
//!
//! struct Reader;
//!
//! impl Reader {
//!     fn get(&self) -> u32 {
//!         1
//!     }
//! }
//!
//! let _ = SourceChain::new(Reader, "data");
//! ```

pub mod processor;
pub mod sink;
pub mod source;
pub mod store;
pub mod types;

pub use processor::{Processor, ProcessorChain};
pub use sink::{Sink, SinkChain};
pub use source::{Source, SourceChain};
pub use store::Store;
pub use types::{ProcessorError, SinkError, SourceError, StoreError};
