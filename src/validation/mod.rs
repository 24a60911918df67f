//! Adapter for an external data-quality engine.
//!
//! The engine itself lives elsewhere; this module defines the rule-set it
//! receives, the report it returns, and the template a concrete adapter
//! fills in by supplying an [`ExecutionEngine`] for its data type.

pub mod rules;
pub mod types;
pub mod validator;

pub use rules::{Rule, RuleBuilder, RuleResult, RuleSet, RuleSetBuilder, ValidationReport};
pub use types::ValidationError;
pub use validator::{DataValidator, ExecutionEngine};

#[cfg(test)]
mod tests;
