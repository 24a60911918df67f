pub mod configuration;
pub mod parameters;
pub mod types;

pub use configuration::Configuration;
pub use parameters::{Bindings, Parameter, Parameters};
pub use types::ConfigError;
