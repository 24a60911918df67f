use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::parameters::{Bindings, Parameter, Parameters};
use super::types::ConfigError;

/// Named settings handed to a role or an ETL workflow at construction.
///
/// Values are kept as JSON and only interpreted by whoever binds them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: Map<String, Value>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Sets `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Resolves `parameters` against this configuration.
    ///
    /// Each parameter starts from its default, if it has one; a value stored
    /// under the parameter's exact name replaces it either way. Parameters
    /// left without a value are reported together in
    /// [`ConfigError::MissingParameters`].
    pub fn bind(&self, parameters: &[Parameter]) -> Result<Bindings, ConfigError> {
        let mut resolved = Vec::with_capacity(parameters.len());
        let mut missing = BTreeSet::new();

        for parameter in parameters {
            let value = self
                .values
                .get(parameter.name())
                .or(parameter.default())
                .cloned();

            match value {
                Some(value) => resolved.push((parameter.name().to_string(), value)),
                None => {
                    missing.insert(parameter.name().to_string());
                }
            }
        }

        if !missing.is_empty() {
            warn!(?missing, "missing required configuration parameters");
            return Err(ConfigError::MissingParameters(missing));
        }

        debug!(count = resolved.len(), "bound configuration parameters");
        Ok(Bindings::new(resolved))
    }

    /// Binds and builds `P` from the current values.
    ///
    /// Nothing is cached: a change to the configuration shows up in the
    /// next call.
    pub fn inject<P>(&self) -> Result<P, ConfigError>
    where
        P: Parameters,
    {
        let bindings = self.bind(&P::declare())?;
        P::from_bindings(bindings)
    }
}

impl From<Map<String, Value>> for Configuration {
    fn from(values: Map<String, Value>) -> Self {
        Configuration { values }
    }
}

impl TryFrom<Value> for Configuration {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(values) => Ok(Configuration { values }),
            Value::Null => Ok(Configuration::new()),
            Value::Bool(_) => Err(ConfigError::NotAnObject("a boolean")),
            Value::Number(_) => Err(ConfigError::NotAnObject("a number")),
            Value::String(_) => Err(ConfigError::NotAnObject("a string")),
            Value::Array(_) => Err(ConfigError::NotAnObject("an array")),
        }
    }
}

impl<K> FromIterator<(K, Value)> for Configuration
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Configuration {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
