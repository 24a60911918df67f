use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::types::ConfigError;

/// A named input of a workflow step, optionally with a default value.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: String,
    default: Option<Value>,
}

impl Parameter {
    /// A parameter that must come from the configuration.
    pub fn required(name: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            default: None,
        }
    }

    /// A parameter that falls back to `default` when the configuration
    /// does not mention it.
    pub fn optional(name: impl Into<String>, default: impl Into<Value>) -> Self {
        Parameter {
            name: name.into(),
            default: Some(default.into()),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    #[inline]
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// Resolved parameter values in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    values: Vec<(String, Value)>,
}

impl Bindings {
    pub(crate) fn new(values: Vec<(String, Value)>) -> Self {
        Bindings { values }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(bound, _)| bound == name)
            .map(|(_, value)| value)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    /// Values in declaration order, the way a positional call sees them.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes `name` and deserializes its value as `T`.
    pub fn take<T>(&mut self, name: &str) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let position = self
            .values
            .iter()
            .position(|(bound, _)| bound == name)
            .ok_or_else(|| ConfigError::MissingParameters([name.to_string()].into()))?;
        let (name, value) = self.values.remove(position);
        serde_json::from_value(value).map_err(|source| ConfigError::InvalidParameter { name, source })
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.values.into_iter().collect()
    }
}

/// A typed set of step parameters.
///
/// Usually generated with [`parameters!`](crate::parameters); `()` stands
/// for a step that takes none.
pub trait Parameters: Sized {
    /// Declared parameters in declaration order.
    fn declare() -> Vec<Parameter>;

    /// Builds the value from bindings resolved against [`declare`](Self::declare).
    fn from_bindings(bindings: Bindings) -> Result<Self, ConfigError>;
}

impl Parameters for () {
    fn declare() -> Vec<Parameter> {
        Vec::new()
    }

    fn from_bindings(_bindings: Bindings) -> Result<Self, ConfigError> {
        Ok(())
    }
}

/// Declares a parameter struct and its [`Parameters`] implementation.
///
/// Fields written as `name: Type = default` are optional; the rest are
/// required. Defaults are stored as JSON, so they must be `Serialize`.
///
/// ```
/// use dataops_rust::config::Configuration;
/// use dataops_rust::parameters;
///
/// parameters! {
///     #[derive(Debug)]
///     pub struct ExtractParams {
///         pub path: String,
///         pub batch_size: u32 = 500,
///     }
/// }
///
/// let mut configuration = Configuration::new();
/// configuration.insert("path", "/data/in.csv");
///
/// let params: ExtractParams = configuration.inject().unwrap();
/// assert_eq!(params.path, "/data/in.csv");
/// assert_eq!(params.batch_size, 500);
/// ```
#[macro_export]
macro_rules! parameters {
    (@declare $field:ident) => {
        $crate::config::Parameter::required(::std::stringify!($field))
    };
    (@declare $field:ident, $default:expr) => {
        $crate::config::Parameter::optional(
            ::std::stringify!($field),
            $crate::__private::serde_json::json!($default),
        )
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty $(= $default:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::config::Parameters for $name {
            fn declare() -> ::std::vec::Vec<$crate::config::Parameter> {
                ::std::vec![
                    $( $crate::parameters!(@declare $field $(, $default)?) ),*
                ]
            }

            #[allow(unused_mut, unused_variables)]
            fn from_bindings(
                mut bindings: $crate::config::Bindings,
            ) -> ::std::result::Result<Self, $crate::config::ConfigError> {
                ::std::result::Result::Ok($name {
                    $( $field: bindings.take(::std::stringify!($field))?, )*
                })
            }
        }
    };
}
