use indexmap::IndexMap;
use serde_json::Value;
use shortcon_core::{ConError, ConResult};
use tracing::trace;

use crate::names::split_names;

/// Input shapes accepted by [`constants`](crate::constants).
#[derive(Debug, Clone, PartialEq)]
pub enum Attrs<V> {
    /// Names mapped to their values; values are used verbatim.
    Mapping(IndexMap<String, V>),
    /// Whitespace-delimited names.
    Text(String),
    /// Names used as-is, one per element.
    Sequence(Vec<String>),
}

impl<V> Attrs<V> {
    /// Short label for the input shape, used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            Attrs::Mapping(_) => "mapping",
            Attrs::Text(_) => "text",
            Attrs::Sequence(_) => "sequence",
        }
    }

    /// Returns whether values are supplied by the input itself.
    pub fn has_values(&self) -> bool {
        matches!(self, Attrs::Mapping(_))
    }

    /// JSON description of the declared names, attached to error payloads.
    pub(crate) fn describe(&self) -> Value {
        match self {
            Attrs::Mapping(map) => Value::from(map.keys().cloned().collect::<Vec<_>>()),
            Attrs::Text(text) => Value::from(text.as_str()),
            Attrs::Sequence(names) => Value::from(names.clone()),
        }
    }

    /// Returns whether the input declares no names at all.
    fn declares_nothing(&self) -> bool {
        match self {
            Attrs::Mapping(map) => map.is_empty(),
            Attrs::Text(text) => text.split_whitespace().next().is_none(),
            Attrs::Sequence(names) => names.is_empty(),
        }
    }

    /// Reduces the input to parallel names and (optional) values.
    pub(crate) fn normalize(self) -> ConResult<NamingSpec<V>> {
        if self.declares_nothing() {
            return Err(ConError::empty(self.describe()));
        }
        let shape = self.shape();
        let spec = match self {
            Attrs::Mapping(map) => {
                let (names, values): (Vec<String>, Vec<V>) = map.into_iter().unzip();
                NamingSpec {
                    names,
                    values: Some(values),
                }
            }
            Attrs::Text(text) => NamingSpec {
                names: split_names([text]),
                values: None,
            },
            Attrs::Sequence(names) => NamingSpec { names, values: None },
        };
        trace!(shape, names = spec.names.len(), "Normalized constants input");
        Ok(spec)
    }
}

impl Attrs<Value> {
    /// Reads an input shape from dynamically typed JSON.
    ///
    /// Objects become mappings, strings become whitespace-delimited names and
    /// arrays of strings become sequences. Anything else, including arrays
    /// holding non-string elements, is rejected with
    /// [`ConError::UnsupportedInputType`] carrying the offending value.
    pub fn from_json(value: Value) -> ConResult<Self> {
        match value {
            Value::Object(object) => Ok(Attrs::Mapping(object.into_iter().collect())),
            Value::String(text) => Ok(Attrs::Text(text)),
            Value::Array(items) if items.iter().all(Value::is_string) => Ok(Attrs::Sequence(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(name) => Some(name),
                        _ => None,
                    })
                    .collect(),
            )),
            other => Err(ConError::unsupported(other)),
        }
    }
}

impl TryFrom<Value> for Attrs<Value> {
    type Error = ConError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Attrs::from_json(value)
    }
}

impl<V> From<IndexMap<String, V>> for Attrs<V> {
    fn from(map: IndexMap<String, V>) -> Self {
        Attrs::Mapping(map)
    }
}

impl<V> From<&str> for Attrs<V> {
    fn from(text: &str) -> Self {
        Attrs::Text(text.to_owned())
    }
}

impl<V> From<String> for Attrs<V> {
    fn from(text: String) -> Self {
        Attrs::Text(text)
    }
}

impl<V> From<Vec<String>> for Attrs<V> {
    fn from(names: Vec<String>) -> Self {
        Attrs::Sequence(names)
    }
}

impl<V> From<Vec<&str>> for Attrs<V> {
    fn from(names: Vec<&str>) -> Self {
        Attrs::Sequence(names.into_iter().map(str::to_owned).collect())
    }
}

impl<V> From<&[&str]> for Attrs<V> {
    fn from(names: &[&str]) -> Self {
        Attrs::Sequence(names.iter().map(|name| (*name).to_owned()).collect())
    }
}

impl<V, const N: usize> From<[&str; N]> for Attrs<V> {
    fn from(names: [&str; N]) -> Self {
        Attrs::Sequence(names.iter().map(|name| (*name).to_owned()).collect())
    }
}

/// Parallel names and values produced by normalization. `values` is `None`
/// when they still have to be derived from the names.
#[derive(Debug)]
pub(crate) struct NamingSpec<V> {
    pub(crate) names: Vec<String>,
    pub(crate) values: Option<Vec<V>>,
}
