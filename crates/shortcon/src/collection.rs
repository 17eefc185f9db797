use std::fmt;
use std::ops::Index;

use indexmap::IndexMap;
use serde_json::Value;
use shortcon_core::{ConError, ConResult};
use tracing::debug;

use crate::names::validate_names;

/// Label used when the caller does not name the collection.
pub const DEFAULT_LABEL: &str = "ShortCon";

/// Read-only mapping operations that a field of the same name can shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingOp {
    /// `keys()`: all names in order.
    Keys,
    /// `values()`: all values in order.
    Values,
    /// `get()`: lookup that never fails on a missing name.
    Get,
}

impl MappingOp {
    /// Every shadowable operation.
    pub const ALL: [MappingOp; 3] = [MappingOp::Keys, MappingOp::Values, MappingOp::Get];

    /// The field name that shadows this operation.
    pub const fn as_str(self) -> &'static str {
        match self {
            MappingOp::Keys => "keys",
            MappingOp::Values => "values",
            MappingOp::Get => "get",
        }
    }
}

/// Which convenience operations survived construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Capabilities {
    keys: bool,
    values: bool,
    get: bool,
}

impl Capabilities {
    fn probe<V>(entries: &IndexMap<String, V>) -> Self {
        Self {
            keys: !entries.contains_key(MappingOp::Keys.as_str()),
            values: !entries.contains_key(MappingOp::Values.as_str()),
            get: !entries.contains_key(MappingOp::Get.as_str()),
        }
    }

    fn allows(&self, op: MappingOp) -> bool {
        match op {
            MappingOp::Keys => self.keys,
            MappingOp::Values => self.values,
            MappingOp::Get => self.get,
        }
    }
}

/// Immutable, ordered collection of named constants.
///
/// Built once by the factory functions and never modified afterwards. Every
/// name is a unique identifier-like string; iteration follows declaration
/// order. Besides field access through [`attr`](Self::attr), the collection
/// exposes the read-only mapping operations [`keys`](Self::keys),
/// [`values`](Self::values) and [`get`](Self::get) unless a constant uses one
/// of those names, in which case the constant wins and the operation reports
/// [`ConError::OperationShadowed`].
#[derive(Clone)]
pub struct Constants<V> {
    label: String,
    entries: IndexMap<String, V>,
    caps: Capabilities,
}

impl<V> Constants<V> {
    /// Builds a collection from parallel names and values.
    pub(crate) fn from_parts(
        label: impl Into<String>,
        names: Vec<String>,
        values: Vec<V>,
    ) -> ConResult<Self> {
        debug_assert_eq!(names.len(), values.len());
        if names.is_empty() {
            return Err(ConError::empty(names));
        }
        validate_names(&names)?;

        let label = label.into();
        let entries: IndexMap<String, V> = names.into_iter().zip(values).collect();
        let caps = Capabilities::probe(&entries);
        debug!(label = %label, fields = entries.len(), "Built constants collection");
        Ok(Self {
            label,
            entries,
            caps,
        })
    }

    /// Builds a collection from a mapping, validating its names.
    pub fn from_map(label: impl Into<String>, map: IndexMap<String, V>) -> ConResult<Self> {
        if map.is_empty() {
            return Err(ConError::empty(Value::Object(Default::default())));
        }
        let (names, values): (Vec<String>, Vec<V>) = map.into_iter().unzip();
        Self::from_parts(label, names, values)
    }

    /// Display label of the collection.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Field access: the value named `name`, shadowing nothing.
    pub fn attr(&self, name: &str) -> Option<&V> {
        self.entries.get(name)
    }

    /// Indexed lookup that fails with [`ConError::MissingKey`].
    pub fn item(&self, name: &str) -> ConResult<&V> {
        self.entries
            .get(name)
            .ok_or_else(|| ConError::missing_key(name))
    }

    /// Number of constants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether `name` is one of the constants.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates names in declaration order. Unlike [`keys`](Self::keys) this
    /// is never shadowed.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Returns whether `op` is available on this collection.
    pub fn has_operation(&self, op: MappingOp) -> bool {
        self.caps.allows(op)
    }

    fn require(&self, op: MappingOp) -> ConResult<()> {
        if self.caps.allows(op) {
            Ok(())
        } else {
            Err(ConError::shadowed(op.as_str()))
        }
    }

    /// All names, in order.
    pub fn keys(&self) -> ConResult<Vec<&str>> {
        self.require(MappingOp::Keys)?;
        Ok(self.names().collect())
    }

    /// All values, aligned with [`keys`](Self::keys).
    pub fn values(&self) -> ConResult<Vec<&V>> {
        self.require(MappingOp::Values)?;
        Ok(self.entries.values().collect())
    }

    /// The value named `name`, or `None`.
    pub fn get(&self, name: &str) -> ConResult<Option<&V>> {
        self.require(MappingOp::Get)?;
        Ok(self.entries.get(name))
    }

    /// The value named `name`, or `default`.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a V) -> ConResult<&'a V> {
        Ok(self.get(name)?.unwrap_or(default))
    }

    /// Copies the constants into an ordered mapping.
    pub fn to_map(&self) -> IndexMap<String, V>
    where
        V: Clone,
    {
        self.entries.clone()
    }

    /// Consumes the collection into an ordered mapping.
    pub fn into_map(self) -> IndexMap<String, V> {
        self.entries
    }
}

impl<V: PartialEq> PartialEq for Constants<V> {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.entries.len() == other.entries.len()
            && self.entries.iter().eq(other.entries.iter())
    }
}

impl<V: Eq> Eq for Constants<V> {}

impl<V: fmt::Debug> fmt::Debug for Constants<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        map.entries(self.entries.iter());
        map.finish()
    }
}

/// Renders `Label(NAME=value, ...)`.
impl<V: fmt::Debug> fmt::Display for Constants<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.label)?;
        for (idx, (name, value)) in self.entries.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value:?}")?;
        }
        write!(f, ")")
    }
}

impl<V> Index<&str> for Constants<V> {
    type Output = V;

    fn index(&self, name: &str) -> &V {
        match self.entries.get(name) {
            Some(value) => value,
            None => panic!("{}", ConError::missing_key(name)),
        }
    }
}

impl<V> TryFrom<IndexMap<String, V>> for Constants<V> {
    type Error = ConError;

    fn try_from(map: IndexMap<String, V>) -> Result<Self, Self::Error> {
        Constants::from_map(DEFAULT_LABEL, map)
    }
}

/// Borrowing iterator over `(name, value)` pairs.
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: indexmap::map::Iter<'a, String, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name.as_str(), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<'a, V> IntoIterator for &'a Constants<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for Constants<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
