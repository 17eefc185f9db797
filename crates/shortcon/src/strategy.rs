use std::any::type_name;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;
use shortcon_core::{ConError, ConResult};

/// Signature of a caller-supplied value function: `(index, name) -> value`.
pub type ValueFn<V> = Arc<dyn Fn(usize, &str) -> V + Send + Sync>;

/// Default first value of an enumeration.
pub const DEFAULT_START: i64 = 1;
/// Default increment between enumerated values.
pub const DEFAULT_STEP: i64 = 1;

/// Rule used to compute a value for each name when the input supplies none.
pub enum ValueStrategy<V> {
    /// The value is the name itself.
    Identity,
    /// The value is the lower-cased name.
    Lower,
    /// The value is the upper-cased name.
    Upper,
    /// The value is `start + step * index`.
    Enumerated {
        /// Value of the first name.
        start: i64,
        /// Increment applied per position.
        step: i64,
    },
    /// The value is computed by a caller-supplied function.
    Custom(ValueFn<V>),
}

impl<V> ValueStrategy<V> {
    /// Enumeration starting at `start` and advancing by `step`.
    pub fn enumerated(start: i64, step: i64) -> Self {
        ValueStrategy::Enumerated { start, step }
    }

    /// Wraps a function of `(index, name)`.
    pub fn custom<F>(func: F) -> Self
    where
        F: Fn(usize, &str) -> V + Send + Sync + 'static,
    {
        ValueStrategy::Custom(Arc::new(func))
    }

    /// Parses one of the built-in strategy tokens: `identity` (or `name`),
    /// `lower`, `upper`, `enum` (or `enumerated`, using the default start and
    /// step).
    pub fn parse(token: &str) -> ConResult<Self> {
        match token {
            "identity" | "name" => Ok(ValueStrategy::Identity),
            "lower" => Ok(ValueStrategy::Lower),
            "upper" => Ok(ValueStrategy::Upper),
            "enum" | "enumerated" => Ok(ValueStrategy::enumerated(DEFAULT_START, DEFAULT_STEP)),
            other => Err(ConError::unknown_strategy(other)),
        }
    }

    /// Canonical token for the strategy.
    pub fn token(&self) -> &'static str {
        match self {
            ValueStrategy::Identity => "identity",
            ValueStrategy::Lower => "lower",
            ValueStrategy::Upper => "upper",
            ValueStrategy::Enumerated { .. } => "enum",
            ValueStrategy::Custom(_) => "custom",
        }
    }

    /// Returns whether values are the names themselves.
    pub fn is_identity(&self) -> bool {
        matches!(self, ValueStrategy::Identity)
    }

    /// Computes the value of the name at `index`.
    ///
    /// Built-in strategies go through [`DerivedValue`]; a value the type
    /// cannot hold fails with [`ConError::UnrepresentableValue`]. Custom
    /// functions are called as-is.
    pub fn value_for(&self, index: usize, name: &str) -> ConResult<V>
    where
        V: DerivedValue,
    {
        match self {
            ValueStrategy::Identity => self.named(name),
            ValueStrategy::Lower => self.named(&name.to_lowercase()),
            ValueStrategy::Upper => self.named(&name.to_uppercase()),
            ValueStrategy::Enumerated { start, step } => {
                let value = enumerate(*start, *step, index)?;
                V::from_index(value).ok_or_else(|| {
                    ConError::unrepresentable(self.token(), type_name::<V>(), value)
                })
            }
            ValueStrategy::Custom(func) => Ok(func(index, name)),
        }
    }

    fn named(&self, name: &str) -> ConResult<V>
    where
        V: DerivedValue,
    {
        V::from_name(name)
            .ok_or_else(|| ConError::unrepresentable(self.token(), type_name::<V>(), name))
    }

    /// Computes values for every name, in order.
    pub fn derive(&self, names: &[String]) -> ConResult<Vec<V>>
    where
        V: DerivedValue,
    {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| self.value_for(index, name))
            .collect()
    }
}

/// Value at `index` of the sequence `start, start + step, ...`.
///
/// Fails with [`ConError::EnumerationOverflow`] when the result leaves the
/// `i64` range.
pub fn enumerate(start: i64, step: i64, index: usize) -> ConResult<i64> {
    i128::try_from(index)
        .ok()
        .and_then(|offset| i128::from(step).checked_mul(offset))
        .and_then(|offset| offset.checked_add(i128::from(start)))
        .and_then(|value| i64::try_from(value).ok())
        .ok_or_else(|| ConError::enumeration_overflow(start, step, index))
}

/// Value types the built-in strategies can produce.
///
/// Both conversions default to `None`, so any type can opt in with an empty
/// impl and still be built through a [`ValueStrategy::Custom`] function or a
/// mapping.
pub trait DerivedValue: Sized {
    /// Value for the name-based strategies (identity, lower, upper).
    fn from_name(_name: &str) -> Option<Self> {
        None
    }

    /// Value for the enumerated strategy.
    fn from_index(_value: i64) -> Option<Self> {
        None
    }
}

impl DerivedValue for String {
    fn from_name(name: &str) -> Option<Self> {
        Some(name.to_owned())
    }
}

impl DerivedValue for Box<str> {
    fn from_name(name: &str) -> Option<Self> {
        Some(name.into())
    }
}

impl DerivedValue for Arc<str> {
    fn from_name(name: &str) -> Option<Self> {
        Some(name.into())
    }
}

impl DerivedValue for Value {
    fn from_name(name: &str) -> Option<Self> {
        Some(Value::from(name))
    }

    fn from_index(value: i64) -> Option<Self> {
        Some(Value::from(value))
    }
}

macro_rules! derived_integer {
    ($($ty:ty),*) => {$(
        impl DerivedValue for $ty {
            fn from_index(value: i64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }
        }
    )*};
}

derived_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl DerivedValue for f64 {
    fn from_index(value: i64) -> Option<Self> {
        Some(value as f64)
    }
}

impl DerivedValue for f32 {
    fn from_index(value: i64) -> Option<Self> {
        Some(value as f32)
    }
}

impl<V> Default for ValueStrategy<V> {
    fn default() -> Self {
        ValueStrategy::Identity
    }
}

impl<V> Clone for ValueStrategy<V> {
    fn clone(&self) -> Self {
        match self {
            ValueStrategy::Identity => ValueStrategy::Identity,
            ValueStrategy::Lower => ValueStrategy::Lower,
            ValueStrategy::Upper => ValueStrategy::Upper,
            ValueStrategy::Enumerated { start, step } => ValueStrategy::Enumerated {
                start: *start,
                step: *step,
            },
            ValueStrategy::Custom(func) => ValueStrategy::Custom(Arc::clone(func)),
        }
    }
}

impl<V> fmt::Debug for ValueStrategy<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueStrategy::Identity => f.write_str("Identity"),
            ValueStrategy::Lower => f.write_str("Lower"),
            ValueStrategy::Upper => f.write_str("Upper"),
            ValueStrategy::Enumerated { start, step } => f
                .debug_struct("Enumerated")
                .field("start", start)
                .field("step", step)
                .finish(),
            ValueStrategy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<V> fmt::Display for ValueStrategy<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl<V> FromStr for ValueStrategy<V> {
    type Err = ConError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        ValueStrategy::parse(token)
    }
}
