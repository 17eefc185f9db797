//! Structured error types shared across shortcon crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Message used when positional names and keyword pairs are mixed.
pub const ERR_MULTIPLE: &str = "Provide positional or keyword arguments, not both";
/// Message used when normalization yields no names.
pub const ERR_NONE: &str = "No names/values given";
/// Message used when the input is not a mapping, string, or sequence.
pub const ERR_TYPE: &str = "constants() argument must be a mapping, str, list, or tuple";
/// Message used when a value strategy is requested alongside explicit values.
pub const ERR_STRATEGY_WITH_VALUES: &str =
    "A value strategy cannot be combined with explicit values";
/// Message used when a value strategy token is not recognized.
pub const ERR_VALUE: &str = "Invalid value strategy";
/// Message used when a lookup by name misses.
pub const ERR_KEY: &str = "No constant with that name";
/// Message used when a name is not identifier-like.
pub const ERR_NAME: &str = "Constant names must be valid identifiers";
/// Message used when a name appears twice.
pub const ERR_DUPLICATE: &str = "Constant name duplicated";
/// Message used when a convenience operation is shadowed by a field.
pub const ERR_SHADOWED: &str = "Operation is shadowed by a constant of the same name";
/// Message used when `start + step * index` leaves the 64-bit range.
pub const ERR_OVERFLOW: &str = "Enumerated value does not fit in a 64-bit integer";
/// Message used when a derived value cannot be held by the value type.
pub const ERR_UNREPRESENTABLE: &str = "Value strategy produced a value the value type cannot hold";

/// Structured payload attached to every [`ConError`] variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Offending inputs and related book-keeping, kept as structured values.
    #[serde(default)]
    pub context: BTreeMap<String, Value>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Returns the context entry stored under `key`, if any.
    pub fn context_value(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

/// Coarse classification of failures, following the usual
/// type / value / key split of dynamic constant factories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The input had the wrong shape, or an operation was used on a value.
    Type,
    /// The input had the right shape but an unacceptable value.
    Value,
    /// A lookup by name missed.
    Key,
}

/// Canonical error type for the constants factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum ConError {
    /// Positional names and keyword pairs were supplied together, or a
    /// value strategy was requested alongside explicit values.
    #[error("mutually exclusive input: {0}")]
    MutuallyExclusiveInput(ErrorInfo),
    /// Normalization produced zero names.
    #[error("empty input: {0}")]
    EmptyInput(ErrorInfo),
    /// The input was not a mapping, string, or sequence of names.
    #[error("unsupported input type: {0}")]
    UnsupportedInputType(ErrorInfo),
    /// A value strategy token was not recognized.
    #[error("unknown value strategy: {0}")]
    UnknownValueStrategy(ErrorInfo),
    /// Indexed lookup on a built collection missed.
    #[error("missing key: {0}")]
    MissingKey(ErrorInfo),
    /// A name is not identifier-like.
    #[error("invalid name: {0}")]
    InvalidName(ErrorInfo),
    /// A name appears more than once.
    #[error("duplicate name: {0}")]
    DuplicateName(ErrorInfo),
    /// A convenience operation was called while a field of that name exists.
    #[error("operation shadowed: {0}")]
    OperationShadowed(ErrorInfo),
    /// An enumerated value overflowed.
    #[error("enumeration overflow: {0}")]
    EnumerationOverflow(ErrorInfo),
    /// A built-in strategy derived a value the value type cannot represent.
    #[error("unrepresentable value: {0}")]
    UnrepresentableValue(ErrorInfo),
}

impl ConError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            ConError::MutuallyExclusiveInput(info)
            | ConError::EmptyInput(info)
            | ConError::UnsupportedInputType(info)
            | ConError::UnknownValueStrategy(info)
            | ConError::MissingKey(info)
            | ConError::InvalidName(info)
            | ConError::DuplicateName(info)
            | ConError::OperationShadowed(info)
            | ConError::EnumerationOverflow(info)
            | ConError::UnrepresentableValue(info) => info,
        }
    }

    /// Returns the stable code of the payload.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Classifies the error into the type / value / key families.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConError::MutuallyExclusiveInput(_)
            | ConError::UnsupportedInputType(_)
            | ConError::OperationShadowed(_)
            | ConError::UnrepresentableValue(_) => ErrorKind::Type,
            ConError::EmptyInput(_)
            | ConError::EnumerationOverflow(_)
            | ConError::UnknownValueStrategy(_)
            | ConError::InvalidName(_)
            | ConError::DuplicateName(_) => ErrorKind::Value,
            ConError::MissingKey(_) => ErrorKind::Key,
        }
    }

    /// Positional names and keyword names were both given.
    pub fn mutually_exclusive(names: &[String], kws: &[String]) -> Self {
        ConError::MutuallyExclusiveInput(
            ErrorInfo::new("mutually-exclusive-input", ERR_MULTIPLE)
                .with_context("names", names.to_vec())
                .with_context("kws", kws.to_vec()),
        )
    }

    /// A value strategy other than identity was requested for input that
    /// already supplies its values.
    pub fn strategy_with_values(strategy: &str, attrs: impl Into<Value>) -> Self {
        ConError::MutuallyExclusiveInput(
            ErrorInfo::new("strategy-with-values", ERR_STRATEGY_WITH_VALUES)
                .with_context("strategy", strategy)
                .with_context("attrs", attrs),
        )
    }

    /// No names survived normalization of `attrs`.
    pub fn empty(attrs: impl Into<Value>) -> Self {
        ConError::EmptyInput(ErrorInfo::new("empty-input", ERR_NONE).with_context("attrs", attrs))
    }

    /// `attrs` has a shape the factory cannot read names from.
    pub fn unsupported(attrs: impl Into<Value>) -> Self {
        ConError::UnsupportedInputType(
            ErrorInfo::new("unsupported-input-type", ERR_TYPE).with_context("attrs", attrs),
        )
    }

    /// `token` does not name a built-in value strategy.
    pub fn unknown_strategy(token: &str) -> Self {
        ConError::UnknownValueStrategy(
            ErrorInfo::new("unknown-value-strategy", format!("{ERR_VALUE}: {token:?}"))
                .with_context("token", token)
                .with_hint("expected one of: identity, name, lower, upper, enum, enumerated"),
        )
    }

    /// `key` is not one of the collection's names.
    pub fn missing_key(key: &str) -> Self {
        ConError::MissingKey(ErrorInfo::new("missing-key", ERR_KEY).with_context("key", key))
    }

    /// `name` is not identifier-like.
    pub fn invalid_name(name: &str, index: usize) -> Self {
        ConError::InvalidName(
            ErrorInfo::new("invalid-name", ERR_NAME)
                .with_context("name", name)
                .with_context("index", index),
        )
    }

    /// `name` was declared twice.
    pub fn duplicate_name(name: &str, index: usize) -> Self {
        ConError::DuplicateName(
            ErrorInfo::new("duplicate-name", ERR_DUPLICATE)
                .with_context("name", name)
                .with_context("index", index),
        )
    }

    /// `operation` is unavailable because a field uses its name.
    pub fn shadowed(operation: &str) -> Self {
        ConError::OperationShadowed(
            ErrorInfo::new("operation-shadowed", ERR_SHADOWED)
                .with_context("operation", operation)
                .with_hint(format!("read the field with attr({operation:?}) instead")),
        )
    }

    /// `start + step * index` does not fit in an `i64`.
    pub fn enumeration_overflow(start: i64, step: i64, index: usize) -> Self {
        ConError::EnumerationOverflow(
            ErrorInfo::new("enumeration-overflow", ERR_OVERFLOW)
                .with_context("start", start)
                .with_context("step", step)
                .with_context("index", index),
        )
    }

    /// `strategy` derived `value`, which `value_type` cannot hold.
    pub fn unrepresentable(strategy: &str, value_type: &str, value: impl Into<Value>) -> Self {
        ConError::UnrepresentableValue(
            ErrorInfo::new("unrepresentable-value", ERR_UNREPRESENTABLE)
                .with_context("strategy", strategy)
                .with_context("value_type", value_type)
                .with_context("value", value)
                .with_hint("use a custom value function for this value type"),
        )
    }
}
