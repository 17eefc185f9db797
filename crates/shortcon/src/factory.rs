use serde_json::Value;
use shortcon_core::{ConError, ConResult};
use tracing::debug;

use crate::attrs::Attrs;
use crate::collection::{Constants, DEFAULT_LABEL};
use crate::names::split_names;
use crate::strategy::{enumerate, DerivedValue, ValueStrategy, DEFAULT_START, DEFAULT_STEP};

/// Options for [`constants`].
#[derive(Debug, Clone)]
pub struct ConstantsConfig<V> {
    /// Display label; [`DEFAULT_LABEL`] when `None`.
    pub cls_name: Option<String>,
    /// How values are derived for inputs that only declare names.
    pub strategy: ValueStrategy<V>,
}

impl<V> Default for ConstantsConfig<V> {
    fn default() -> Self {
        Self {
            cls_name: None,
            strategy: ValueStrategy::Identity,
        }
    }
}

impl<V> ConstantsConfig<V> {
    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.cls_name = Some(label.into());
        self
    }

    /// Sets the value strategy.
    pub fn with_strategy(mut self, strategy: ValueStrategy<V>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Derives values with a function of `(index, name)`.
    pub fn with_value_fn<F>(self, func: F) -> Self
    where
        F: Fn(usize, &str) -> V + Send + Sync + 'static,
    {
        self.with_strategy(ValueStrategy::custom(func))
    }

    fn label(&self) -> &str {
        self.cls_name.as_deref().unwrap_or(DEFAULT_LABEL)
    }
}

/// Options for [`enumcons`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumOptions {
    /// Value of the first name.
    pub start: i64,
    /// Increment between consecutive names.
    pub step: i64,
    /// Display label; [`DEFAULT_LABEL`] when `None`.
    pub cls_name: Option<String>,
}

impl Default for EnumOptions {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            step: DEFAULT_STEP,
            cls_name: None,
        }
    }
}

impl EnumOptions {
    /// Enumeration with the given start and step.
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            start,
            step,
            cls_name: None,
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.cls_name = Some(label.into());
        self
    }
}

/// Arguments for [`cons_args`]: positional names or keyword pairs, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsArgs<V> {
    names: Vec<String>,
    kws: Vec<(String, V)>,
}

impl<V> Default for ConsArgs<V> {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            kws: Vec::new(),
        }
    }
}

impl<V> ConsArgs<V> {
    /// Empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one positional argument; it may hold several whitespace-delimited
    /// names.
    pub fn name(mut self, names: impl Into<String>) -> Self {
        self.names.push(names.into());
        self
    }

    /// Adds several positional arguments.
    pub fn names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Adds one keyword pair.
    pub fn kw(mut self, name: impl Into<String>, value: V) -> Self {
        self.kws.push((name.into(), value));
        self
    }

    /// Adds several keyword pairs.
    pub fn kws<I, K>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
    {
        self.kws
            .extend(pairs.into_iter().map(|(name, value)| (name.into(), value)));
        self
    }
}

/// Builds a collection from a mapping, string, or sequence of names.
///
/// Mappings supply their own values, so asking for any strategy other than
/// [`ValueStrategy::Identity`] alongside one is rejected with
/// [`ConError::MutuallyExclusiveInput`]. Names alone get their values from
/// `config.strategy`; see [`DerivedValue`] for which value types the built-in
/// strategies can produce.
///
/// ```
/// use shortcon::{constants, ConstantsConfig};
///
/// let config = ConstantsConfig::default().with_value_fn(|i, _| 0.5 * i as f64);
/// let halves = constants("ZERO HALF ONE", &config).unwrap();
/// assert_eq!(halves.attr("ONE"), Some(&1.0));
/// ```
pub fn constants<V, A>(attrs: A, config: &ConstantsConfig<V>) -> ConResult<Constants<V>>
where
    V: DerivedValue,
    A: Into<Attrs<V>>,
{
    let attrs = attrs.into();
    if attrs.has_values() && !config.strategy.is_identity() {
        return Err(reject(ConError::strategy_with_values(
            config.strategy.token(),
            attrs.describe(),
        )));
    }

    let spec = attrs.normalize().map_err(reject)?;
    let values = match spec.values {
        Some(values) => values,
        None => {
            debug!(strategy = %config.strategy, "Deriving constant values");
            config.strategy.derive(&spec.names).map_err(reject)?
        }
    };
    Constants::from_parts(config.label(), spec.names, values).map_err(reject)
}

/// Builds a collection from dynamically typed JSON input.
///
/// See [`Attrs::from_json`] for the accepted shapes.
pub fn constants_from_json(
    attrs: Value,
    config: &ConstantsConfig<Value>,
) -> ConResult<Constants<Value>> {
    let attrs = Attrs::from_json(attrs).map_err(reject)?;
    constants(attrs, config)
}

/// Builds a collection from positional names or keyword pairs.
///
/// Positional arguments are split on whitespace and become both names and
/// values. Keyword pairs are used verbatim. Supplying both fails with
/// [`ConError::MutuallyExclusiveInput`]; supplying neither fails with
/// [`ConError::EmptyInput`].
pub fn cons_args<V>(args: ConsArgs<V>) -> ConResult<Constants<V>>
where
    V: From<String>,
{
    let ConsArgs { names, kws } = args;
    match (names.is_empty(), kws.is_empty()) {
        (false, false) => {
            let kw_names: Vec<String> = kws.iter().map(|(name, _)| name.clone()).collect();
            Err(reject(ConError::mutually_exclusive(&names, &kw_names)))
        }
        (true, false) => from_pairs(kws),
        _ => {
            let split = split_names(&names);
            if split.is_empty() {
                return Err(reject(ConError::empty(names)));
            }
            let values = split.iter().cloned().map(V::from).collect();
            Constants::from_parts(DEFAULT_LABEL, split, values).map_err(reject)
        }
    }
}

/// Names-only constructor: every value equals its name.
///
/// ```
/// let pieces = shortcon::cons(["KING QUEEN ROOK"]).unwrap();
/// assert_eq!(pieces.attr("QUEEN").map(String::as_str), Some("QUEEN"));
/// assert_eq!(pieces.len(), 3);
/// ```
pub fn cons<I, S>(names: I) -> ConResult<Constants<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    cons_args(ConsArgs::new().names(names))
}

/// Keyword constructor: names mapped to values, used verbatim.
pub fn cons_kw<I, K, V>(pairs: I) -> ConResult<Constants<V>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
{
    from_pairs(
        pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect(),
    )
}

/// Enumerated constructor: the name at index `i` gets `start + step * i`.
///
/// Fails with [`ConError::EnumerationOverflow`] when a value leaves the
/// `i64` range.
pub fn enumcons<I, S>(names: I, options: &EnumOptions) -> ConResult<Constants<i64>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let raw: Vec<String> = names
        .into_iter()
        .map(|part| part.as_ref().to_owned())
        .collect();
    let split = split_names(&raw);
    if split.is_empty() {
        return Err(reject(ConError::empty(raw)));
    }
    let values = (0..split.len())
        .map(|index| enumerate(options.start, options.step, index))
        .collect::<ConResult<Vec<_>>>()
        .map_err(reject)?;
    let label = options.cls_name.as_deref().unwrap_or(DEFAULT_LABEL);
    Constants::from_parts(label, split, values).map_err(reject)
}

fn from_pairs<V>(pairs: Vec<(String, V)>) -> ConResult<Constants<V>> {
    if pairs.is_empty() {
        return Err(reject(ConError::empty(Value::Object(Default::default()))));
    }
    let (names, values): (Vec<String>, Vec<V>) = pairs.into_iter().unzip();
    Constants::from_parts(DEFAULT_LABEL, names, values).map_err(reject)
}

fn reject(err: ConError) -> ConError {
    debug!(code = err.code(), "Rejected constants input");
    err
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    #[test]
    fn config_label_defaults() {
        let config = ConstantsConfig::<Value>::default();
        assert_eq!(config.label(), DEFAULT_LABEL);
        assert_eq!(config.with_label("Pieces").label(), "Pieces");
    }

    #[test]
    fn args_builder_accumulates() {
        let args = ConsArgs::<String>::new().name("A B").names(["C"]);
        assert_eq!(args.names, ["A B", "C"]);
        assert!(args.kws.is_empty());
    }

    #[test]
    fn mapping_rejects_strategy() {
        let mut map = IndexMap::new();
        map.insert("A".to_string(), Value::from(1));
        let config = ConstantsConfig::default().with_strategy(ValueStrategy::Lower);
        let err = constants(map, &config).unwrap_err();
        assert_eq!(err.code(), "strategy-with-values");
        assert_eq!(err.info().context["strategy"], "lower");
    }

    #[test]
    fn blank_positional_keeps_raw_input() {
        let err = cons_args(ConsArgs::<String>::new().name("   ").name("\t")).unwrap_err();
        assert_eq!(err.code(), "empty-input");
        assert_eq!(err.info().context["attrs"], serde_json::json!(["   ", "\t"]));
    }
}
