#![deny(missing_docs)]
#![doc = "Immutable, ordered collections of named constants built from whitespace-delimited strings, sequences of names, or mappings."]

//! ```
//! use shortcon::{cons, enumcons, EnumOptions};
//!
//! let pieces = cons(["KING QUEEN ROOK"]).unwrap();
//! assert!(pieces.contains("QUEEN"));
//! assert_eq!(pieces.get_or("PAWN", &"none".to_string()).unwrap(), "none");
//!
//! let grades = enumcons(["A B C"], &EnumOptions::new(10, 5)).unwrap();
//! assert_eq!(grades.attr("C"), Some(&20));
//! ```

/// Input shapes and their normalization.
pub mod attrs;
/// The immutable collection type.
pub mod collection;
/// Entry points and their options.
pub mod factory;
/// Name splitting and validation.
pub mod names;
/// Serde support for [`Constants`].
#[path = "serde.rs"]
mod serde_impl;
/// Value derivation strategies.
pub mod strategy;

pub use attrs::Attrs;
pub use collection::{Constants, Iter, MappingOp, DEFAULT_LABEL};
pub use factory::{
    cons, cons_args, cons_kw, constants, constants_from_json, enumcons, ConsArgs, ConstantsConfig,
    EnumOptions,
};
pub use names::{is_identifier, split_names};
pub use shortcon_core::{ConError, ConResult, ErrorInfo, ErrorKind};
pub use strategy::{DerivedValue, ValueFn, ValueStrategy};
