#![deny(missing_docs)]
#![doc = "Error surface shared by the shortcon constants factory."]

pub mod errors;

pub use errors::{ConError, ErrorInfo, ErrorKind};

/// Result alias used throughout the shortcon crates.
pub type ConResult<T> = Result<T, ConError>;
