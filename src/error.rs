use thiserror::Error;

use crate::properties::PropertyKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiVaporError {
    /// No source with this label is registered for the property.
    #[error("Unknown {property} source: {label}")]
    UnknownSource { property: PropertyKind, label: String },

    /// The property name could not be parsed.
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// The temperature lies outside the range a source can be evaluated on.
    ///
    /// Raised under [`RangePolicy::Strict`](crate::RangePolicy::Strict), and
    /// always for tabulated sources outside their table.
    #[error("{property} source {label}: T = {temperature} K outside [{min}, {max}] K")]
    OutOfRange {
        property: PropertyKind,
        label: String,
        temperature: f64,
        min: f64,
        max: f64,
    },

    /// Invalid input, e.g. a non‑finite or non‑positive temperature.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, LiVaporError>;
