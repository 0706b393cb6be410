//! Error types for rate lookups and conversions

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Transport failure, non-success HTTP status or an unparsable body.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The API answered but carried no usable rate for the pair.
    #[error("Conversion rate not available for {from} -> {to}")]
    DataUnavailable { from: String, to: String },

    #[error("Conversion not supported with fixed rates: {from} -> {to}")]
    UnsupportedConversion { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, Error>;
