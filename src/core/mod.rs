//! Core business logic abstractions

pub mod config;
pub mod currency;
pub mod error;
pub mod fallback;
pub mod history;
pub mod log;
pub mod policy;

// Re-export main types for cleaner imports
pub use currency::{AccountStatus, Currency, ExchangeRate, LatestRates, Quota, RateClient};
pub use error::Error;
pub use fallback::FixedRateTable;
pub use policy::{ConversionPolicy, ConversionRequest, ConversionResult, FallbackReason, RateSource};
