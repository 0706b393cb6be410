pub mod currencyapi;

pub use currencyapi::CurrencyApiClient;
