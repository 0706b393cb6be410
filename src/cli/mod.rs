//! Terminal presentation of conversions, quota and rates

pub mod convert;
pub mod currencies;
pub mod history;
pub mod rates;
pub mod setup;
pub mod status;
pub mod ui;
