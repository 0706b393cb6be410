//! Decides between live and fixed rates for a single conversion

use super::currency::RateClient;
use super::error::{Error, Result};
use super::fallback::FixedRateTable;
use chrono::{DateTime, Utc};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub to: String,
}

impl ConversionRequest {
    pub fn new(amount: f64, from: &str, to: &str) -> Self {
        Self {
            amount,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FallbackReason {
    QuotaExhausted,
    StatusUnavailable(String),
}

impl Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::QuotaExhausted => write!(f, "API quota exhausted"),
            FallbackReason::StatusUnavailable(e) => write!(f, "API status check failed: {e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RateSource {
    Live {
        last_updated_at: Option<DateTime<Utc>>,
    },
    Fallback {
        reason: FallbackReason,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub value: f64,
    pub rate: f64,
    pub source: RateSource,
}

impl ConversionResult {
    /// Freshness of the rate; always `None` for fixed rates.
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        match &self.source {
            RateSource::Live { last_updated_at } => *last_updated_at,
            RateSource::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, RateSource::Fallback { .. })
    }
}

pub struct ConversionPolicy {
    client: Arc<dyn RateClient>,
    table: FixedRateTable,
}

impl ConversionPolicy {
    pub fn new(client: Arc<dyn RateClient>) -> Self {
        Self::with_table(client, FixedRateTable::new())
    }

    pub fn with_table(client: Arc<dyn RateClient>, table: FixedRateTable) -> Self {
        Self { client, table }
    }

    #[instrument(
        name = "Convert",
        skip(self, request),
        fields(from = %request.from, to = %request.to)
    )]
    pub async fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        if request.amount.is_nan() || request.amount < 0.0 {
            return Err(Error::Validation(format!(
                "Value cannot be negative: {}",
                request.amount
            )));
        }

        // Quota is re-read on every attempt.
        match self.client.get_status().await {
            Ok(status) if status.quota.is_exhausted() => {
                warn!("API quota exhausted, using fixed rates");
                return self.fallback(request, FallbackReason::QuotaExhausted);
            }
            Ok(status) => {
                debug!(remaining = status.quota.remaining, "API quota available");
            }
            Err(e) => {
                warn!(error = %e, "API status check failed, using fixed rates");
                return self.fallback(request, FallbackReason::StatusUnavailable(e.to_string()));
            }
        }

        let currencies = self.client.get_currencies().await?;
        for code in [&request.from, &request.to] {
            if !currencies.contains_key(code.as_str()) {
                return Err(Error::Validation(format!(
                    "Invalid source or target currency: {code}"
                )));
            }
        }

        let latest = self
            .client
            .get_latest_rates(&request.from, &[request.to.as_str()])
            .await?;
        let rate = latest
            .rate(&request.to)
            .filter(|r| *r != 0.0)
            .ok_or_else(|| Error::DataUnavailable {
                from: request.from.clone(),
                to: request.to.clone(),
            })?;

        Ok(ConversionResult {
            amount: request.amount,
            from: request.from.clone(),
            to: request.to.clone(),
            value: request.amount * rate,
            rate,
            source: RateSource::Live {
                last_updated_at: latest.last_updated_at,
            },
        })
    }

    fn fallback(
        &self,
        request: &ConversionRequest,
        reason: FallbackReason,
    ) -> Result<ConversionResult> {
        let (value, rate) = self
            .table
            .convert(request.amount, &request.from, &request.to)?;
        Ok(ConversionResult {
            amount: request.amount,
            from: request.from.clone(),
            to: request.to.clone(),
            value,
            rate,
            source: RateSource::Fallback { reason },
        })
    }
}
