use crate::core::currency::{AccountStatus, Currency, ExchangeRate, LatestRates, Quota, RateClient};
use crate::core::error::{Error, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::{debug, error, instrument};

#[derive(Deserialize, Debug)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize, Debug)]
struct StatusData {
    account_id: String,
    account_status: String,
    quotas: Quotas,
}

#[derive(Deserialize, Debug)]
struct Quotas {
    month: Quota,
}

#[derive(Deserialize, Debug)]
struct LatestResponse {
    meta: Option<LatestMeta>,
    data: HashMap<String, ExchangeRate>,
}

#[derive(Deserialize, Debug)]
struct LatestMeta {
    last_updated_at: Option<DateTime<Utc>>,
}

/// Client for the currencyapi.com v3 endpoints.
pub struct CurrencyApiClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl CurrencyApiClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        reqwest::Url::parse(base_url)
            .map_err(|e| Error::Network(format!("Invalid base URL {base_url}: {e}")))?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("cambio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(CurrencyApiClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            http,
        })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Requesting {}", url);

        let response = self
            .http
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                Error::Network(format!("Request error: {e} for {endpoint}"))
            })?;

        if !response.status().is_success() {
            return Err(Error::Network(format!(
                "HTTP error: {} for {endpoint}",
                response.status()
            )));
        }

        let text = response.text().await.map_err(|e| {
            let e = e.without_url();
            Error::Network(format!("Failed to read response for {endpoint}: {e}"))
        })?;

        serde_json::from_str(&text).map_err(|e| {
            error!(error = ?e, response = %text, "Failed to parse response");
            Error::Network(format!("Failed to parse JSON response for {endpoint}: {e}"))
        })
    }
}

#[async_trait]
impl RateClient for CurrencyApiClient {
    #[instrument(name = "CurrencyApiStatus", skip(self))]
    async fn get_status(&self) -> Result<AccountStatus> {
        let body: DataEnvelope<StatusData> = self.fetch("/status", &[]).await?;
        let status = AccountStatus {
            account_id: body.data.account_id,
            account_status: body.data.account_status,
            quota: body.data.quotas.month,
        };
        debug!(quota = ?status.quota, "Received account status");
        Ok(status)
    }

    #[instrument(name = "CurrencyApiCurrencies", skip(self))]
    async fn get_currencies(&self) -> Result<HashMap<String, Currency>> {
        let body: DataEnvelope<HashMap<String, Currency>> =
            self.fetch("/currencies", &[]).await?;
        debug!(count = body.data.len(), "Received currencies");
        Ok(body.data)
    }

    #[instrument(
        name = "CurrencyApiLatest",
        skip(self, targets),
        fields(base = %base)
    )]
    async fn get_latest_rates(&self, base: &str, targets: &[&str]) -> Result<LatestRates> {
        let mut params = vec![("base_currency", base.to_string())];
        if !targets.is_empty() {
            params.push(("currencies", targets.join(",")));
        }

        let body: LatestResponse = self.fetch("/latest", &params).await?;
        debug!(count = body.data.len(), "Received latest rates");
        Ok(LatestRates {
            base: base.to_string(),
            last_updated_at: body.meta.and_then(|m| m.last_updated_at),
            rates: body.data,
        })
    }
}
