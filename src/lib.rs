pub mod cli;
pub mod core;
pub mod providers;

pub use crate::core::config;

use crate::core::{ConversionPolicy, ConversionRequest, RateClient};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: f64,
        from: Option<String>,
        to: Option<String>,
    },
    Status,
    Currencies,
    Rates {
        base: Option<String>,
        codes: Vec<String>,
    },
    History {
        base: Option<String>,
        days: Option<u32>,
        codes: Vec<String>,
    },
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Builds the API client for commands that talk to the rate service.
fn rate_client(config: &config::AppConfig) -> Result<Arc<dyn RateClient>> {
    let provider = &config.providers.currencyapi;
    let client = providers::CurrencyApiClient::new(&provider.base_url, &config.api_key())
        .context("Failed to create currency API client")?;
    Ok(Arc::new(client))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("cambio starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!(base_url = %config.providers.currencyapi.base_url, "Loaded config");

    let normalize_codes =
        |codes: Vec<String>| -> Vec<String> { codes.iter().map(|c| normalize_code(c)).collect() };

    match command {
        AppCommand::Convert { amount, from, to } => {
            let from = normalize_code(from.as_deref().unwrap_or(&config.default_from));
            let to = normalize_code(to.as_deref().unwrap_or(&config.default_to));
            let policy = ConversionPolicy::new(rate_client(&config)?);
            let request = ConversionRequest::new(amount, &from, &to);
            cli::convert::run(&policy, &request)
                .await
                .with_context(|| format!("Failed to convert {from} to {to}"))?;
        }
        AppCommand::Status => {
            cli::status::run(rate_client(&config)?.as_ref()).await?;
        }
        AppCommand::Currencies => {
            cli::currencies::run(rate_client(&config)?.as_ref()).await?;
        }
        AppCommand::Rates { base, codes: targets } => {
            let base = normalize_code(base.as_deref().unwrap_or(&config.default_from));
            let client = rate_client(&config)?;
            cli::rates::run(client.as_ref(), &base, &normalize_codes(targets)).await?;
        }
        AppCommand::History {
            base,
            days,
            codes: targets,
        } => {
            let base = normalize_code(base.as_deref().unwrap_or(&config.default_from));
            let days = days.unwrap_or(config.history_days);
            cli::history::run(&base, &normalize_codes(targets), days)?;
        }
    }
    Ok(())
}
