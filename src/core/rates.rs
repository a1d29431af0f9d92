//! Rate snapshots and the provider abstraction that fetches them

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;

/// Failure of a single snapshot fetch. Every variant is terminal for that call.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Schema(String),
    #[error("rate service returned an error: {error_type}")]
    Service { error_type: String },
}

const PIVOT_RATE_TOLERANCE: f64 = 1e-9;

/// Exchange rates relative to a single pivot currency, as returned by one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    pivot_code: String,
    rates: HashMap<String, f64>,
    fetched_at: String,
}

impl RateSnapshot {
    /// Builds a snapshot, rejecting rate maps that cannot back a conversion.
    ///
    /// The pivot must be present with a rate of 1, and every rate must be finite
    /// and positive.
    pub fn new(
        pivot_code: &str,
        rates: HashMap<String, f64>,
        fetched_at: &str,
    ) -> Result<Self, FetchError> {
        match rates.get(pivot_code) {
            None => {
                return Err(FetchError::Schema(format!(
                    "rates do not include pivot currency {pivot_code}"
                )));
            }
            Some(rate) if (rate - 1.0).abs() > PIVOT_RATE_TOLERANCE => {
                return Err(FetchError::Schema(format!(
                    "pivot currency {pivot_code} has rate {rate}, expected 1"
                )));
            }
            Some(_) => {}
        }
        if let Some((code, rate)) = rates
            .iter()
            .find(|(_, rate)| !rate.is_finite() || **rate <= 0.0)
        {
            return Err(FetchError::Schema(format!(
                "rate for {code} is not a positive number: {rate}"
            )));
        }

        Ok(Self {
            pivot_code: pivot_code.to_string(),
            rates,
            fetched_at: fetched_at.to_string(),
        })
    }

    pub fn pivot_code(&self) -> &str {
        &self.pivot_code
    }

    pub fn rates(&self) -> &HashMap<String, f64> {
        &self.rates
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Raw timestamp string as reported by the service.
    pub fn fetched_at(&self) -> &str {
        &self.fetched_at
    }

    /// Timestamp parsed as RFC 2822, the format the service uses.
    pub fn fetched_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc2822(&self.fetched_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<RateSnapshot, FetchError>;
}
