use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::rates::{FetchError, RateProvider, RateSnapshot};

/// Latest-rates client for the exchangerate-api.com v6 API.
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: String,
    pivot: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: &str, pivot: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            pivot: pivot.to_string(),
        }
    }

    fn url(&self, api_key: &str) -> String {
        format!("{}/{}/latest/{}", self.base_url, api_key, self.pivot)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    base_code: Option<String>,
    conversion_rates: HashMap<String, f64>,
    time_last_update_utc: String,
}

fn service_error(body: &str) -> Option<FetchError> {
    let envelope: ErrorEnvelope = serde_json::from_str(body).ok()?;
    if envelope.result.as_deref() != Some("error") {
        return None;
    }
    Some(FetchError::Service {
        error_type: envelope.error_type.unwrap_or_else(|| "unknown".to_string()),
    })
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(
        name = "ExchangeRateFetch",
        skip(self),
        fields(pivot = %self.pivot)
    )]
    async fn fetch_snapshot(&self) -> Result<RateSnapshot, FetchError> {
        let url = self.url(&self.api_key);
        debug!("Requesting latest rates from {}", self.url("***"));

        let client = reqwest::Client::builder()
            .user_agent("fxconv/1.0")
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(format!("request failed: {}", e.without_url())))?;

        let status = response.status();
        debug!(%status, "Received rates response");

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Network(format!("failed to read body: {}", e.without_url())))?;

        if let Some(err) = service_error(&text) {
            return Err(err);
        }
        if !status.is_success() {
            return Err(FetchError::Network(format!("HTTP error: {status}")));
        }

        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| FetchError::Schema(format!("failed to parse rates response: {e}")))?;

        if let Some(base_code) = data.base_code.as_deref()
            && base_code != self.pivot
        {
            return Err(FetchError::Schema(format!(
                "rates are based on {base_code}, expected {}",
                self.pivot
            )));
        }

        RateSnapshot::new(&self.pivot, data.conversion_rates, &data.time_last_update_utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE_RESPONSE: &str = r#"{
        "result": "success",
        "time_last_update_utc": "Fri, 27 Mar 2020 00:00:01 +0000",
        "base_code": "USD",
        "conversion_rates": {
            "USD": 1,
            "EUR": 0.9013,
            "GBP": 0.8156,
            "KES": 129.1
        }
    }"#;

    async fn create_mock_server(status: u16, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/test-key/latest/USD"))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .expect(1)
            .mount(&mock_server)
            .await;

        mock_server
    }

    fn provider_for(server: &MockServer) -> ExchangeRateApiProvider {
        ExchangeRateApiProvider::new(&server.uri(), "test-key", "USD")
    }

    #[tokio::test]
    async fn test_successful_snapshot_fetch() {
        let mock_server = create_mock_server(200, SAMPLE_RESPONSE).await;

        let snapshot = provider_for(&mock_server).fetch_snapshot().await.unwrap();
        assert_eq!(snapshot.pivot_code(), "USD");
        assert_eq!(snapshot.rate("USD"), Some(1.0));
        assert_eq!(snapshot.rate("EUR"), Some(0.9013));
        assert_eq!(snapshot.rates().len(), 4);
        assert_eq!(snapshot.fetched_at(), "Fri, 27 Mar 2020 00:00:01 +0000");
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let mock_server = create_mock_server(200, SAMPLE_RESPONSE).await;
        let provider =
            ExchangeRateApiProvider::new(&format!("{}/", mock_server.uri()), "test-key", "USD");
        assert!(provider.fetch_snapshot().await.is_ok());
    }

    #[tokio::test]
    async fn test_http_error_is_network_error() {
        let mock_server = create_mock_server(500, "").await;

        let result = provider_for(&mock_server).fetch_snapshot().await;
        let err = result.unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
        assert_eq!(
            err.to_string(),
            "network error: HTTP error: 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let provider = ExchangeRateApiProvider::new("http://127.0.0.1:9", "test-key", "USD");
        let result = provider.fetch_snapshot().await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn test_service_error_envelope() {
        let mock_server =
            create_mock_server(403, r#"{"result": "error", "error-type": "invalid-key"}"#).await;

        let err = provider_for(&mock_server).fetch_snapshot().await.unwrap_err();
        assert!(matches!(&err, FetchError::Service { error_type } if error_type == "invalid-key"));
        assert_eq!(
            err.to_string(),
            "rate service returned an error: invalid-key"
        );
    }

    #[tokio::test]
    async fn test_missing_rate_map_is_schema_error() {
        let mock_server = create_mock_server(
            200,
            r#"{"result": "success", "time_last_update_utc": "Fri, 27 Mar 2020 00:00:01 +0000"}"#,
        )
        .await;

        let err = provider_for(&mock_server).fetch_snapshot().await.unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
        assert!(err.to_string().contains("failed to parse rates response"));
    }

    #[tokio::test]
    async fn test_non_numeric_rate_is_schema_error() {
        let mock_server = create_mock_server(
            200,
            r#"{
                "time_last_update_utc": "Fri, 27 Mar 2020 00:00:01 +0000",
                "conversion_rates": {"USD": 1, "EUR": "0.9"}
            }"#,
        )
        .await;

        let result = provider_for(&mock_server).fetch_snapshot().await;
        assert!(matches!(result, Err(FetchError::Schema(_))));
    }

    #[tokio::test]
    async fn test_missing_pivot_rate_is_schema_error() {
        let mock_server = create_mock_server(
            200,
            r#"{
                "time_last_update_utc": "Fri, 27 Mar 2020 00:00:01 +0000",
                "conversion_rates": {"EUR": 0.9}
            }"#,
        )
        .await;

        let err = provider_for(&mock_server).fetch_snapshot().await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected response: rates do not include pivot currency USD"
        );
    }

    #[tokio::test]
    async fn test_non_unit_pivot_rate_is_schema_error() {
        let mock_server = create_mock_server(
            200,
            r#"{
                "base_code": "USD",
                "time_last_update_utc": "Fri, 27 Mar 2020 00:00:01 +0000",
                "conversion_rates": {"USD": 2, "EUR": 0.9}
            }"#,
        )
        .await;

        let err = provider_for(&mock_server).fetch_snapshot().await.unwrap_err();
        assert!(matches!(err, FetchError::Schema(_)));
        assert_eq!(
            err.to_string(),
            "unexpected response: pivot currency USD has rate 2, expected 1"
        );
    }

    #[tokio::test]
    async fn test_mismatched_base_code_is_schema_error() {
        let mock_server = create_mock_server(
            200,
            r#"{
                "base_code": "EUR",
                "time_last_update_utc": "Fri, 27 Mar 2020 00:00:01 +0000",
                "conversion_rates": {"USD": 1.1, "EUR": 1}
            }"#,
        )
        .await;

        let err = provider_for(&mock_server).fetch_snapshot().await.unwrap_err();
        assert!(err.to_string().contains("rates are based on EUR, expected USD"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_schema_error() {
        let mock_server = create_mock_server(200, "<html>not json</html>").await;

        let result = provider_for(&mock_server).fetch_snapshot().await;
        assert!(matches!(result, Err(FetchError::Schema(_))));
    }
}
