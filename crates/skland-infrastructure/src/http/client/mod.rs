mod api;
mod attendance;
mod auth;
mod binding;
mod types;

pub use types::{
    RetryConfig, BINDING_PATH, CRED_CODE_PATH, GRANT_CODE_URL, RETRY_STATUS_CODES,
    SKLAND_API_BASE, SKLAND_APP_CODE, USER_AGENT,
};

use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;

use skland_domain::DomainError;

use crate::config::TimeoutConfig;
use types::{truncate, RetryableStatus};

/// Which failures a request may be retried on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RetryOn {
    /// Connect errors, timeouts and [`RETRY_STATUS_CODES`]; for idempotent GETs
    Transient,
    /// Connect errors only; a POST that reached the server is never resent
    ConnectOnly,
}

pub struct HttpClient {
    pub(super) client: Client,
    pub(super) retry_config: RetryConfig,
}

impl HttpClient {
    pub fn new(timeouts: &TimeoutConfig) -> Result<Self> {
        Self::with_retry_config(timeouts, RetryConfig::default())
    }

    pub fn with_retry_config(timeouts: &TimeoutConfig, retry_config: RetryConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeouts.http_request)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            retry_config,
        })
    }

    /// Execute a request with retry logic
    ///
    /// With [`RetryOn::Transient`] retries on:
    /// - Network errors (connection failures, timeouts)
    /// - HTTP 500, 502, 503 and 504
    ///
    /// With [`RetryOn::ConnectOnly`] only connection failures are retried.
    /// Any other status is never retried; the JSON body carries the API error.
    pub(super) async fn execute_with_retry<F, Fut, T>(
        &self,
        operation_name: &str,
        retry_on: RetryOn,
        mut request_fn: F,
    ) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut attempt = 0;
        let mut backoff_ms = self.retry_config.initial_backoff_ms;

        loop {
            attempt += 1;

            match request_fn().await {
                Ok(response) => {
                    if attempt > 1 {
                        debug!("{} succeeded after {} attempts", operation_name, attempt);
                    }
                    return Ok(response);
                }
                Err(e) => {
                    let should_retry =
                        attempt <= self.retry_config.max_retries
                        && Self::is_retryable_error(&e, retry_on);

                    if should_retry {
                        warn!(
                            "{} failed (attempt {}/{}): {}. Retrying in {}ms...",
                            operation_name, attempt, self.retry_config.max_retries, e, backoff_ms
                        );

                        sleep(Duration::from_millis(backoff_ms)).await;

                        // Exponential backoff with cap
                        backoff_ms = ((backoff_ms as f64 * self.retry_config.backoff_multiplier)
                            as u64)
                            .min(self.retry_config.max_backoff_ms);
                    } else {
                        if attempt > self.retry_config.max_retries {
                            warn!(
                                "{} failed after {} attempts",
                                operation_name, attempt
                            );
                        }
                        return Err(e);
                    }
                }
            }
        }
    }

    /// Check if an error is retryable
    fn is_retryable_error(error: &anyhow::Error, retry_on: RetryOn) -> bool {
        let reqwest_err = error.downcast_ref::<reqwest::Error>();
        if reqwest_err.is_some_and(|e| e.is_connect()) {
            return true;
        }
        if retry_on == RetryOn::ConnectOnly {
            return false;
        }

        if error.downcast_ref::<RetryableStatus>().is_some() {
            return true;
        }

        if let Some(reqwest_err) = reqwest_err {
            if reqwest_err.is_timeout() {
                return true;
            }

            if let Some(status) = reqwest_err.status() {
                return RETRY_STATUS_CODES.contains(&status.as_u16());
            }
        }

        false
    }

    /// Send the request built by `build_request` and decode its JSON body.
    ///
    /// The builder runs once per attempt so signed headers carry a fresh
    /// timestamp on every retry.
    pub(super) async fn send_json<T, B>(
        &self,
        operation_name: &str,
        retry_on: RetryOn,
        build_request: B,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Fn() -> Result<RequestBuilder>,
    {
        self.execute_with_retry(operation_name, retry_on, || {
            let request = build_request();
            async move {
                let response = request?.send().await?;
                let status = response.status();
                debug!("{} response status: {}", operation_name, status);

                if RETRY_STATUS_CODES.contains(&status.as_u16()) {
                    return Err(RetryableStatus(status).into());
                }

                let text = response
                    .text()
                    .await
                    .with_context(|| format!("Failed to read {} response", operation_name))?;

                serde_json::from_str::<T>(&text).with_context(|| {
                    format!(
                        "Unexpected {} response (HTTP {}): {}",
                        operation_name,
                        status,
                        truncate(&text, 200)
                    )
                })
            }
        })
        .await
    }
}

/// Transport and decoding failures as seen by the domain
pub(super) fn network_error(error: anyhow::Error) -> DomainError {
    DomainError::Network(format!("{:#}", error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast_retry() -> RetryConfig {
        RetryConfig {
            max_retries: 2,
            initial_backoff_ms: 1,
            max_backoff_ms: 2,
            backoff_multiplier: 2.0,
        }
    }

    fn fast_client() -> HttpClient {
        HttpClient::with_retry_config(&TimeoutConfig::default(), fast_retry()).unwrap()
    }

    #[tokio::test]
    async fn test_http_client_creation() {
        let client = HttpClient::new(&TimeoutConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_retries_retryable_status_until_success() {
        let client = fast_client();
        let calls = AtomicU32::new(0);

        let result: Result<u32> = client
            .execute_with_retry("test", RetryOn::Transient, || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(RetryableStatus(reqwest::StatusCode::BAD_GATEWAY).into())
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let client = fast_client();
        let calls = AtomicU32::new(0);

        let result: Result<()> = client
            .execute_with_retry("test", RetryOn::Transient, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(RetryableStatus(reqwest::StatusCode::SERVICE_UNAVAILABLE).into()) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_does_not_retry_other_errors() {
        let client = fast_client();
        let calls = AtomicU32::new(0);

        let result: Result<()> = client
            .execute_with_retry("test", RetryOn::Transient, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(anyhow::anyhow!("invalid json")) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_connect_only_does_not_retry_server_errors() {
        let client = fast_client();
        let calls = AtomicU32::new(0);

        let result: Result<()> = client
            .execute_with_retry("attendance", RetryOn::ConnectOnly, || {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err(RetryableStatus(reqwest::StatusCode::BAD_GATEWAY).into()) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_network_error_keeps_context_chain() {
        let error = anyhow::anyhow!("connection refused").context("Failed to fetch bindings");
        match network_error(error) {
            DomainError::Network(msg) => {
                assert_eq!(msg, "Failed to fetch bindings: connection refused");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
