//! Opt-in retry layer for read API transports.
//!
//! The read API client itself never retries. Callers that want retries wrap
//! a transport in [`RetryingTransport`] (or set a [`RetryPolicy`] on the
//! client builder, which does the wrapping).

use crate::error::{ReadApiError, ReadApiResult};
use crate::rpc::{JsonRpcRequest, RpcTransport};

use async_trait::async_trait;
use std::time::Duration;

/// Retry policy for read API requests.
#[derive(Debug, Clone)]
pub enum RetryPolicy {
    /// No retries. The default.
    None,
    /// Retry on transport failures + 429/502/503/504. Every read API method
    /// is a read, so this is safe for all of them.
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::None
    }
}

impl RetryPolicy {
    /// The config to wrap a transport with, or `None` for no wrapping.
    pub fn config(&self) -> Option<RetryConfig> {
        match self {
            RetryPolicy::None => None,
            RetryPolicy::Idempotent => Some(RetryConfig::idempotent()),
            RetryPolicy::Custom(c) => Some(c.clone()),
        }
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add jitter to the delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// The default config for idempotent requests.
    pub fn idempotent() -> Self {
        Self {
            retryable_statuses: vec![429, 502, 503, 504],
            ..Self::default()
        }
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }

    /// Whether `err` is worth another attempt.
    ///
    /// Only transport-level failures qualify; a response without `result`
    /// or an undecodable body is final.
    pub fn is_retryable(&self, err: &ReadApiError) -> bool {
        match err {
            ReadApiError::Status { status, .. } => self.retryable_statuses.contains(status),
            ReadApiError::Transport(re) => {
                #[cfg(not(target_arch = "wasm32"))]
                let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                #[cfg(target_arch = "wasm32")]
                let retryable = re.is_timeout() || re.is_request();
                retryable
            }
            _ => false,
        }
    }
}

/// Wraps a transport with exponential backoff.
#[derive(Debug, Clone)]
pub struct RetryingTransport<T> {
    inner: T,
    config: RetryConfig,
}

impl<T: RpcTransport> RetryingTransport<T> {
    pub fn new(inner: T, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }
}

#[async_trait]
impl<T: RpcTransport> RpcTransport for RetryingTransport<T> {
    async fn send(&self, request: &JsonRpcRequest) -> ReadApiResult<serde_json::Value> {
        let config = &self.config;
        let mut attempt = 0;

        loop {
            match self.inner.send(request).await {
                Ok(body) => return Ok(body),
                Err(e) if !config.is_retryable(&e) => return Err(e),
                Err(e) if attempt >= config.max_retries => {
                    if attempt == 0 {
                        return Err(e);
                    }
                    return Err(ReadApiError::MaxRetriesExceeded {
                        attempts: attempt + 1,
                        last_error: Box::new(e),
                    });
                }
                Err(e) => {
                    let delay = config.delay_for_attempt(attempt);
                    tracing::debug!(
                        attempt = attempt + 1,
                        max = config.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Retrying {}",
                        request.method
                    );
                    futures_timer::Delay::new(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    /// Fails with the queued errors, then succeeds.
    struct Flaky {
        calls: AtomicU32,
        failures: Mutex<Vec<ReadApiError>>,
    }

    impl Flaky {
        fn new(failures: Vec<ReadApiError>) -> Self {
            Self {
                calls: AtomicU32::new(0),
                failures: Mutex::new(failures),
            }
        }
    }

    #[async_trait]
    impl RpcTransport for Flaky {
        async fn send(&self, _request: &JsonRpcRequest) -> ReadApiResult<serde_json::Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.failures.lock().unwrap().pop() {
                Some(err) => Err(err),
                None => Ok(serde_json::json!({ "result": 1 })),
            }
        }
    }

    fn fast_config(max_retries: u32) -> RetryConfig {
        RetryConfig {
            max_retries,
            initial_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            backoff_factor: 2.0,
            jitter: false,
            retryable_statuses: vec![429, 503],
        }
    }

    fn unavailable() -> ReadApiError {
        ReadApiError::Status {
            status: 503,
            body: String::new(),
        }
    }

    fn request() -> JsonRpcRequest {
        JsonRpcRequest::new("getAsset", "1", serde_json::json!({ "id": "x" }))
    }

    #[test]
    fn test_retry_policy_default_is_none() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::None));
        assert!(RetryPolicy::default().config().is_none());
    }

    #[test]
    fn test_retry_config_idempotent_includes_429() {
        let config = RetryConfig::idempotent();
        assert!(config.retryable_statuses.contains(&429));
        assert!(config.retryable_statuses.contains(&502));
        assert!(config.retryable_statuses.contains(&503));
        assert!(config.retryable_statuses.contains(&504));
    }

    #[test]
    fn test_retry_config_delay_for_attempt_no_jitter() {
        let config = RetryConfig {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: false,
            retryable_statuses: vec![502, 503, 504],
        };
        assert_eq!(config.delay_for_attempt(0).as_millis(), 100);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 200);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 400);
    }

    #[test]
    fn test_retry_config_delay_caps_at_max() {
        let config = RetryConfig {
            max_retries: 5,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(2000),
            backoff_factor: 10.0,
            jitter: false,
            retryable_statuses: vec![],
        };
        assert_eq!(config.delay_for_attempt(3).as_millis(), 2000);
    }

    #[test]
    fn test_no_result_is_never_retryable() {
        let err = ReadApiError::NoResult {
            method: "getAsset".to_string(),
            message: "missing".to_string(),
        };
        assert!(!RetryConfig::idempotent().is_retryable(&err));
    }

    #[tokio::test]
    async fn test_retries_then_succeeds() {
        let inner = Flaky::new(vec![unavailable(), unavailable()]);
        let transport = RetryingTransport::new(inner, fast_config(3));
        let body = transport.send(&request()).await.unwrap();
        assert_eq!(body["result"], 1);
        assert_eq!(transport.inner.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let inner = Flaky::new(vec![unavailable(), unavailable(), unavailable()]);
        let transport = RetryingTransport::new(inner, fast_config(2));
        let err = transport.send(&request()).await.unwrap_err();
        match err {
            ReadApiError::MaxRetriesExceeded {
                attempts,
                last_error,
            } => {
                assert_eq!(attempts, 3);
                assert!(matches!(*last_error, ReadApiError::Status { status: 503, .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.inner.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_non_retryable_error_returns_immediately() {
        let inner = Flaky::new(vec![ReadApiError::Status {
            status: 400,
            body: "bad".to_string(),
        }]);
        let transport = RetryingTransport::new(inner, fast_config(3));
        let err = transport.send(&request()).await.unwrap_err();
        assert!(matches!(err, ReadApiError::Status { status: 400, .. }));
        assert_eq!(transport.inner.calls.load(Ordering::SeqCst), 1);
    }
}
