//! Resilient LLM client wrapper with exponential backoff retry
//!
//! Wraps any LlmPort implementation so a cold or briefly overloaded model
//! server does not turn into an empty suggestion list on the first hiccup.

use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest, LlmResponse};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (0 = no retries, just the initial attempt)
    pub max_retries: u32,
    /// Base delay in milliseconds before first retry
    pub base_delay_ms: u64,
    /// Maximum delay in milliseconds (caps exponential growth)
    pub max_delay_ms: u64,
    /// Jitter factor (0.0-1.0) for randomizing delays
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 500,
            max_delay_ms: 5000,
            jitter_factor: 0.2,
        }
    }
}

/// Wrapper that adds retry logic to any LLM client
pub struct ResilientLlmClient {
    inner: Arc<dyn LlmPort>,
    config: RetryConfig,
}

impl ResilientLlmClient {
    /// Create a new resilient wrapper around an existing LLM client
    pub fn new(inner: Arc<dyn LlmPort>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// Delay before retry `attempt` (1-based): exponential backoff with jitter
    fn calculate_delay(&self, attempt: u32) -> u64 {
        let base = self.config.base_delay_ms;
        // Exponential: base * 2^(attempt-1)
        let exponential = base.saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)));
        let capped = exponential.min(self.config.max_delay_ms);

        // ±jitter_factor around the delay
        let jitter_range = (capped as f64 * self.config.jitter_factor) as i64;
        if jitter_range > 0 {
            let jitter = rand::thread_rng().gen_range(-jitter_range..=jitter_range);
            (capped as i64 + jitter).max(0) as u64
        } else {
            capped
        }
    }

    fn is_retryable(error: &LlmError) -> bool {
        match error {
            // Client errors will fail the same way again
            LlmError::RequestFailed(msg) => {
                !msg.contains("401")
                    && !msg.contains("403")
                    && !msg.contains("400")
                    && !msg.contains("404")
            }
            LlmError::InvalidResponse(_) => true,
        }
    }
}

#[async_trait]
impl LlmPort for ResilientLlmClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match self.inner.generate(request.clone()).await {
                Ok(response) => {
                    if attempt > 0 {
                        tracing::info!(attempt = attempt + 1, "LLM request succeeded after retry");
                    }
                    return Ok(response);
                }
                Err(e) => {
                    if !Self::is_retryable(&e) {
                        tracing::warn!(error = %e, "LLM request failed with non-retryable error");
                        return Err(e);
                    }
                    if attempt < self.config.max_retries {
                        let delay = self.calculate_delay(attempt + 1);
                        tracing::warn!(
                            attempt = attempt + 1,
                            max_retries = self.config.max_retries,
                            delay_ms = delay,
                            error = %e,
                            "LLM request failed, retrying"
                        );
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        let error =
            last_error.unwrap_or_else(|| LlmError::RequestFailed("Unknown error".to_string()));
        tracing::warn!(
            attempts = self.config.max_retries + 1,
            error = %error,
            "LLM request failed after all retry attempts"
        );
        Err(error)
    }
}
