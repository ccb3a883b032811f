//! HTTP send loop shared by the remote providers.
//!
//! Retries transient HTTP errors (429, 500, 502, 503, 504) and network
//! failures with exponential backoff. Other non-2xx statuses fail at once.

use anyhow::{Context, Result};
use reqwest::{RequestBuilder, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

/// Maximum number of attempts for transient errors.
pub(crate) const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
const BASE_DELAY_MS: u64 = 500;

/// Returns `true` if the HTTP status code is transient and should be retried.
pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503 | 504)
}

// Both OpenAI and Gemini wrap failures as `{"error": {"message": ...}}`;
// Gemini sometimes sends a one-element array of those.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorResponse {
    Single(ErrorBody),
    Multiple(Vec<ErrorBody>),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

impl ErrorResponse {
    fn message(&self) -> String {
        match self {
            Self::Single(b) => b.error.message.clone(),
            Self::Multiple(v) => v
                .first()
                .map(|b| b.error.message.clone())
                .unwrap_or_else(|| "Unknown error".into()),
        }
    }
}

/// Extract a readable message from an API error body, falling back to the raw body.
pub(crate) fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.message())
        .unwrap_or_else(|_| body.to_string())
}

/// Send the request built by `build` until it succeeds or retries run out,
/// returning the successful response body.
///
/// `build` is called once per attempt because a `RequestBuilder` is consumed
/// by `send`.
pub(crate) async fn send_with_retry<F>(api: &str, build: F) -> Result<String>
where
    F: Fn() -> RequestBuilder,
{
    let mut last_error: Option<anyhow::Error> = None;

    for attempt in 0..MAX_RETRIES {
        if attempt > 0 {
            let delay = BASE_DELAY_MS * 2u64.pow(attempt - 1);
            warn!(api, attempt, delay_ms = delay, "Retrying API request");
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let response = match build().send().await {
            Ok(r) => r,
            Err(e) => {
                // Network-level errors are always retryable.
                warn!(api, attempt, error = %e, "Network error calling API");
                last_error = Some(anyhow::Error::new(e).context(format!("Failed to reach {} API", api)));
                continue;
            }
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read {} API response body", api))?;

        if status.is_success() {
            return Ok(body);
        }

        let err_msg = error_message(&body);
        if is_retryable_status(status) {
            warn!(api, attempt, status = %status, "Transient API error, will retry");
            last_error = Some(anyhow::anyhow!("{} API error ({}): {}", api, status, err_msg));
            continue;
        }

        anyhow::bail!("{} API error ({}): {}", api, status, err_msg);
    }

    Err(last_error.unwrap_or_else(|| {
        anyhow::anyhow!("{} API request failed after {} attempts", api, MAX_RETRIES)
    }))
}
