// src/core/net.rs
//
// One pooled blocking client for the whole process, plus the retry
// wrapper every outbound call goes through. Transient failures
// (connect/timeout errors, 429 and 5xx statuses the county backend is
// known to throw) are retried with exponential back-off; anything else
// propagates immediately.

use std::{sync::OnceLock, thread, time::Duration};

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::consts::{BACKOFF_BASE_SECS, CONNECT_TIMEOUT_SECS, MAX_RETRIES, USER_AGENT};

#[derive(Debug, Error)]
pub enum NetError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

/// Shared, lazily-constructed client. Carries no per-request state, so
/// reuse across threads is safe and keeps connection pooling effective.
pub fn client() -> &'static Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}

/// Retry knobs. Default matches the policy the whole app runs with:
/// MAX_RETRIES additional attempts after the first, back-off
/// `BACKOFF_BASE_SECS * 2^attempt` seconds between them.
#[derive(Clone, Copy, Debug)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff_base_secs: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            backoff_base_secs: BACKOFF_BASE_SECS,
        }
    }
}

impl RetryPolicy {
    /// No waiting, no second chances. For tests.
    pub fn none() -> Self {
        Self { max_retries: 0, backoff_base_secs: 0 }
    }
}

fn is_retriable(err: &NetError) -> bool {
    match err {
        NetError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
        NetError::UnexpectedStatus { status, .. } => {
            matches!(status, 429 | 500 | 502 | 503 | 504)
        }
    }
}

/// Run `operation` until it succeeds, a non-retriable error comes back,
/// or the retry budget is spent. Last error wins.
pub fn retry_with_backoff<T>(
    policy: RetryPolicy,
    mut operation: impl FnMut() -> Result<T, NetError>,
) -> Result<T, NetError> {
    let mut attempt = 0u32;

    loop {
        let err = match operation() {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= policy.max_retries {
                    return Err(err);
                }
                err
            }
        };

        let delay_secs = policy
            .backoff_base_secs
            .saturating_mul(1u64 << attempt.min(62));
        tracing::warn!(
            attempt,
            max_retries = policy.max_retries,
            delay_secs,
            error = %err,
            "transient HTTP error, retrying after backoff"
        );
        if delay_secs > 0 {
            thread::sleep(Duration::from_secs(delay_secs));
        }
        attempt += 1;
    }
}

/// Form-encoded POST; returns the response body on any 2xx.
pub fn post_form(
    url: &str,
    form: &[(String, String)],
    timeout_secs: u64,
    policy: RetryPolicy,
) -> Result<String, NetError> {
    retry_with_backoff(policy, || {
        let resp = client()
            .post(url)
            .timeout(Duration::from_secs(timeout_secs))
            .form(form)
            .send()?;
        read_body(resp, url)
    })
}

/// Plain GET; returns the response body on any 2xx.
pub fn get_text(url: &str, timeout_secs: u64, policy: RetryPolicy) -> Result<String, NetError> {
    retry_with_backoff(policy, || {
        let resp = client()
            .get(url)
            .timeout(Duration::from_secs(timeout_secs))
            .send()?;
        read_body(resp, url)
    })
}

fn read_body(resp: reqwest::blocking::Response, url: &str) -> Result<String, NetError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(NetError::UnexpectedStatus {
            status: status.as_u16(),
            url: s!(url),
        });
    }
    Ok(resp.text()?)
}
