//! Outbound reachability probe for the configured tracker URLs
//!
//! A submission is only accepted when the tracker endpoint answers 200 at
//! the configured base URL. The probe is a configuration-time check: it
//! runs once per submitted URL with a bounded timeout and is never retried.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// File probed under the configured tracker base URL.
pub const TRACKER_ENDPOINT: &str = "piwik.php";

/// Why a probe did not come back with HTTP 200
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    #[error("HTTP status {status}")]
    Status { status: u16 },
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
    #[error("{message}")]
    Transport { message: String },
}

/// Port for the outbound reachability check
#[async_trait]
pub trait ReachabilityProbe: Send + Sync {
    /// GET `base_url` + `piwik.php`; Ok only on HTTP 200.
    async fn probe(&self, base_url: &str) -> Result<(), ProbeFailure>;
}

/// reqwest-backed probe with a bounded per-request timeout
pub struct HttpReachabilityProbe {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpReachabilityProbe {
    pub fn new(timeout: Duration, user_agent: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, timeout })
    }
}

#[async_trait]
impl ReachabilityProbe for HttpReachabilityProbe {
    async fn probe(&self, base_url: &str) -> Result<(), ProbeFailure> {
        // The endpoint is appended verbatim; the base URL is expected to
        // carry its trailing slash.
        let url = format!("{base_url}{TRACKER_ENDPOINT}");

        match self.client.get(&url).send().await {
            Ok(response) if response.status() == reqwest::StatusCode::OK => Ok(()),
            Ok(response) => Err(ProbeFailure::Status {
                status: response.status().as_u16(),
            }),
            Err(err) if err.is_timeout() => Err(ProbeFailure::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }),
            Err(err) => Err(ProbeFailure::Transport {
                message: err.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages_name_the_cause() {
        assert_eq!(
            ProbeFailure::Status { status: 404 }.to_string(),
            "HTTP status 404"
        );
        assert_eq!(
            ProbeFailure::Timeout { timeout_secs: 3 }.to_string(),
            "request timed out after 3s"
        );
    }
}
