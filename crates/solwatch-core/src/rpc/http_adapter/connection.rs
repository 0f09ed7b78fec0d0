use std::time::Duration;

use reqwest::Url;

use crate::error::CoreError;

/// Public mainnet endpoint used when no URL is configured.
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Connection settings for [`HttpRpcClient`](super::HttpRpcClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcClientConfig {
    /// `http://` or `https://` endpoint; provider tokens may be embedded in
    /// the path or query string.
    pub url: String,
    /// Applied to each HTTP attempt separately.
    pub timeout: Duration,
    /// Total number of attempts for retryable failures. Must be at least 1.
    pub max_retries: u32,
    /// Outbound request ceiling; every attempt counts, retries included.
    pub requests_per_second: Option<u32>,
}

impl RpcClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_requests_per_second(mut self, requests_per_second: Option<u32>) -> Self {
        self.requests_per_second = requests_per_second;
        self
    }

    pub(super) fn validate(&self) -> Result<(), CoreError> {
        parse_connection(&self.url)?;
        if self.max_retries == 0 {
            return Err(CoreError::Config(
                "max_retries must be at least 1".to_owned(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(CoreError::Config("timeout must be non-zero".to_owned()));
        }
        if self.requests_per_second == Some(0) {
            return Err(CoreError::Config(
                "requests_per_second must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

impl Default for RpcClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            requests_per_second: None,
        }
    }
}

pub(super) fn parse_connection(connection: &str) -> Result<Url, CoreError> {
    let parsed = Url::parse(connection).map_err(|e| {
        CoreError::Config(format!(
            "invalid connection `{connection}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(CoreError::Config(format!(
            "unsupported connection scheme `{other}`; expected http or https"
        ))),
    }
}
