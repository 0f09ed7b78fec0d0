use std::num::NonZeroU32;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::header;
use tracing::{debug, error, info, trace, warn};

use crate::error::{CoreError, RpcError};
use crate::rpc::types::{SignatureEntry, TransactionDetail};
use crate::types::MAX_TRANSACTION_LIMIT;

use super::super::SolanaRpc;
use super::connection::{parse_connection, RpcClientConfig};
use super::parsing::{parse_balance, parse_signatures, parse_transaction};
use super::protocol::{parse_jsonrpc_error, JsonRpcRequest, JsonRpcResponse};

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Solana JSON-RPC client over HTTP(S).
///
/// Holds no per-request state: one instance is shared by every request
/// the server handles. Each call builds a fresh envelope and retries
/// transport failures up to `max_retries` total attempts, immediately and
/// without backoff.
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: reqwest::Url,
    max_retries: u32,
    limiter: Option<DirectRateLimiter>,
}

impl HttpRpcClient {
    pub fn new(config: &RpcClientConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let url = parse_connection(&config.url)?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(32)
            .tcp_nodelay(true)
            .build()
            .map_err(|e| CoreError::Config(format!("build HTTP client: {e}")))?;

        let limiter = config
            .requests_per_second
            .and_then(NonZeroU32::new)
            .map(|limit| RateLimiter::direct(Quota::per_second(limit)));

        Ok(Self {
            client,
            url,
            max_retries: config.max_retries,
            limiter,
        })
    }

    async fn wait_for_rate_limit(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }

    /// Issue one JSON-RPC call and return its `result` verbatim.
    ///
    /// Timeouts, connection failures and non-2xx statuses are retried. An
    /// `error` member in the reply, or a body that is not JSON-RPC, ends the
    /// call on the first attempt.
    pub async fn call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, CoreError> {
        let request = JsonRpcRequest::new(method, &params);

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            self.wait_for_rate_limit().await;
            info!(
                rpc.method = method,
                rpc.attempt = attempt,
                rpc.max_retries = self.max_retries,
                "calling RPC method"
            );

            let err = match self.send_once(&request).await {
                Ok(result) => return Ok(result),
                Err(err) => err,
            };

            if !is_retryable(&err) {
                error!(rpc.method = method, error = %err, "RPC call failed");
                return Err(err.into());
            }

            warn!(
                rpc.method = method,
                error = %err,
                "RPC attempt failed, retry {attempt}/{}",
                self.max_retries
            );
            if attempt >= self.max_retries {
                return Err(exhausted(err, self.max_retries).into());
            }
        }
    }

    async fn send_once(&self, request: &JsonRpcRequest<'_>) -> Result<serde_json::Value, RpcError> {
        let response = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
            .map_err(RpcError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(RpcError::HttpStatus(status));
        }

        let body = response.text().await.map_err(RpcError::Transport)?;
        debug!(rpc.method = request.method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.method = request.method, body = %body, "rpc response body");

        // The body stays in the trace above; it never reaches API clients.
        let decoded: JsonRpcResponse = serde_json::from_str(&body)
            .map_err(|e| RpcError::InvalidResponse(format!("decode JSON-RPC response: {e}")))?;

        if let Some(err) = decoded.error {
            return Err(parse_jsonrpc_error(err));
        }

        Ok(decoded.result.unwrap_or(serde_json::Value::Null))
    }
}

#[async_trait]
impl SolanaRpc for HttpRpcClient {
    async fn get_balance(&self, address: &str) -> Result<u64, CoreError> {
        if address.is_empty() {
            return Err(CoreError::InvalidAddress(
                "Address cannot be empty".to_owned(),
            ));
        }

        let raw = self
            .call("getBalance", vec![serde_json::json!(address)])
            .await?;
        parse_balance(raw)
    }

    async fn get_signatures_for_address(
        &self,
        address: &str,
        limit: usize,
    ) -> Result<Vec<SignatureEntry>, CoreError> {
        if address.is_empty() {
            return Err(CoreError::InvalidAddress(
                "Address cannot be empty".to_owned(),
            ));
        }
        if !(1..=MAX_TRANSACTION_LIMIT).contains(&limit) {
            return Err(CoreError::InvalidLimit {
                got: limit,
                max: MAX_TRANSACTION_LIMIT,
            });
        }

        let raw = self
            .call(
                "getSignaturesForAddress",
                vec![
                    serde_json::json!(address),
                    serde_json::json!({ "limit": limit }),
                ],
            )
            .await?;
        parse_signatures(raw)
    }

    async fn get_transaction(
        &self,
        signature: &str,
    ) -> Result<Option<TransactionDetail>, CoreError> {
        if signature.is_empty() {
            return Err(CoreError::InvalidSignature(
                "Signature cannot be empty".to_owned(),
            ));
        }

        let raw = self
            .call(
                "getTransaction",
                vec![
                    serde_json::json!(signature),
                    serde_json::json!({ "encoding": "json" }),
                ],
            )
            .await?;
        parse_transaction(raw)
    }
}

// ==============================================================================
// Retry Classification
// ==============================================================================

fn is_retryable(err: &RpcError) -> bool {
    matches!(err, RpcError::Transport(_) | RpcError::HttpStatus(_))
}

/// Translate the last attempt's failure into the terminal error.
fn exhausted(err: RpcError, max_retries: u32) -> RpcError {
    match err {
        RpcError::Transport(e) if e.is_timeout() => RpcError::Timeout {
            retries: max_retries,
        },
        other => other,
    }
}
