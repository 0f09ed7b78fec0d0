use crate::error::RpcError;

/// Every request carries the same id: calls are never pipelined on one
/// connection, so replies need no correlation.
pub(super) const REQUEST_ID: u64 = 1;

#[derive(serde::Serialize)]
pub(super) struct JsonRpcRequest<'a> {
    pub(super) jsonrpc: &'static str,
    pub(super) id: u64,
    pub(super) method: &'a str,
    pub(super) params: &'a [serde_json::Value],
}

impl<'a> JsonRpcRequest<'a> {
    pub(super) fn new(method: &'a str, params: &'a [serde_json::Value]) -> Self {
        Self {
            jsonrpc: "2.0",
            id: REQUEST_ID,
            method,
            params,
        }
    }
}

#[derive(serde::Deserialize)]
pub(super) struct JsonRpcResponse {
    #[serde(default)]
    pub(super) result: Option<serde_json::Value>,
    #[serde(default)]
    pub(super) error: Option<serde_json::Value>,
}

/// Parse a JSON-RPC error value into a structured `RpcError`.
///
/// JSON-RPC 2.0 defines errors as `{"code": <int>, "message": <string>}`.
/// Solana nodes follow it, but some proxies drop `code` or `message`, so
/// both are optional here. Non-object errors fall back to `InvalidResponse`.
pub(super) fn parse_jsonrpc_error(err: serde_json::Value) -> RpcError {
    let Some(obj) = err.as_object() else {
        return RpcError::InvalidResponse(format!("non-standard JSON-RPC error: {err}"));
    };

    let code = obj.get("code").and_then(serde_json::Value::as_i64);
    let message = obj
        .get("message")
        .and_then(serde_json::Value::as_str)
        .unwrap_or("Unknown error")
        .to_owned();

    RpcError::ServerError { code, message }
}
