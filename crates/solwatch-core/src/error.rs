#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("{0}")]
    InvalidAddress(String),

    #[error("limit must be between 1 and {max}, got {got}")]
    InvalidLimit { got: usize, max: usize },

    #[error("{0}")]
    InvalidSignature(String),

    #[error("block time out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Failures raised by the JSON-RPC transport.
///
/// `Timeout`, `Transport` and `HttpStatus` are produced only after the retry
/// budget is exhausted. `ServerError` and `InvalidResponse` are terminal on
/// the first attempt.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("RPC request timed out after {retries} retries")]
    Timeout { retries: u32 },

    #[error("RPC request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("RPC request failed: HTTP status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("RPC error: {message}")]
    ServerError { code: Option<i64>, message: String },

    #[error("invalid RPC response: {0}")]
    InvalidResponse(String),
}

impl CoreError {
    /// Whether the error originated upstream (transport or JSON-RPC level).
    pub fn is_rpc(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }

    /// Whether the error was caused by caller input rather than by the
    /// upstream node or by this service.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidAddress(_) | Self::InvalidLimit { .. } | Self::InvalidSignature(_)
        )
    }
}
