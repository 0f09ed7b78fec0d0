use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use solwatch_core::CoreError;

// ==============================================================================
// Error Type
// ==============================================================================

#[derive(Debug)]
pub(crate) enum AppError {
    BadRequest(String),
    NotFound(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

/// Map a core failure onto the HTTP taxonomy.
///
/// Upstream messages are passed through for 503s. Anything unexpected is
/// logged and reported without detail.
pub(super) fn map_core_error(address: &str, err: CoreError) -> AppError {
    if err.is_invalid_input() {
        tracing::info!(address, error = %err, "rejected request");
        return AppError::BadRequest(err.to_string());
    }

    match err {
        CoreError::Rpc(rpc) => {
            tracing::error!(address, error = %rpc, "Solana RPC error");
            AppError::ServiceUnavailable(format!("Solana RPC error: {rpc}"))
        }
        other => {
            tracing::error!(address, error = %other, "unexpected error");
            AppError::Internal("Internal server error".to_string())
        }
    }
}
