mod error;
mod wallet;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use solwatch_core::rpc::SolanaRpc;

// ==============================================================================
// Application State
// ==============================================================================

pub struct AppState {
    /// Shared, stateless RPC client used by every request.
    pub rpc: Arc<dyn SolanaRpc>,
    pub detail_concurrency: usize,
}

type SharedState = Arc<AppState>;

// ==============================================================================
// Router
// ==============================================================================

pub fn build_router(state: AppState) -> Router {
    // Read-only public API: any origin may call it, without credentials.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/wallet/{address}/summary", get(wallet::get_summary))
        .route("/wallet/{address}/transactions", get(wallet::get_transactions))
        .fallback(not_found)
        .layer(cors)
        .with_state(Arc::new(state))
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "Solana Wallet Activity API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Track Solana wallet activity and retrieve transaction history",
        "endpoints": {
            "wallet_summary": "/wallet/{address}/summary",
            "wallet_transactions": "/wallet/{address}/transactions",
            "health": "/health",
        },
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn not_found() -> error::AppError {
    error::AppError::NotFound("route not found".to_string())
}
