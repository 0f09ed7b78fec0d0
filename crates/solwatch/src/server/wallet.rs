use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use solwatch_core::types::{DEFAULT_TRANSACTION_LIMIT, MAX_TRANSACTION_LIMIT};
use solwatch_core::wallet::{transaction_history, wallet_summary};
use solwatch_core::{TransactionList, WalletSummary};

use super::error::{map_core_error, AppError};
use super::SharedState;

// ==============================================================================
// DTOs
// ==============================================================================

#[derive(Deserialize)]
pub(super) struct TransactionsQuery {
    limit: Option<usize>,
}

// ==============================================================================
// Handlers
// ==============================================================================

pub(super) async fn get_summary(
    State(state): State<SharedState>,
    Path(address): Path<String>,
) -> Result<Json<WalletSummary>, AppError> {
    let summary = wallet_summary(state.rpc.as_ref(), &address)
        .await
        .map_err(|e| map_core_error(&address, e))?;
    Ok(Json(summary))
}

pub(super) async fn get_transactions(
    State(state): State<SharedState>,
    Path(address): Path<String>,
    query: Result<Query<TransactionsQuery>, QueryRejection>,
) -> Result<Json<TransactionList>, AppError> {
    let Query(query) =
        query.map_err(|e| AppError::BadRequest(format!("invalid query: {}", e.body_text())))?;

    let limit = query.limit.unwrap_or(DEFAULT_TRANSACTION_LIMIT);
    validate_limit(limit)?;

    let list = transaction_history(state.rpc.as_ref(), &address, limit, state.detail_concurrency)
        .await
        .map_err(|e| map_core_error(&address, e))?;
    Ok(Json(list))
}

fn validate_limit(limit: usize) -> Result<(), AppError> {
    if limit == 0 {
        return Err(AppError::BadRequest("limit must be at least 1".to_string()));
    }
    if limit > MAX_TRANSACTION_LIMIT {
        return Err(AppError::BadRequest(format!(
            "limit must be at most {MAX_TRANSACTION_LIMIT}"
        )));
    }
    Ok(())
}
