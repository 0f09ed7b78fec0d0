use futures::stream::{self, StreamExt};
use time::OffsetDateTime;
use tracing::{debug, error, info};

use crate::address;
use crate::convert::timestamp_to_datetime;
use crate::error::{CoreError, RpcError};
use crate::rpc::{SignatureEntry, SolanaRpc};
use crate::types::{
    TransactionList, TransactionRecord, TransactionStatus, WalletSummary, MAX_TRANSACTION_LIMIT,
};

/// Largest signature page requested when counting transactions. The node
/// has no count primitive, so `tx_count` saturates at this value.
pub const TX_COUNT_CAP: usize = 1000;

// ==============================================================================
// Wallet Summary
// ==============================================================================

/// Build the balance / activity summary for `address`.
///
/// Issues three calls in sequence: `getBalance`, a one-entry signature page
/// for the last-active time, and a capped signature page whose length is
/// reported as `tx_count`. Any failure fails the whole summary.
pub async fn wallet_summary(rpc: &dyn SolanaRpc, address: &str) -> Result<WalletSummary, CoreError> {
    address::validate(address)?;
    info!(address, "fetching wallet summary");

    let balance_lamports = rpc.get_balance(address).await?;
    let latest = rpc.get_signatures_for_address(address, 1).await?;
    let tx_count = count_transactions(rpc, address).await?;

    // A zero block time carries no information; report no activity time.
    let last_active_secs = latest
        .first()
        .and_then(|entry| entry.block_time)
        .filter(|&secs| secs != 0);
    let last_active = timestamp_to_datetime(last_active_secs)?;

    WalletSummary::new(address, balance_lamports, tx_count, last_active)
}

async fn count_transactions(rpc: &dyn SolanaRpc, address: &str) -> Result<u64, CoreError> {
    let signatures = rpc.get_signatures_for_address(address, TX_COUNT_CAP).await?;
    Ok(signatures.len() as u64)
}

// ==============================================================================
// Transaction History
// ==============================================================================

/// Fetch up to `limit` recent transactions for `address`, most recent first.
///
/// Details are fetched one per signature. With `concurrency` of 1 the
/// fetches run strictly one after another; larger values keep up to that
/// many in flight while still yielding records in signature order.
///
/// A failure while fetching or converting one transaction drops only that
/// entry, so `count` may be lower than `limit`.
pub async fn transaction_history(
    rpc: &dyn SolanaRpc,
    address: &str,
    limit: usize,
    concurrency: usize,
) -> Result<TransactionList, CoreError> {
    address::validate(address)?;
    if !(1..=MAX_TRANSACTION_LIMIT).contains(&limit) {
        return Err(CoreError::InvalidLimit {
            got: limit,
            max: MAX_TRANSACTION_LIMIT,
        });
    }
    info!(address, limit, "fetching transactions");

    let signatures = rpc.get_signatures_for_address(address, limit).await?;
    if signatures.is_empty() {
        info!(address, "no transactions found");
        return TransactionList::empty(address);
    }

    let requested = signatures.len();
    let transactions: Vec<TransactionRecord> = stream::iter(signatures)
        .map(|entry| fetch_record(rpc, entry))
        .buffered(concurrency.max(1))
        .filter_map(|record| async move { record })
        .collect()
        .await;

    if transactions.len() < requested {
        info!(
            address,
            requested,
            returned = transactions.len(),
            "some transactions were skipped"
        );
    }

    TransactionList::new(address, transactions)
}

/// Resolve one signature into a record, logging and swallowing any failure.
async fn fetch_record(rpc: &dyn SolanaRpc, entry: SignatureEntry) -> Option<TransactionRecord> {
    let signature = entry.signature().unwrap_or_default();
    match build_record(rpc, &entry).await {
        Ok(Some(record)) => Some(record),
        Ok(None) => {
            debug!(signature, "transaction not found, skipping");
            None
        }
        Err(err) => {
            error!(
                signature,
                slot = entry.slot,
                error = %err,
                "error processing transaction, skipping"
            );
            None
        }
    }
}

async fn build_record(
    rpc: &dyn SolanaRpc,
    entry: &SignatureEntry,
) -> Result<Option<TransactionRecord>, CoreError> {
    let signature = entry.signature().ok_or_else(|| {
        RpcError::InvalidResponse("signature entry has no signature".to_string())
    })?;
    let Some(detail) = rpc.get_transaction(signature).await? else {
        return Ok(None);
    };

    let block_time =
        timestamp_to_datetime(entry.block_time)?.unwrap_or(OffsetDateTime::UNIX_EPOCH);

    Ok(Some(TransactionRecord {
        signature: signature.to_string(),
        block_time,
        slot: entry.slot,
        status: TransactionStatus::from_err(detail.err()),
        fee: detail.fee(),
    }))
}
