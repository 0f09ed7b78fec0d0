//! Domain types returned by the wallet aggregator.
//!
//! Contains the wallet summary, individual transaction records and the
//! transaction list. Values are request-scoped and serialize directly into
//! the HTTP API's JSON shape.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::address;
use crate::convert::{lamports_to_sol, round_sol};
use crate::error::CoreError;

/// Default number of transactions returned by the history view.
pub const DEFAULT_TRANSACTION_LIMIT: usize = 10;

/// Upper bound on `limit` accepted by the history view, matching the
/// largest page `getSignaturesForAddress` serves.
pub const MAX_TRANSACTION_LIMIT: usize = 1000;

// ==============================================================================
// Transaction Status
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Success,
    Failed,
}

impl TransactionStatus {
    /// A transaction failed iff its metadata carries a non-null `err`.
    pub fn from_err(err: Option<&serde_json::Value>) -> Self {
        match err {
            Some(value) if !value.is_null() => Self::Failed,
            _ => Self::Success,
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

// ==============================================================================
// Wallet Summary
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSummary {
    pub address: String,
    /// Balance in SOL, rounded to 9 decimal places.
    pub balance: f64,
    pub balance_lamports: u64,
    /// Number of signatures seen for the address, capped at 1000.
    pub tx_count: u64,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_active: Option<OffsetDateTime>,
}

impl WalletSummary {
    /// Build a summary, re-checking the address before it is emitted.
    pub fn new(
        address: &str,
        balance_lamports: u64,
        tx_count: u64,
        last_active: Option<OffsetDateTime>,
    ) -> Result<Self, CoreError> {
        address::validate(address)?;
        Ok(Self {
            address: address.to_owned(),
            balance: round_sol(lamports_to_sol(balance_lamports)),
            balance_lamports,
            tx_count,
            last_active,
        })
    }
}

// ==============================================================================
// Transactions
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub signature: String,
    #[serde(with = "time::serde::rfc3339")]
    pub block_time: OffsetDateTime,
    pub slot: u64,
    pub status: TransactionStatus,
    /// Fee in lamports.
    pub fee: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionList {
    pub address: String,
    /// Most recent first, in the order the node returned signatures.
    pub transactions: Vec<TransactionRecord>,
    pub count: usize,
}

impl TransactionList {
    /// Build a list, re-checking the address. `count` is always derived
    /// from the records actually present.
    pub fn new(address: &str, transactions: Vec<TransactionRecord>) -> Result<Self, CoreError> {
        address::validate(address)?;
        Ok(Self {
            address: address.to_owned(),
            count: transactions.len(),
            transactions,
        })
    }

    pub fn empty(address: &str) -> Result<Self, CoreError> {
        Self::new(address, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const ADDRESS: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

    #[test]
    fn status_from_err_values() {
        assert_eq!(TransactionStatus::from_err(None), TransactionStatus::Success);
        assert_eq!(
            TransactionStatus::from_err(Some(&serde_json::Value::Null)),
            TransactionStatus::Success
        );
        assert_eq!(
            TransactionStatus::from_err(Some(
                &serde_json::json!({ "InstructionError": [0, "Custom"] })
            )),
            TransactionStatus::Failed
        );
    }

    #[test]
    fn summary_serializes_api_shape() {
        let summary = WalletSummary::new(
            ADDRESS,
            1_420_000_000,
            37,
            Some(datetime!(2026-01-09 23:06:40 UTC)),
        )
        .expect("valid summary");

        let json = serde_json::to_value(&summary).expect("serializable");
        assert_eq!(
            json,
            serde_json::json!({
                "address": ADDRESS,
                "balance": 1.42,
                "balance_lamports": 1_420_000_000u64,
                "tx_count": 37,
                "last_active": "2026-01-09T23:06:40Z",
            })
        );
    }

    #[test]
    fn summary_without_activity_serializes_null() {
        let summary = WalletSummary::new(ADDRESS, 0, 0, None).expect("valid summary");
        let json = serde_json::to_value(&summary).expect("serializable");
        assert!(json["last_active"].is_null());
    }

    #[test]
    fn output_constructors_revalidate_address() {
        assert!(matches!(
            WalletSummary::new("short", 0, 0, None),
            Err(CoreError::InvalidAddress(_))
        ));
        assert!(matches!(
            TransactionList::empty("0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl"),
            Err(CoreError::InvalidAddress(_))
        ));
    }

    #[test]
    fn list_count_tracks_records() {
        let record = TransactionRecord {
            signature: "S1".to_string(),
            block_time: OffsetDateTime::UNIX_EPOCH,
            slot: 7,
            status: TransactionStatus::Failed,
            fee: 5000,
        };
        let list = TransactionList::new(ADDRESS, vec![record]).expect("valid list");
        assert_eq!(list.count, 1);

        let json = serde_json::to_value(&list).expect("serializable");
        assert_eq!(json["transactions"][0]["status"], "failed");
        assert_eq!(json["transactions"][0]["block_time"], "1970-01-01T00:00:00Z");
    }
}
