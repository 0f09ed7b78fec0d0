//! Shared test helpers for `solwatch-core` unit tests.
//!
//! Builders for signature pages and transaction details so that tests
//! across modules share one source of dummy data.

use crate::rpc::{SignatureEntry, TransactionDetail, TransactionMeta};

/// Address used in the API's reference examples.
pub const WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

/// `count` signature entries named `SIG0..`, most recent (highest slot) first.
pub fn numbered_signatures(count: usize) -> Vec<SignatureEntry> {
    (0..count)
        .map(|i| {
            let slot = (count - i) as u64;
            SignatureEntry::new(format!("SIG{i}"), slot, Some(1_700_000_000 + slot as i64))
        })
        .collect()
}

/// A transaction detail carrying `meta.fee` and `meta.err`.
pub fn detail(fee: Option<u64>, err: Option<serde_json::Value>) -> TransactionDetail {
    TransactionDetail {
        meta: Some(TransactionMeta { fee, err }),
    }
}
