use tracing::warn;

use crate::error::{CoreError, RpcError};
use crate::rpc::types::{SignatureEntry, TransactionDetail};

/// Normalize a `getBalance` result.
///
/// Nodes reply with `{"context": {...}, "value": <lamports>}`; older proxies
/// return the bare integer. A `null` result or a missing `value` reads as 0.
pub(super) fn parse_balance(raw: serde_json::Value) -> Result<u64, CoreError> {
    let value = match raw {
        serde_json::Value::Null => return Ok(0),
        serde_json::Value::Object(mut obj) => match obj.remove("value") {
            None | Some(serde_json::Value::Null) => return Ok(0),
            Some(value) => value,
        },
        other => other,
    };

    value.as_u64().ok_or_else(|| {
        RpcError::InvalidResponse(format!("invalid getBalance value: {value}")).into()
    })
}

/// Normalize a `getSignaturesForAddress` result.
///
/// Only the outer array is strict. Each element is decoded on its own and an
/// unreadable element is kept as an empty entry, so the page length stays
/// the node's and callers decide what to do with the entry.
pub(super) fn parse_signatures(raw: serde_json::Value) -> Result<Vec<SignatureEntry>, CoreError> {
    let items = match raw {
        serde_json::Value::Null => return Ok(Vec::new()),
        serde_json::Value::Array(items) => items,
        other => {
            return Err(RpcError::InvalidResponse(format!(
                "invalid getSignaturesForAddress result: expected an array, got {}",
                json_kind(&other)
            ))
            .into())
        }
    };

    Ok(items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).unwrap_or_else(|e| {
                warn!(index, error = %e, "unreadable signature entry");
                SignatureEntry::default()
            })
        })
        .collect())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

pub(super) fn parse_transaction(
    raw: serde_json::Value,
) -> Result<Option<TransactionDetail>, CoreError> {
    if raw.is_null() {
        return Ok(None);
    }

    serde_json::from_value(raw)
        .map(Some)
        .map_err(|e| RpcError::InvalidResponse(format!("invalid getTransaction result: {e}")).into())
}
